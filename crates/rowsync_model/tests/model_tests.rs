use rowsync_model::{
    Cell, Control, ControlKind, FieldValue, Form, Record, Row, SelectOption, Table, serialization,
};

#[test]
fn test_record_set_preserves_position_on_overwrite() {
    let mut record = Record::new();
    record.set("id", "1");
    record.set("name", "Alice");
    record.set("email", "alice@example.org");

    record.set("name", "Alicia");

    let names: Vec<&str> = record.field_names().collect();
    assert_eq!(names, vec!["id", "name", "email"]);
    assert_eq!(record.get("name"), Some(&FieldValue::Scalar("Alicia".to_string())));
}

#[test]
fn test_control_clear_per_kind() {
    let mut text = Control::text("name");
    text.value = "Alice".to_string();
    text.clear();
    assert_eq!(text.value, "");

    let mut check = Control::checkbox("os", "Linux");
    check.checked = true;
    check.clear();
    assert!(!check.checked);
    assert_eq!(check.value, "Linux", "value attribute must survive clear");

    let mut select = Control::select(
        "dept",
        vec![SelectOption::new("it", "IT"), SelectOption::new("hr", "HR")],
    );
    select.select_value("hr");
    assert_eq!(select.selected_values(), vec!["hr".to_string()]);
    select.clear();
    assert!(select.selected_values().is_empty());
    assert_eq!(select.options.len(), 2, "option list must survive clear");
}

#[test]
fn test_control_current_value() {
    let mut text = Control::text("name");
    text.value = "Bob".to_string();
    assert_eq!(text.current_value(), "Bob");

    let mut select = Control::select(
        "dept",
        vec![SelectOption::new("it", "IT"), SelectOption::new("hr", "HR")],
    );
    assert_eq!(select.current_value(), "");
    select.select_value("it");
    assert_eq!(select.current_value(), "it");
}

#[test]
fn test_set_current_value_only_checks_matching_toggle() {
    let mut radio = Control::radio("dept", "it");
    radio.set_current_value("hr");
    assert!(!radio.checked);
    radio.set_current_value("it");
    assert!(radio.checked);
}

#[test]
fn test_form_lookups() {
    let mut form = Form::new("demoForm");
    form.add_control(Control::hidden("personId"));
    form.add_control(Control::checkbox("os", "Windows"));
    form.add_control(Control::checkbox("os", "Linux"));

    assert_eq!(form.controls_named("os").count(), 2);
    assert_eq!(
        form.first_named("personId").map(|c| c.kind),
        Some(ControlKind::Hidden)
    );
    assert!(form.first_named("missing").is_none());
}

#[test]
fn test_row_element_resolution_and_marked_text() {
    let mut row = Row::new("1", "{personId:1,name:'Alice'}");
    let name_cell = row.add_cell(Cell::marked("name", "Alice"));
    let edit_link = row.add_cell(Cell::plain("edit"));

    assert!(row.contains_element(row.id));
    assert!(row.contains_element(name_cell));
    assert!(row.contains_element(edit_link));

    row.set_marked_text("name", "Alicia");
    assert_eq!(row.marked_text("name"), Some("Alicia"));

    let mut table = Table::new();
    table.add_row(row);
    assert!(table.row_containing(edit_link).is_some());
    assert!(table.row_containing(uuid::Uuid::new_v4()).is_none());
}

#[test]
fn test_cloned_row_gets_fresh_ids() {
    let mut row = Row::new("1", "{personId:1,name:'Alice'}");
    row.add_cell(Cell::marked("name", "Alice"));
    row.record.set("name", "Alice");

    let clone = row.cloned_as("7");

    assert_eq!(clone.key, "7");
    assert_ne!(clone.id, row.id);
    assert_ne!(clone.cells[0].id, row.cells[0].id);
    assert_eq!(clone.cells[0].marker, row.cells[0].marker);
    assert_eq!(clone.metadata, row.metadata);
    assert!(clone.record.contains("name"));
}

#[test]
fn test_table_remove_row() {
    let mut table = Table::new();
    let row = Row::new("1", "{}");
    let row_id = row.id;
    table.add_row(row);
    table.add_row(Row::new("2", "{}"));

    let removed = table.remove_row(row_id).expect("row not removed");
    assert_eq!(removed.key, "1");
    assert_eq!(table.len(), 1);
    assert!(table.row_by_key("1").is_none());
}

#[test]
fn test_table_json_roundtrip() {
    let mut table = Table::new();
    let mut row = Row::new("1", "{personId:1}");
    row.add_cell(Cell::marked("name", "Alice"));
    row.record.set("personId", "1");
    row.record.set("os", vec!["Windows".to_string(), "Linux".to_string()]);
    table.add_row(row);

    let path = std::env::temp_dir().join(format!("rowsync_table_{}.json", table.id));
    serialization::save_table(&table, &path).expect("Failed to save table");
    let loaded = serialization::load_table(&path).expect("Failed to load table");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.id, table.id);
    assert_eq!(loaded.len(), 1);
    let row = loaded.row_by_key("1").expect("row missing after load");
    assert_eq!(row.marked_text("name"), Some("Alice"));
    assert_eq!(
        row.record.get("os"),
        Some(&FieldValue::Many(vec!["Windows".to_string(), "Linux".to_string()]))
    );
}

#[test]
fn test_form_json_roundtrip() {
    let mut form = Form::new("demoForm");
    form.add_control(Control::hidden("personId"));
    let mut select = Control::multi_select(
        "os",
        vec![SelectOption::new("Windows", "Windows"), SelectOption::new("Linux", "Linux")],
    );
    select.select_value("Linux");
    form.add_control(select);

    let path = std::env::temp_dir().join(format!("rowsync_form_{}.json", form.id));
    serialization::save_form(&form, &path).expect("Failed to save form");
    let loaded = serialization::load_form(&path).expect("Failed to load form");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.controls.len(), 2);
    let os = loaded.first_named("os").expect("os control missing");
    assert!(os.multiple);
    assert_eq!(os.selected_values(), vec!["Linux".to_string()]);
}
