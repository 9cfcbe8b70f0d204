//! The staff-roster walkthrough: bind a table to a form, edit a row
//! through the form, add a new member with an injected id allocator, and
//! delete a row. Run with `cargo run --example staff_roster`.

use rowsync_binder::Binding;
use rowsync_model::{Cell, Control, Form, Row, SelectOption, Table};

fn print_table(binding: &Binding) {
    for row in &binding.table().rows {
        let fields: Vec<String> = row
            .record
            .iter()
            .map(|(name, value)| format!("{name}={value:?}"))
            .collect();
        println!("  row {} -> {}", row.key, fields.join(", "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::new();
    let mut alice = Row::new(
        "1",
        "{personId:1,firstName:'Alice',lastName:'Ames',email:'alice@example.org',os:['Windows','Linux']}",
    );
    alice.add_cell(Cell::marked("firstName", "Alice"));
    alice.add_cell(Cell::marked("lastName", "Ames"));
    alice.add_cell(Cell::marked("email", "alice@example.org"));
    let edit_alice = alice.add_cell(Cell::plain("edit"));
    table.add_row(alice);

    let mut form = Form::new("staffForm");
    form.add_control(Control::hidden("personId"));
    form.add_control(Control::text("firstName"));
    form.add_control(Control::text("lastName"));
    form.add_control(Control::text("email"));
    form.add_control(Control::multi_select(
        "os",
        vec![
            SelectOption::new("Windows", "Windows"),
            SelectOption::new("Linux", "Linux"),
            SelectOption::new("Mac", "Mac"),
        ],
    ));

    let mut binding = Binding::bind(table, form, "personId")?;
    println!("bound:");
    print_table(&binding);

    // Click Alice's edit link, change her last name, commit.
    binding.populate(edit_alice);
    binding.form_mut().first_named_mut("lastName").unwrap().value = "Archer".to_string();
    binding.commit();
    println!("after edit:");
    print_table(&binding);

    // The id would normally come back from the server; the demo fakes it
    // with a counter owned by the caller, not the binder.
    let mut next_id = 10;
    let mut fresh_id = || {
        let id = next_id.to_string();
        next_id += 1;
        id
    };

    binding.clear();
    binding.form_mut().first_named_mut("firstName").unwrap().value = "Bob".to_string();
    binding.form_mut().first_named_mut("lastName").unwrap().value = "Burke".to_string();
    binding.form_mut().first_named_mut("email").unwrap().value = "bob@example.org".to_string();
    binding.form_mut().first_named_mut("os").unwrap().select_value("Mac");
    binding.insert_with(&mut fresh_id);
    println!("after insert:");
    print_table(&binding);

    // Delete Alice; Bob stays loaded in the form.
    let alice_row_id = binding.table().row_by_key("1").unwrap().id;
    binding.remove(alice_row_id);
    println!("after delete (form still holds id {}):", binding.loaded_key());
    print_table(&binding);

    Ok(())
}
