use crate::errors::{BindingError, BindingResult};
use rowsync_model::{ControlKind, FieldValue, Form, Record, Table};
use uuid::Uuid;

/// One field name resolved to every form control bearing it, in form
/// order. Resolved once at bind time; the control set is fixed afterward,
/// so the control ids stay valid.
#[derive(Debug, Clone)]
pub struct FieldTarget {
    pub field: String,
    pub controls: Vec<(ControlKind, Uuid)>,
}

impl FieldTarget {
    /// True when any matching control reads back as a collection
    /// (checkbox group or select).
    pub fn collects(&self) -> bool {
        self.controls.iter().any(|(kind, _)| kind.collects())
    }
}

/// The two-way association between one table and one form.
///
/// The binding owns both sides; rows own their records. All operations
/// after `bind` run to completion synchronously and fail silently on
/// missing matches: an unknown trigger element, an identifier with no
/// matching row, or a field with no matching control is a no-op for that
/// step, never an error.
#[derive(Debug)]
pub struct Binding {
    table: Table,
    form: Form,
    key_field: String,
    targets: Vec<FieldTarget>,
}

impl Binding {
    /// Binds a table to a form, designating `key_field` as the record
    /// identifier, and seeds each row's record from its declared
    /// metadata using the default markup parser.
    pub fn bind(table: Table, form: Form, key_field: impl Into<String>) -> BindingResult<Binding> {
        Self::bind_with(table, form, key_field, rowsync_markup::parse_metadata)
    }

    /// Same as [`Binding::bind`], but with the metadata-parsing capability
    /// injected by the caller.
    pub fn bind_with<P>(
        mut table: Table,
        form: Form,
        key_field: impl Into<String>,
        parse: P,
    ) -> BindingResult<Binding>
    where
        P: Fn(&str) -> rowsync_markup::ParseResult<Record>,
    {
        let key_field = key_field.into();
        if form.first_named(&key_field).is_none() {
            return Err(BindingError::MissingIdentifierControl(key_field));
        }

        for row in &mut table.rows {
            let record = parse(&row.metadata).map_err(|e| BindingError::Metadata {
                key: row.key.clone(),
                source: e,
            })?;
            if !record.contains(&key_field) {
                return Err(BindingError::MissingIdentifier(
                    row.key.clone(),
                    key_field.clone(),
                ));
            }
            row.record = record;
        }

        let targets = resolve_targets(&table, &form);
        Ok(Binding {
            table,
            form,
            key_field,
            targets,
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Mutable access to the form, for edits standing in for user input.
    /// Adding or removing controls after bind is not supported.
    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    /// The field-target table resolved at bind time.
    pub fn field_targets(&self) -> &[FieldTarget] {
        &self.targets
    }

    /// The identifier value the form currently holds; empty means no row
    /// is loaded.
    pub fn loaded_key(&self) -> String {
        self.form
            .first_named(&self.key_field)
            .map(|c| c.current_value())
            .unwrap_or_default()
    }

    /// Copies the record of the row enclosing `trigger` into the form.
    /// The form is cleared first; every control whose name and (for
    /// toggles and options) value matches takes the field's value.
    pub fn populate(&mut self, trigger: Uuid) {
        let Some(row) = self.table.row_containing(trigger) else {
            return;
        };

        self.form.clear();
        for (field, value) in row.record.iter() {
            let Some(target) = self.targets.iter().find(|t| t.field == field) else {
                continue;
            };
            match value {
                FieldValue::Many(values) => {
                    for (kind, id) in &target.controls {
                        let Some(control) = self.form.control_mut(*id) else {
                            continue;
                        };
                        match kind {
                            ControlKind::Select => {
                                for v in values {
                                    control.select_value(v);
                                }
                            }
                            ControlKind::Checkbox => {
                                if values.contains(&control.value) {
                                    control.checked = true;
                                }
                            }
                            _ => {}
                        }
                    }
                }
                FieldValue::Scalar(v) => {
                    for (_, id) in &target.controls {
                        if let Some(control) = self.form.control_mut(*id) {
                            control.set_current_value(v);
                        }
                    }
                }
            }
        }
    }

    /// Writes the form's current values back into the row whose key
    /// equals the form's identifier value: scalar reads update both the
    /// record and the marked display cells (Text, Password, Hidden,
    /// checked Radio, TextArea applied in that fixed order, last applied
    /// wins); checkbox groups and selects overwrite the record field with
    /// the checked/selected values, leaving display text alone.
    pub fn commit(&mut self) {
        let key = self.loaded_key();
        let Some(row) = self.table.row_by_key_mut(&key) else {
            return;
        };

        let fields: Vec<String> = row.record.field_names().map(str::to_string).collect();
        for field in fields {
            let Some(target) = self.targets.iter().find(|t| t.field == field) else {
                continue;
            };

            for kind in ControlKind::COMMIT_CHAIN {
                for (k, id) in &target.controls {
                    if *k != kind {
                        continue;
                    }
                    let Some(control) = self.form.control(*id) else {
                        continue;
                    };
                    // A radio only speaks for the group while checked.
                    if kind == ControlKind::Radio && !control.checked {
                        continue;
                    }
                    let value = control.value.clone();
                    row.set_marked_text(&field, &value);
                    row.record.set(field.clone(), FieldValue::Scalar(value));
                }
            }

            if target.collects() {
                let mut collected = Vec::new();
                for (kind, id) in &target.controls {
                    if *kind != ControlKind::Checkbox {
                        continue;
                    }
                    if let Some(control) = self.form.control(*id) {
                        if control.checked {
                            collected.push(control.value.clone());
                        }
                    }
                }
                for (kind, id) in &target.controls {
                    if *kind != ControlKind::Select {
                        continue;
                    }
                    if let Some(control) = self.form.control(*id) {
                        collected.extend(control.selected_values());
                    }
                }
                row.record.set(field.clone(), FieldValue::Many(collected));
            }
        }
    }

    /// Clones the template (first) row under the new key, points the
    /// form's identifier control at it, appends it as the last row, and
    /// commits the form's current values into it. Uniqueness of the key
    /// is the caller's responsibility.
    pub fn insert(&mut self, new_key: impl Into<String>) {
        let new_key = new_key.into();
        let Some(template) = self.table.template_row() else {
            return;
        };
        let clone = template.cloned_as(&new_key);

        if let Some(control) = self.form.first_named_mut(&self.key_field) {
            control.set_current_value(&new_key);
        }
        self.table.add_row(clone);
        self.commit();
    }

    /// [`Binding::insert`] with the identifier supplied by an injected
    /// allocator.
    pub fn insert_with<F>(&mut self, alloc: F)
    where
        F: FnOnce() -> String,
    {
        let new_key = alloc();
        self.insert(new_key);
    }

    /// Detaches the row enclosing `trigger` and drops it. When that row
    /// was the one loaded in the form, the form is cleared first;
    /// otherwise the form is left untouched.
    pub fn remove(&mut self, trigger: Uuid) {
        let key = self.loaded_key();
        let Some(row) = self.table.row_containing(trigger) else {
            return;
        };
        let must_clear = row.key == key;
        let row_id = row.id;

        self.table.remove_row(row_id);
        if must_clear {
            self.form.clear();
        }
    }

    /// Resets every form field to empty/unselected.
    pub fn clear(&mut self) {
        self.form.clear();
    }
}

/// Builds the field-target table: the union of field names across all
/// bound records (first-seen order), each mapped to the form controls
/// bearing that name in form order. Fields with no matching control get
/// no entry and are skipped silently later.
fn resolve_targets(table: &Table, form: &Form) -> Vec<FieldTarget> {
    let mut targets: Vec<FieldTarget> = Vec::new();
    for row in &table.rows {
        for name in row.record.field_names() {
            if targets.iter().any(|t| t.field == name) {
                continue;
            }
            let controls: Vec<(ControlKind, Uuid)> = form
                .controls_named(name)
                .map(|c| (c.kind, c.id))
                .collect();
            if !controls.is_empty() {
                targets.push(FieldTarget {
                    field: name.to_string(),
                    controls,
                });
            }
        }
    }
    targets
}
