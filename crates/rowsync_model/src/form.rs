use crate::control::Control;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A form: a named, flat collection of controls. Controls are matched to
/// row fields by their `name`; several controls may share one name
/// (radio/checkbox groups, or deliberately mixed kinds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    pub id: Uuid,
    pub name: String,
    pub controls: Vec<Control>,
}

impl Form {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            controls: Vec::new(),
        }
    }

    pub fn add_control(&mut self, control: Control) {
        self.controls.push(control);
    }

    pub fn control(&self, id: Uuid) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn control_mut(&mut self, id: Uuid) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.id == id)
    }

    pub fn controls_named(&self, name: &str) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(move |c| c.name == name)
    }

    pub fn controls_named_mut(&mut self, name: &str) -> impl Iterator<Item = &mut Control> {
        self.controls.iter_mut().filter(move |c| c.name == name)
    }

    pub fn first_named(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.name == name)
    }

    pub fn first_named_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.name == name)
    }

    /// Resets every control: unchecks toggles, deselects options, empties
    /// text values.
    pub fn clear(&mut self) {
        for control in &mut self.controls {
            control.clear();
        }
    }
}
