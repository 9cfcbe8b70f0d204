use crate::value::Record;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A display element inside a row. Cells carrying a marker mirror the
/// record field of the same name; unmarked cells model trigger elements
/// (edit/delete links, buttons) and static text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub id: Uuid,
    pub marker: Option<String>,
    pub text: String,
}

impl Cell {
    pub fn marked(marker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            marker: Some(marker.into()),
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            marker: None,
            text: text.into(),
        }
    }
}

/// One table row. `key` is the row's unique identifier attribute;
/// `metadata` is the declared attribute text the record is parsed from at
/// bind time. The row owns its record outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    pub id: Uuid,
    pub key: String,
    pub metadata: String,
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub record: Record,
}

impl Row {
    pub fn new(key: impl Into<String>, metadata: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            key: key.into(),
            metadata: metadata.into(),
            cells: Vec::new(),
            record: Record::new(),
        }
    }

    pub fn add_cell(&mut self, cell: Cell) -> Uuid {
        let id = cell.id;
        self.cells.push(cell);
        id
    }

    /// True when the element id is the row itself or any of its cells.
    pub fn contains_element(&self, element: Uuid) -> bool {
        self.id == element || self.cells.iter().any(|c| c.id == element)
    }

    /// Overwrites the text of every cell marked with the field name.
    pub fn set_marked_text(&mut self, field: &str, text: &str) {
        for cell in &mut self.cells {
            if cell.marker.as_deref() == Some(field) {
                cell.text = text.to_string();
            }
        }
    }

    pub fn marked_text(&self, field: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.marker.as_deref() == Some(field))
            .map(|c| c.text.as_str())
    }

    /// Structural clone used by Insert: same markers, cell text, metadata,
    /// and record field set, but fresh element ids and the given key.
    pub fn cloned_as(&self, key: impl Into<String>) -> Row {
        let mut clone = self.clone();
        clone.id = Uuid::new_v4();
        clone.key = key.into();
        for cell in &mut clone.cells {
            cell.id = Uuid::new_v4();
        }
        clone
    }
}

/// A table: an ordered list of rows. The first row present at bind time
/// doubles as the template for inserts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: Uuid,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn template_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn row_by_key(&self, key: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub fn row_by_key_mut(&mut self, key: &str) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.key == key)
    }

    /// Resolves the row enclosing the given element id (the element may be
    /// the row itself or one of its cells).
    pub fn row_containing(&self, element: Uuid) -> Option<&Row> {
        self.rows.iter().find(|r| r.contains_element(element))
    }

    pub fn row_containing_mut(&mut self, element: Uuid) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.contains_element(element))
    }

    /// Detaches and returns the row with the given row id.
    pub fn remove_row(&mut self, id: Uuid) -> Option<Row> {
        let index = self.rows.iter().position(|r| r.id == id)?;
        Some(self.rows.remove(index))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
