//! Selection model for the find-analyte dialog.

use thiserror::Error;

use crate::session::{SessionError, SessionStore};

/// Most analytes a single search may carry.
pub const MAX_ANALYTE_SELECTIONS: usize = 3;

/// Errors raised by the picker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    /// The picker already holds the maximum number of analytes
    #[error("You've reached the maximum number of analytes for searching")]
    SelectionFull,
}

/// The analytes picked for one search, capped and de-duplicated.
///
/// Values are stored lowercased, in insertion order, mirroring how the
/// dialog's select list carries option values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalytePicker {
    selected: Vec<String>,
}

impl AnalytePicker {
    /// Creates an empty picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a picker from a search field's newline-separated values.
    ///
    /// Blank lines are skipped and anything past the selection cap is
    /// dropped.
    pub fn from_search_value(value: &str) -> Self {
        let mut picker = Self::new();
        for line in value.split('\n') {
            if line.is_empty() {
                continue;
            }
            if picker.add(line).is_err() {
                break;
            }
        }
        picker
    }

    /// Adds an analyte by value.
    ///
    /// The value is lowercased before insertion. Adding a value already
    /// present is accepted and changes nothing; adding past the cap fails.
    pub fn add(&mut self, value: &str) -> Result<(), PickerError> {
        let value = value.to_lowercase();
        if self.selected.contains(&value) {
            return Ok(());
        }
        if self.selected.len() == MAX_ANALYTE_SELECTIONS {
            return Err(PickerError::SelectionFull);
        }
        self.selected.push(value);
        Ok(())
    }

    /// Removes an analyte by value; true when something was removed.
    pub fn remove(&mut self, value: &str) -> bool {
        let value = value.to_lowercase();
        let before = self.selected.len();
        self.selected.retain(|selected| selected != &value);
        self.selected.len() != before
    }

    /// The selected values, in insertion order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Number of selected analytes.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// True when the selection cap is reached.
    pub fn is_full(&self) -> bool {
        self.selected.len() == MAX_ANALYTE_SELECTIONS
    }

    /// Joins the selection into the search field's newline format.
    pub fn search_value(&self) -> String {
        self.selected.join("\n")
    }

    /// Writes the selection into per-slot session keys.
    ///
    /// Slot keys run from `{base_key}0` through `{base_key}2`; unused
    /// slots are blanked so a shrinking selection leaves no stale values.
    pub fn persist(&self, store: &dyn SessionStore, base_key: &str) -> Result<(), SessionError> {
        for slot in 0..MAX_ANALYTE_SELECTIONS {
            let value = self.selected.get(slot).map(String::as_str).unwrap_or("");
            store.put(&format!("{}{}", base_key, slot), value)?;
        }
        Ok(())
    }

    /// Rebuilds a picker from per-slot session keys, stopping at the first
    /// empty slot.
    pub fn restore(store: &dyn SessionStore, base_key: &str) -> Self {
        let mut picker = Self::new();
        for slot in 0..MAX_ANALYTE_SELECTIONS {
            match store.get(&format!("{}{}", base_key, slot)) {
                Some(value) if !value.is_empty() => {
                    let _ = picker.add(&value);
                }
                _ => break,
            }
        }
        picker
    }
}
