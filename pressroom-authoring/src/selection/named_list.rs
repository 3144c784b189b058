//! Single-value selection over a resolved name list
//!
//! Shared by the artist and streaming-platform managers: a resolved
//! list of names plus an optional current choice, with a "create new"
//! path that inserts into the list transactionally with selection.

use pressroom_common::{Error, Result};

/// Wraps a resolved name list and at most one selected name
#[derive(Debug, Clone, Default)]
pub struct NamedListSelection {
    options: Vec<String>,
    selected: Option<String>,
    dedup_case_insensitive: bool,
}

impl NamedListSelection {
    pub fn new(options: Vec<String>, dedup_case_insensitive: bool) -> Self {
        Self {
            options,
            selected: None,
            dedup_case_insensitive,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Choose an existing name from the resolved list
    pub fn select(&mut self, name: &str) {
        self.selected = Some(name.to_string());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Trim the input, insert it into the resolved list if not already
    /// present, and select it. Duplicate detection is exact-case by
    /// default; differently-cased names are distinct entries unless the
    /// case-insensitive flag was set at construction.
    ///
    /// Returns `true` when a new entry was inserted, `false` when the
    /// name was already present (selection is updated either way).
    pub fn create_and_select(&mut self, name: &str) -> Result<bool> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("Name must not be empty".to_string()));
        }

        let present = if self.dedup_case_insensitive {
            let lowered = trimmed.to_lowercase();
            self.options.iter().any(|o| o.to_lowercase() == lowered)
        } else {
            self.options.iter().any(|o| o == trimmed)
        };

        if !present {
            self.options.push(trimmed.to_string());
        }
        self.selected = Some(trimmed.to_string());
        Ok(!present)
    }
}
