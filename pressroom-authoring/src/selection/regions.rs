//! Target-region selection with the `"all"` sentinel
//!
//! The selection is an ordered set of region codes. The reserved code
//! `"all"` means "no specific subset" and is mutually exclusive with
//! concrete codes; the set is never empty.

use pressroom_common::api::Region;
use serde::{Deserialize, Serialize};

/// Reserved sentinel meaning every region
pub const ALL_REGIONS: &str = "all";

/// Ordered, duplicate-free set of selected region codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionSelection {
    codes: Vec<String>,
}

impl Default for RegionSelection {
    fn default() -> Self {
        Self {
            codes: vec![ALL_REGIONS.to_string()],
        }
    }
}

impl RegionSelection {
    /// Rebuild a selection from persisted codes, re-establishing the
    /// invariants: empty or sentinel-containing input collapses to
    /// `{"all"}`, duplicates are dropped preserving first occurrence.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self { codes: Vec::new() };
        for code in codes {
            selection.select(&code.into());
        }
        if selection.codes.is_empty() {
            selection = Self::default();
        }
        selection
    }

    /// Add a region code. Selecting the sentinel replaces the whole
    /// set; selecting a concrete code removes the sentinel. Idempotent.
    pub fn select(&mut self, code: &str) {
        if code == ALL_REGIONS {
            self.codes.clear();
            self.codes.push(ALL_REGIONS.to_string());
            return;
        }
        self.codes.retain(|c| c != ALL_REGIONS);
        if !self.codes.iter().any(|c| c == code) {
            self.codes.push(code.to_string());
        }
    }

    /// Remove a concrete region code. An emptied set resets to the
    /// sentinel.
    pub fn deselect(&mut self, code: &str) {
        self.codes.retain(|c| c != code);
        if self.codes.is_empty() {
            self.codes.push(ALL_REGIONS.to_string());
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn is_all(&self) -> bool {
        self.contains(ALL_REGIONS)
    }

    /// Ordered wire form, sentinel included verbatim
    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}

/// Case-insensitive substring filter over a resolved region list.
/// Filtering never touches the selection.
pub fn filter_regions<'a>(regions: &'a [Region], query: &str) -> Vec<&'a Region> {
    let needle = query.to_lowercase();
    regions
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}
