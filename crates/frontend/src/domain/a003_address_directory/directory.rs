use std::collections::BTreeMap;

/// A value paired with its buyer-facing label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPair {
    /// Source-language (English) value, used as the key
    pub value: String,
    /// Display-language (Arabic) label; equals `value` when no translation exists
    pub label: String,
}

/// Where a directory came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorySource {
    Dataset,
    BuiltIn,
}

/// Bilingual governorate → areas hierarchy.
///
/// Both maps always share the same key set: a directory is only produced by
/// [`DirectoryAccumulator::finish`](super::builder::DirectoryAccumulator::finish),
/// which builds them together.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressDirectory {
    governorates: BTreeMap<String, LabelPair>,
    areas: BTreeMap<String, Vec<LabelPair>>,
    source: DirectorySource,
}

impl AddressDirectory {
    pub(super) fn from_parts(
        governorates: BTreeMap<String, LabelPair>,
        areas: BTreeMap<String, Vec<LabelPair>>,
        source: DirectorySource,
    ) -> Self {
        debug_assert!(governorates.keys().eq(areas.keys()));
        Self {
            governorates,
            areas,
            source,
        }
    }

    pub fn source(&self) -> DirectorySource {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.governorates.is_empty()
    }

    pub fn governorate_count(&self) -> usize {
        self.governorates.len()
    }

    pub fn governorate(&self, key: &str) -> Option<&LabelPair> {
        self.governorates.get(key)
    }

    /// Governorate keys in key order
    pub fn governorate_keys(&self) -> impl Iterator<Item = &str> {
        self.governorates.keys().map(String::as_str)
    }

    /// Areas of a governorate ordered by source value; empty for unknown keys
    pub fn areas(&self, governorate: &str) -> &[LabelPair] {
        self.areas.get(governorate).map_or(&[], Vec::as_slice)
    }

    pub fn area(&self, governorate: &str, area: &str) -> Option<&LabelPair> {
        self.areas(governorate).iter().find(|a| a.value == area)
    }

    pub fn contains_area(&self, governorate: &str, area: &str) -> bool {
        self.area(governorate, area).is_some()
    }

    /// Governorates ordered by display label for the select box
    pub fn governorate_options(&self) -> Vec<LabelPair> {
        let mut options: Vec<LabelPair> = self.governorates.values().cloned().collect();
        options.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.value.cmp(&b.value)));
        options
    }
}
