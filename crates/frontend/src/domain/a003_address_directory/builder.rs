use super::classifier::{self, ColumnRule, RULES};
use super::directory::{AddressDirectory, DirectorySource, LabelPair};
use super::error::DirectoryIngestError;
use super::translations::{canonical_area, canonical_governorate, translate};
use crate::shared::excel_importer::TabularRow;
use crate::shared::text;
use std::collections::{BTreeMap, BTreeSet};

/// Collects governorate/area pairs; duplicates collapse on insert
#[derive(Debug, Default)]
pub struct DirectoryAccumulator {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl DirectoryAccumulator {
    /// Returns `true` when the pair was not seen before
    pub fn add(&mut self, governorate: &str, area: &str) -> bool {
        self.entries
            .entry(governorate.to_string())
            .or_default()
            .insert(area.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attach display labels. Areas come out ordered by source value.
    pub fn finish(self, source: DirectorySource) -> AddressDirectory {
        let mut governorates = BTreeMap::new();
        let mut areas = BTreeMap::new();

        for (key, names) in self.entries {
            governorates.insert(
                key.clone(),
                LabelPair {
                    label: translate(&key),
                    value: key.clone(),
                },
            );
            let labelled = names
                .into_iter()
                .map(|value| LabelPair {
                    label: translate(&value),
                    value,
                })
                .collect();
            areas.insert(key, labelled);
        }

        AddressDirectory::from_parts(governorates, areas, source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    Unclassified,
    EmptyValue,
}

/// Classify, clean and canonicalize one row
fn extract_pair(
    row: &TabularRow,
    rules: &[&dyn ColumnRule],
) -> Result<(String, String, &'static str), SkipReason> {
    let (raw, rule) = classifier::classify(row, rules).ok_or(SkipReason::Unclassified)?;
    let city = text::clean(&raw.city).ok_or(SkipReason::EmptyValue)?;
    let area = text::clean(&raw.area).ok_or(SkipReason::EmptyValue)?;
    Ok((canonical_governorate(&city), canonical_area(&area), rule))
}

/// Build a directory from imported dataset rows.
///
/// Fails when there are no rows or when no row yields a usable pair; the
/// caller decides what to fall back to.
pub fn build_directory(rows: &[TabularRow]) -> Result<AddressDirectory, DirectoryIngestError> {
    build_with_rules(rows, &RULES)
}

pub fn build_with_rules(
    rows: &[TabularRow],
    rules: &[&dyn ColumnRule],
) -> Result<AddressDirectory, DirectoryIngestError> {
    if rows.is_empty() {
        return Err(DirectoryIngestError::Empty);
    }

    let mut acc = DirectoryAccumulator::default();
    let mut by_rule: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut skipped = 0usize;

    for (idx, row) in rows.iter().enumerate() {
        match extract_pair(row, rules) {
            Ok((city, area, rule)) => {
                acc.add(&city, &area);
                *by_rule.entry(rule).or_default() += 1;
            }
            Err(reason) => {
                skipped += 1;
                log::debug!("dataset row {} skipped: {:?}", idx + 1, reason);
            }
        }
    }

    if acc.is_empty() {
        return Err(DirectoryIngestError::NoUsableRows { total: rows.len() });
    }

    let directory = acc.finish(DirectorySource::Dataset);
    log::info!(
        "address directory: {} governorates from {} rows ({} skipped, rules {:?})",
        directory.governorate_count(),
        rows.len(),
        skipped,
        by_rule
    );
    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn row(cells: &[(&str, Value)]) -> TabularRow {
        TabularRow::new(
            cells
                .iter()
                .map(|(h, v)| (h.to_string(), v.clone()))
                .collect(),
        )
    }

    fn sample_rows() -> Vec<TabularRow> {
        vec![
            row(&[("City", json!("Cairo")), ("Area", json!("Nasr City"))]),
            row(&[("City", json!("Cairo")), ("Area", json!("Maadi"))]),
            row(&[("City", json!("Cairo")), ("Area", json!("  Maadi "))]),
            row(&[("City", json!("Giza")), ("Area", json!("Dokki"))]),
        ]
    }

    #[test]
    fn test_dedup_and_sort() {
        let dir = build_directory(&sample_rows()).unwrap();
        assert_eq!(dir.source(), DirectorySource::Dataset);
        assert_eq!(dir.governorate_count(), 2);

        let cairo: Vec<&str> = dir.areas("Cairo").iter().map(|a| a.value.as_str()).collect();
        assert_eq!(cairo, vec!["Maadi", "Nasr City"]);
        assert_eq!(dir.governorate("Cairo").unwrap().label, "القاهرة");
        assert_eq!(dir.area("Cairo", "Maadi").unwrap().label, "المعادي");
    }

    #[test]
    fn test_every_governorate_has_areas() {
        let dir = build_directory(&sample_rows()).unwrap();
        for key in dir.governorate_keys() {
            assert!(!dir.areas(key).is_empty(), "{key} has no areas");
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let rows = sample_rows();
        assert_eq!(build_directory(&rows).unwrap(), build_directory(&rows).unwrap());
    }

    #[test]
    fn test_arabic_governorate_merges_with_english() {
        let rows = vec![
            row(&[("المحافظة", json!("القاهرة")), ("المنطقة", json!("المعادي"))]),
            row(&[("City", json!("Cairo")), ("Area", json!("Maadi"))]),
        ];
        let dir = build_directory(&rows).unwrap();
        assert_eq!(dir.governorate_count(), 1);
        let values: Vec<&str> = dir.areas("Cairo").iter().map(|a| a.value.as_str()).collect();
        assert_eq!(values, vec!["Maadi"]);
    }

    #[test]
    fn test_mixed_language_areas_render_once() {
        let rows = vec![
            row(&[("المحافظة", json!("القاهرة")), ("المنطقة", json!("المعادي"))]),
            row(&[("City", json!("Cairo")), ("Area", json!("Maadi"))]),
            row(&[("المحافظة", json!("الشرقية")), ("المنطقة", json!("فاقوس"))]),
            row(&[("المحافظة", json!("الشرقية")), ("المنطقة", json!("قرية بلا ترجمة"))]),
        ];
        let dir = build_directory(&rows).unwrap();

        let cairo: Vec<&str> = dir.areas("Cairo").iter().map(|a| a.label.as_str()).collect();
        assert_eq!(cairo, vec!["المعادي"]);

        let sharqia = dir.areas("Sharqia");
        assert_eq!(sharqia.len(), 2);
        assert_eq!(dir.area("Sharqia", "Faqous").unwrap().label, "فاقوس");
        assert!(dir.contains_area("Sharqia", "قرية بلا ترجمة"));
    }

    #[test]
    fn test_unusable_rows_are_skipped() {
        let rows = vec![
            row(&[("City", json!("null")), ("Area", json!("Maadi"))]),
            row(&[("City", json!("Cairo")), ("Area", Value::Null)]),
            row(&[("A", json!("only one"))]),
            row(&[("A", json!("Alexandria")), ("B", json!("Smouha"))]),
        ];
        let dir = build_directory(&rows).unwrap();
        assert_eq!(dir.governorate_keys().collect::<Vec<_>>(), vec!["Alexandria"]);
    }

    #[test]
    fn test_no_rows_and_no_usable_rows_fail() {
        assert_eq!(build_directory(&[]), Err(DirectoryIngestError::Empty));
        let rows = vec![row(&[("City", json!("")), ("Area", json!(""))])];
        assert_eq!(
            build_directory(&rows),
            Err(DirectoryIngestError::NoUsableRows { total: 1 })
        );
    }

    #[test]
    fn test_numeric_area_codes() {
        let rows = vec![row(&[("city", json!("Cairo")), ("zone", json!(12.0))])];
        let dir = build_directory(&rows).unwrap();
        assert!(dir.contains_area("Cairo", "12"));
    }
}
