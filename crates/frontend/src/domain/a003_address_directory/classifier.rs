//! Deciding which cells of a dataset row hold the governorate and the area
//!
//! Rules are tried in order; the first one that recognizes the row wins.
//! Named-column recognition always comes before the positional guess.

use crate::shared::excel_importer::TabularRow;
use crate::shared::text;

/// Header fragments that mark the governorate column
pub const CITY_HEADER_KEYWORDS: &[&str] = &[
    "city",
    "governorate",
    "gov",
    "province",
    "state",
    "محافظة",
    "المحافظة",
    "مدينة",
    "المدينة",
];

/// Header fragments that mark the area column
pub const AREA_HEADER_KEYWORDS: &[&str] = &[
    "area",
    "district",
    "zone",
    "region",
    "location",
    "neighborhood",
    "منطقة",
    "المنطقة",
    "حي",
];

/// Raw (not yet normalized) cell texts picked out of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    pub city: String,
    pub area: String,
}

pub trait ColumnRule: Sync {
    fn name(&self) -> &'static str;

    /// `None` when the rule does not apply to this row
    fn classify(&self, row: &TabularRow) -> Option<RawPair>;
}

/// Picks the columns whose headers contain a known keyword
pub struct HeaderKeywordRule {
    pub city_keywords: &'static [&'static str],
    pub area_keywords: &'static [&'static str],
}

impl HeaderKeywordRule {
    fn matches(header: &str, keywords: &[&str]) -> bool {
        let header = text::normalize(header).to_lowercase();
        keywords.iter().any(|k| header.contains(k))
    }
}

impl ColumnRule for HeaderKeywordRule {
    fn name(&self) -> &'static str {
        "header-keyword"
    }

    fn classify(&self, row: &TabularRow) -> Option<RawPair> {
        let city_idx = row
            .cells
            .iter()
            .position(|(h, _)| Self::matches(h, self.city_keywords))?;
        let area_idx = row
            .cells
            .iter()
            .enumerate()
            .position(|(idx, (h, _))| idx != city_idx && Self::matches(h, self.area_keywords))?;

        // A recognized row stays with this rule even when the cells are blank;
        // the builder drops it rather than guessing from other columns.
        Some(RawPair {
            city: text::cell_text(&row.cells[city_idx].1),
            area: text::cell_text(&row.cells[area_idx].1),
        })
    }
}

/// First two non-empty cells are governorate then area
pub struct PositionalRule;

impl ColumnRule for PositionalRule {
    fn name(&self) -> &'static str {
        "positional"
    }

    fn classify(&self, row: &TabularRow) -> Option<RawPair> {
        let mut usable = row.values().filter_map(text::clean_cell);
        let city = usable.next()?;
        let area = usable.next()?;
        Some(RawPair { city, area })
    }
}

pub static HEADER_KEYWORDS: HeaderKeywordRule = HeaderKeywordRule {
    city_keywords: CITY_HEADER_KEYWORDS,
    area_keywords: AREA_HEADER_KEYWORDS,
};

pub static POSITIONAL: PositionalRule = PositionalRule;

/// Rule chain used for dataset ingestion
pub static RULES: [&dyn ColumnRule; 2] = [&HEADER_KEYWORDS, &POSITIONAL];

/// Run the rule chain, returning the pair and the name of the rule that matched
pub fn classify(row: &TabularRow, rules: &[&dyn ColumnRule]) -> Option<(RawPair, &'static str)> {
    rules
        .iter()
        .find_map(|rule| rule.classify(row).map(|pair| (pair, rule.name())))
}
