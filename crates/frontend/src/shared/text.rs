//! Cleanup of raw spreadsheet cell text
//!
//! Spreadsheet exports carry stray whitespace, non-breaking spaces and
//! placeholder tokens such as "undefined" where a cell was empty.

use serde_json::Value;

/// Tokens that mean "no value" once a cell is normalized
const EMPTY_SENTINELS: [&str; 3] = ["undefined", "null", "nan"];

/// Collapse internal whitespace runs to one space and trim both ends
/// Example: "  New \t Cairo\u{a0} " -> "New Cairo"
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True for blank text and the sentinel empties (case-insensitive)
pub fn is_empty_marker(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty()
        || EMPTY_SENTINELS
            .iter()
            .any(|s| trimmed.eq_ignore_ascii_case(s))
}

/// Normalize text, returning `None` when nothing usable is left
pub fn clean(raw: &str) -> Option<String> {
    let normalized = normalize(raw);
    if is_empty_marker(&normalized) {
        None
    } else {
        Some(normalized)
    }
}

/// Render a cell of unspecified type as text
///
/// Whole numbers lose the fractional part (`12.0` -> "12"), so numeric area
/// codes read from a spreadsheet compare equal to their text form.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{:.0}", f),
                    Some(f) => f.to_string(),
                    None => String::new(),
                }
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// `cell_text` + `clean` in one step
pub fn clean_cell(value: &Value) -> Option<String> {
    clean(&cell_text(value))
}

/// Keep digits only, at most `max_len` of them (phone inputs)
pub fn digits_only(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_len)
        .collect()
}

/// Text contains Arabic script
pub fn has_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  New \t Cairo\u{a0} "), "New Cairo");
        assert_eq!(normalize("Nasr   City"), "Nasr City");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_sentinels() {
        assert!(is_empty_marker(""));
        assert!(is_empty_marker("  undefined "));
        assert!(is_empty_marker("NULL"));
        assert!(is_empty_marker("NaN"));
        assert!(!is_empty_marker("Nasr City"));
        assert_eq!(clean(" null "), None);
        assert_eq!(clean(" Maadi "), Some("Maadi".to_string()));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!("Giza")), "Giza");
        assert_eq!(cell_text(&json!(12)), "12");
        assert_eq!(cell_text(&json!(12.0)), "12");
        assert_eq!(cell_text(&json!(12.5)), "12.5");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(["a"])), "");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("010-1234 5678", 11), "01012345678");
        assert_eq!(digits_only("0101234567899", 11), "01012345678");
        assert_eq!(digits_only("abc", 11), "");
    }

    #[test]
    fn test_has_arabic() {
        assert!(has_arabic("القاهرة"));
        assert!(!has_arabic("Cairo"));
    }
}
