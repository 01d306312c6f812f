use super::types::{ParseError, TabularRow};
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// JS binding для парсинга Excel файлов через SheetJS
///
/// Returns the first sheet as an array of row arrays (`sheet_to_json` with
/// `header: 1`), see index.html.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = parseExcelFile, catch)]
    pub fn parse_excel_file(data: &[u8]) -> Result<JsValue, JsValue>;
}

/// Парсит Excel файл (уже загруженный в память) в строки таблицы
pub fn read_excel_from_bytes(bytes: &[u8]) -> Result<Vec<TabularRow>, ParseError> {
    let result = parse_excel_file(bytes)
        .map_err(|e| ParseError::Malformed(format!("Excel parse error: {:?}", e)))?;

    if !result.is_array() {
        return Err(ParseError::Malformed(
            "Excel parse result is not an array".to_string(),
        ));
    }

    let raw: Vec<Vec<Value>> = serde_wasm_bindgen::from_value(result)
        .map_err(|e| ParseError::Malformed(e.to_string()))?;
    TabularRow::from_raw(raw)
}

/// Parse CSV text with a header row
///
/// Record length may vary; malformed records are skipped.
pub fn parse_csv_rows(text: &str) -> Result<Vec<TabularRow>, ParseError> {
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<Value> = reader
        .headers()
        .map_err(|e| ParseError::Malformed(format!("Failed to read CSV headers: {}", e)))?
        .iter()
        .map(|h| Value::String(h.to_string()))
        .collect();

    let mut raw = vec![headers];
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => raw.push(
                record
                    .iter()
                    .map(|cell| Value::String(cell.to_string()))
                    .collect(),
            ),
            Err(e) => log::debug!("Skipping malformed CSV record {}: {}", idx + 1, e),
        }
    }

    TabularRow::from_raw(raw)
}

/// Parse a JSON array of objects, keeping each object's key order
pub fn parse_json_rows(text: &str) -> Result<Vec<TabularRow>, ParseError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ParseError::Malformed(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ParseError::Malformed("expected a JSON array".to_string()));
    };

    let rows = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(TabularRow::new(map.into_iter().collect())),
            other => {
                log::debug!("Skipping non-object JSON row: {}", other);
                None
            }
        })
        .collect();

    Ok(rows)
}
