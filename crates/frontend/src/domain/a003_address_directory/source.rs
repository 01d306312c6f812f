use super::error::DirectoryIngestError;
use crate::shared::config::{DatasetFormat, DirectoryConfig};
use crate::shared::excel_importer::{
    parse_csv_rows, parse_json_rows, read_excel_from_bytes, TabularRow,
};
use gloo_net::http::Request;

/// Resolve `Auto` using the URL extension, then the response Content-Type
pub fn detect_format(
    configured: DatasetFormat,
    url: &str,
    content_type: Option<&str>,
) -> Result<DatasetFormat, DirectoryIngestError> {
    if configured != DatasetFormat::Auto {
        return Ok(configured);
    }

    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if path.ends_with(".xlsx") || path.ends_with(".xls") {
        return Ok(DatasetFormat::Xlsx);
    }
    if path.ends_with(".csv") {
        return Ok(DatasetFormat::Csv);
    }
    if path.ends_with(".json") {
        return Ok(DatasetFormat::Json);
    }

    let content_type = content_type.unwrap_or_default().to_ascii_lowercase();
    if content_type.contains("spreadsheetml") || content_type.contains("ms-excel") {
        Ok(DatasetFormat::Xlsx)
    } else if content_type.contains("csv") {
        Ok(DatasetFormat::Csv)
    } else if content_type.contains("json") {
        Ok(DatasetFormat::Json)
    } else {
        Err(DirectoryIngestError::UnsupportedFormat(format!(
            "{} ({})",
            url,
            if content_type.is_empty() {
                "no content type"
            } else {
                content_type.as_str()
            }
        )))
    }
}

/// Turn the downloaded bytes into rows
pub fn parse_dataset(
    format: DatasetFormat,
    bytes: &[u8],
) -> Result<Vec<TabularRow>, DirectoryIngestError> {
    let rows = match format {
        DatasetFormat::Xlsx => read_excel_from_bytes(bytes)?,
        DatasetFormat::Csv | DatasetFormat::Json => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| DirectoryIngestError::Parse(e.to_string()))?;
            if format == DatasetFormat::Csv {
                parse_csv_rows(text)?
            } else {
                parse_json_rows(text)?
            }
        }
        DatasetFormat::Auto => {
            return Err(DirectoryIngestError::UnsupportedFormat(
                "format was not resolved".to_string(),
            ))
        }
    };
    if rows.is_empty() {
        return Err(DirectoryIngestError::Empty);
    }
    Ok(rows)
}

/// Загрузка и разбор настроенного набора данных
pub async fn fetch_dataset(
    config: &DirectoryConfig,
) -> Result<Vec<TabularRow>, DirectoryIngestError> {
    log::debug!("fetching address dataset from {}", config.dataset_url);

    let response = Request::get(&config.dataset_url)
        .send()
        .await
        .map_err(|e| DirectoryIngestError::Fetch(e.to_string()))?;

    if !response.ok() {
        return Err(DirectoryIngestError::Fetch(format!(
            "HTTP {}",
            response.status()
        )));
    }

    let content_type = response.headers().get("content-type");
    let format = detect_format(config.format, &config.dataset_url, content_type.as_deref())?;

    let bytes = response
        .binary()
        .await
        .map_err(|e| DirectoryIngestError::Fetch(e.to_string()))?;

    parse_dataset(format, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_format_wins() {
        assert_eq!(
            detect_format(DatasetFormat::Csv, "/data/a.xlsx", None),
            Ok(DatasetFormat::Csv)
        );
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            detect_format(DatasetFormat::Auto, "https://x.y/addresses.XLSX?raw=1", None),
            Ok(DatasetFormat::Xlsx)
        );
        assert_eq!(
            detect_format(DatasetFormat::Auto, "/areas.json", Some("text/plain")),
            Ok(DatasetFormat::Json)
        );
    }

    #[test]
    fn test_format_from_content_type() {
        assert_eq!(
            detect_format(DatasetFormat::Auto, "/areas", Some("text/csv; charset=utf-8")),
            Ok(DatasetFormat::Csv)
        );
        assert!(matches!(
            detect_format(DatasetFormat::Auto, "/areas", None),
            Err(DirectoryIngestError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_csv_dataset() {
        let rows = parse_dataset(DatasetFormat::Csv, "City,Area\nCairo,Maadi\n".as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_parse_header_only_is_empty() {
        assert_eq!(
            parse_dataset(DatasetFormat::Csv, b"City,Area\n"),
            Err(DirectoryIngestError::Empty)
        );
    }
}
