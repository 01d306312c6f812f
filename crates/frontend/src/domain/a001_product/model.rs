use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;
use contracts::domain::a001_product::aggregate::{Product, ProductResponse};
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductFetchError {
    #[error("product {product_id} not found")]
    NotFound { product_id: String },
    #[error("catalog request failed{}: {detail}", status_suffix(.status))]
    ServerError { status: Option<u16>, detail: String },
    #[error("catalog returned unusable data: {0}")]
    DataError(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

/// Lookup path for one product; the id is percent-encoded
pub fn product_path(product_id: &str) -> String {
    format!("/api/product/{}", urlencoding::encode(product_id))
}

/// Map a catalog response (status + raw body) to a product
pub fn interpret_product_response(
    product_id: &str,
    status: u16,
    body: &str,
) -> Result<Product, ProductFetchError> {
    if status == 404 {
        return Err(ProductFetchError::NotFound {
            product_id: product_id.to_string(),
        });
    }

    let parsed = serde_json::from_str::<ProductResponse>(body);

    if !(200..300).contains(&status) {
        let detail = parsed
            .ok()
            .and_then(|r| r.error)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| "unexpected response".to_string());
        return Err(ProductFetchError::ServerError {
            status: Some(status),
            detail,
        });
    }

    let response = parsed.map_err(|e| ProductFetchError::DataError(e.to_string()))?;

    if !response.success {
        return Err(ProductFetchError::DataError(
            response
                .error
                .unwrap_or_else(|| "catalog reported failure".to_string()),
        ));
    }

    let product = response
        .product
        .ok_or_else(|| ProductFetchError::DataError("response has no product".to_string()))?;

    if !product.has_valid_price() {
        return Err(ProductFetchError::DataError(format!(
            "invalid price {}",
            product.price
        )));
    }

    Ok(product)
}

pub async fn fetch_product(
    config: &ApiConfig,
    product_id: &str,
) -> Result<Product, ProductFetchError> {
    let url = api_url(config, &product_path(product_id));
    log::info!("Fetching product {}", product_id);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ProductFetchError::ServerError {
            status: None,
            detail: e.to_string(),
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ProductFetchError::ServerError {
            status: Some(status),
            detail: e.to_string(),
        })?;

    interpret_product_response(product_id, status, &body)
}
