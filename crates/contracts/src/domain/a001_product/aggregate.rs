use serde::{Deserialize, Deserializer, Serialize};

/// Значение `availability`, при котором товар нельзя заказать
pub const AVAILABILITY_OUT_OF_STOCK: &str = "out of stock";

/// Значение `status` для товаров со скидкой
pub const STATUS_ON_SALE: &str = "on_sale";

// ============================================================================
// Aggregate
// ============================================================================

/// Product record as returned by the catalog lookup endpoint.
///
/// Field aliases cover the older catalog payloads (`name`, `image`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default, alias = "name")]
    pub title: String,

    /// Unit price, non-negative
    #[serde(default)]
    pub price: f64,

    #[serde(default, alias = "image")]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub retailer_id: Option<String>,

    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub merchant_id: Option<String>,

    #[serde(default)]
    pub merchant_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// "in stock" / "out of stock"
    #[serde(default)]
    pub availability: Option<String>,

    /// e.g. "on_sale"
    #[serde(default)]
    pub status: Option<String>,
}

impl Product {
    pub fn is_available(&self) -> bool {
        !matches!(
            self.availability.as_deref(),
            Some(a) if a.trim().eq_ignore_ascii_case(AVAILABILITY_OUT_OF_STOCK)
        )
    }

    pub fn is_on_sale(&self) -> bool {
        self.status.as_deref() == Some(STATUS_ON_SALE)
    }

    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}

/// Envelope of `GET /api/product/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================================================
// Serde helpers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(v: StringOrNumber) -> Self {
        match v {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Int(i) => i.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_accepts_legacy_aliases() {
        let json = r#"{"id": 42, "name": "Lamp", "price": 150, "image": "a.png", "merchant_id": 7}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "42");
        assert_eq!(product.title, "Lamp");
        assert_eq!(product.price, 150.0);
        assert_eq!(product.image_url.as_deref(), Some("a.png"));
        assert_eq!(product.merchant_id.as_deref(), Some("7"));
        assert!(product.is_available());
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        let product: Product = serde_json::from_str(r#"{"id": "p1"}"#).unwrap();
        assert_eq!(product.price, 0.0);
        assert!(product.has_valid_price());
    }

    #[test]
    fn test_availability_and_status() {
        let product: Product = serde_json::from_str(
            r#"{"id": "p1", "price": 10, "availability": "Out of Stock", "status": "on_sale"}"#,
        )
        .unwrap();
        assert!(!product.is_available());
        assert!(product.is_on_sale());
    }

    #[test]
    fn test_response_envelope_without_product() {
        let resp: ProductResponse =
            serde_json::from_str(r#"{"success": false, "error": "not found"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.product.is_none());
        assert_eq!(resp.error.as_deref(), Some("not found"));
    }
}
