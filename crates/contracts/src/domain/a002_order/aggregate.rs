use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Способ оплаты. Поддерживается только наложенный платёж.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CashOnDelivery,
}

/// Where the order was placed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSource {
    #[default]
    LandingPage,
}

/// Body of `POST /api/order`.
///
/// Built once at submission time from the checkout session and never mutated
/// afterwards. Address fields carry the buyer-facing (display) labels; the
/// `*_key` fields carry the canonical governorate/area keys used by the courier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    // --- product snapshot ---
    pub product_id: String,
    pub product_retailer_id: Option<String>,
    pub product_title: String,
    pub product_price: f64,
    pub product_image: Option<String>,
    pub merchant_id: Option<String>,
    pub merchant_name: Option<String>,

    // --- buyer ---
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_whatsapp: String,

    // --- address ---
    pub shipping_city: String,
    pub shipping_area: String,
    pub shipping_city_key: String,
    pub shipping_area_key: String,
    pub shipping_address: String,
    pub shipping_building: String,
    pub shipping_apartment: String,
    pub shipping_landmark: String,

    // --- money ---
    pub subtotal: f64,
    pub shipping_cost: f64,
    pub total_amount: f64,
    pub payment_method: PaymentMethod,

    // --- context ---
    pub source: OrderSource,
    pub page_url: String,
    pub timestamp: DateTime<Utc>,
}

/// Response of `POST /api/order`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl OrderResponse {
    /// Human-readable failure reason reported by the backend, if any
    pub fn failure_reason(&self) -> Option<&str> {
        [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}
