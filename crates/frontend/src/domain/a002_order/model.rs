use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;
use contracts::domain::a002_order::aggregate::{OrderRequest, OrderResponse};
use gloo_net::http::Request;

pub const ORDER_PATH: &str = "/api/order";

/// Reason used when the backend gives none
pub const GENERIC_FAILURE: &str = "حدث خطأ أثناء إرسال طلبك. الرجاء المحاولة مرة أخرى.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderResult {
    Success { order_id: String },
    Failure { reason: String },
}

impl OrderResult {
    pub fn failure(reason: impl Into<String>) -> Self {
        OrderResult::Failure {
            reason: reason.into(),
        }
    }
}

/// Map an order response (status + raw body) to an [`OrderResult`].
///
/// Only a 2xx status with `success: true` and a non-empty `order_id` is a success.
pub fn interpret_order_response(status: u16, body: &str) -> OrderResult {
    let response = match serde_json::from_str::<OrderResponse>(body) {
        Ok(r) => r,
        Err(e) => {
            log::error!("Unreadable order response (HTTP {}): {}", status, e);
            return OrderResult::failure(GENERIC_FAILURE);
        }
    };

    if (200..300).contains(&status) && response.success {
        if let Some(order_id) = response
            .order_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
        {
            return OrderResult::Success {
                order_id: order_id.to_string(),
            };
        }
        log::error!("Order accepted without an order_id");
    }

    OrderResult::failure(response.failure_reason().unwrap_or(GENERIC_FAILURE))
}

/// Отправка заказа один раз, без повторов: покупатель повторяет вручную.
pub async fn submit_order(config: &ApiConfig, order: &OrderRequest) -> OrderResult {
    let url = api_url(config, ORDER_PATH);

    let request = match Request::post(&url).json(order) {
        Ok(r) => r,
        Err(e) => {
            log::error!("Failed to serialize order: {}", e);
            return OrderResult::failure(GENERIC_FAILURE);
        }
    };

    let response = match request.send().await {
        Ok(r) => r,
        Err(e) => {
            log::error!("Failed to send order: {}", e);
            return OrderResult::failure(GENERIC_FAILURE);
        }
    };

    let status = response.status();
    match response.text().await {
        Ok(body) => interpret_order_response(status, &body),
        Err(e) => {
            log::error!("Failed to read order response: {}", e);
            OrderResult::failure(GENERIC_FAILURE)
        }
    }
}
