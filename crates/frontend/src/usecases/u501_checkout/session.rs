//! Checkout session state and its transitions
//!
//! ```text
//! Loading ──product──▶ Ready ──submit──▶ Submitting ──ok──▶ Submitted
//!    │                   ▲                    │
//!    └─error─▶ Failed    └──────failure───────┘
//! ```
//!
//! Governorate/area changes stay inside `Ready` and only refresh the quote.

use super::error::CheckoutError;
use crate::domain::a001_product::ProductFetchError;
use crate::domain::a002_order::{validate, OrderForm, OrderResult, ValidationResult};
use crate::domain::a003_address_directory::AddressDirectory;
use crate::domain::a004_shipping_rate::{self, ShippingQuote};
use crate::shared::text;
use chrono::{DateTime, Utc};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_order::aggregate::{
    OrderRequest, OrderSource, PaymentMethod,
};

/// Shown when an out-of-stock product is submitted anyway
pub const UNAVAILABLE_MESSAGE: &str = "المنتج غير متوفر حالياً";

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    Loading,
    Ready,
    Submitting,
    Submitted { order_id: String },
    Failed { error: CheckoutError },
}

/// Totals shown next to the form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    pub subtotal: f64,
    /// `None` until a governorate is chosen
    pub shipping: Option<f64>,
    pub total: f64,
}

/// Page facts captured when the order is built
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionContext {
    pub page_url: String,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    state: CheckoutState,
    product: Option<Product>,
    directory: Option<AddressDirectory>,
    governorate: Option<String>,
    area: Option<String>,
    quote: Option<ShippingQuote>,
    validation: ValidationResult,
    notice: Option<String>,
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self {
            state: CheckoutState::Loading,
            product: None,
            directory: None,
            governorate: None,
            area: None,
            quote: None,
            validation: ValidationResult::default(),
            notice: None,
        }
    }

    // === Accessors ===

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn directory(&self) -> Option<&AddressDirectory> {
        self.directory.as_ref()
    }

    pub fn governorate(&self) -> Option<&str> {
        self.governorate.as_deref()
    }

    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    pub fn quote(&self) -> Option<&ShippingQuote> {
        self.quote.as_ref()
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Recoverable message for the buyer (validation or submission failure)
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == CheckoutState::Submitting
    }

    /// Submit control is live only in `Ready` with an orderable product
    pub fn submit_enabled(&self) -> bool {
        self.state == CheckoutState::Ready
            && self.directory.is_some()
            && self.product.as_ref().is_some_and(Product::is_available)
    }

    pub fn summary(&self) -> OrderSummary {
        let subtotal = self.product.as_ref().map_or(0.0, |p| p.price);
        let shipping = self.quote.as_ref().map(|q| q.total);
        OrderSummary {
            subtotal,
            shipping,
            total: subtotal + shipping.unwrap_or(0.0),
        }
    }

    // === Loading ===

    pub fn missing_product_id(&mut self) {
        log::error!("No product id in the page URL");
        self.state = CheckoutState::Failed {
            error: CheckoutError::MissingProductId,
        };
    }

    /// Outcome of the product fetch. Ignored unless the session is still loading.
    pub fn product_loaded(&mut self, result: Result<Product, ProductFetchError>) {
        if self.state != CheckoutState::Loading {
            log::warn!("Product result ignored in state {:?}", self.state);
            return;
        }
        match result {
            Ok(product) => {
                log::info!("Product loaded: {} ({})", product.title, product.id);
                self.product = Some(product);
                self.state = CheckoutState::Ready;
            }
            Err(e) => {
                log::error!("Product fetch failed: {}", e);
                self.product = None;
                self.state = CheckoutState::Failed {
                    error: CheckoutError::ProductFetch(e),
                };
            }
        }
    }

    /// Replace the directory wholesale; a selection it no longer knows is dropped
    pub fn directory_loaded(&mut self, directory: AddressDirectory) {
        if let Some(gov) = self.governorate.as_deref() {
            if directory.governorate(gov).is_none() {
                self.clear_selection();
            } else if let Some(area) = self.area.as_deref() {
                if !directory.contains_area(gov, area) {
                    self.area = None;
                }
            }
        }
        self.directory = Some(directory);
    }

    // === Выбор адреса ===

    /// Select a governorate key (blank clears) and refresh the quote
    pub fn select_governorate(&mut self, key: &str) {
        let Some(key) = text::clean(key) else {
            self.clear_selection();
            return;
        };

        let keeps_area = match (self.area.as_deref(), self.directory.as_ref()) {
            (Some(area), Some(dir)) => dir.contains_area(&key, area),
            _ => false,
        };
        if !keeps_area {
            self.area = None;
        }

        let quote = a004_shipping_rate::quote(&key);
        log::debug!("Shipping for {}: {}", key, quote.total);
        self.quote = Some(quote);
        self.governorate = Some(key);
    }

    pub fn select_area(&mut self, key: &str) {
        self.area = text::clean(key);
    }

    fn clear_selection(&mut self) {
        self.governorate = None;
        self.area = None;
        self.quote = None;
    }

    // === Submission ===

    /// Validate the form and build the order; on success the session is `Submitting`.
    ///
    /// Failures leave the state untouched and set the notice.
    pub fn begin_submission(
        &mut self,
        form: &OrderForm,
        context: SubmissionContext,
    ) -> Result<OrderRequest, CheckoutError> {
        let (product, directory) = match (&self.state, &self.product, &self.directory) {
            (CheckoutState::Ready, Some(p), Some(d)) => (p, d),
            _ => return Err(CheckoutError::NotReady),
        };

        if !product.is_available() {
            self.notice = Some(UNAVAILABLE_MESSAGE.to_string());
            return Err(CheckoutError::Submission(UNAVAILABLE_MESSAGE.to_string()));
        }

        let validation = validate(form, directory);
        if !validation.is_valid() {
            self.notice = validation.message();
            self.validation = validation.clone();
            return Err(CheckoutError::Validation(validation));
        }

        let order = build_order(product, directory, form, context);
        self.validation = ValidationResult::default();
        self.notice = None;
        self.state = CheckoutState::Submitting;
        Ok(order)
    }

    /// Outcome of the order post. Ignored unless a submission is in flight.
    pub fn finish_submission(&mut self, result: OrderResult) {
        if self.state != CheckoutState::Submitting {
            log::warn!("Order result ignored in state {:?}", self.state);
            return;
        }
        match result {
            OrderResult::Success { order_id } => {
                log::info!("Order placed: {}", order_id);
                self.state = CheckoutState::Submitted { order_id };
            }
            OrderResult::Failure { reason } => {
                log::error!("Order failed: {}", reason);
                self.notice = Some(reason);
                self.state = CheckoutState::Ready;
            }
        }
    }

    /// Back to an empty form after the buyer closes the confirmation
    pub fn acknowledge_order(&mut self) {
        if matches!(self.state, CheckoutState::Submitted { .. }) {
            self.clear_selection();
            self.validation = ValidationResult::default();
            self.state = CheckoutState::Ready;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Order snapshot from the current product, directory labels and form.
///
/// Shipping is quoted again from the submitted governorate.
fn build_order(
    product: &Product,
    directory: &AddressDirectory,
    form: &OrderForm,
    context: SubmissionContext,
) -> OrderRequest {
    let governorate_key = text::normalize(&form.governorate);
    let area_key = text::normalize(&form.area);
    let shipping_city = directory
        .governorate(&governorate_key)
        .map_or_else(|| governorate_key.clone(), |g| g.label.clone());
    let shipping_area = directory
        .area(&governorate_key, &area_key)
        .map_or_else(|| area_key.clone(), |a| a.label.clone());

    let phone = text::normalize(&form.customer_phone);
    let whatsapp = text::clean(&form.customer_whatsapp).unwrap_or_else(|| phone.clone());

    let shipping_cost = a004_shipping_rate::quote(&governorate_key).total;
    let subtotal = product.price;

    OrderRequest {
        product_id: product.id.clone(),
        product_retailer_id: product.retailer_id.clone(),
        product_title: product.title.clone(),
        product_price: product.price,
        product_image: product.image_url.clone(),
        merchant_id: product.merchant_id.clone(),
        merchant_name: product.merchant_name.clone(),

        customer_name: text::normalize(&form.customer_name),
        customer_phone: phone,
        customer_whatsapp: whatsapp,

        shipping_city,
        shipping_area,
        shipping_city_key: governorate_key,
        shipping_area_key: area_key,
        shipping_address: text::normalize(&form.address),
        shipping_building: text::normalize(&form.building),
        shipping_apartment: text::normalize(&form.apartment),
        shipping_landmark: text::normalize(&form.landmark),

        subtotal,
        shipping_cost,
        total_amount: subtotal + shipping_cost,
        payment_method: PaymentMethod::CashOnDelivery,

        source: OrderSource::LandingPage,
        page_url: context.page_url,
        timestamp: context.placed_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_order::ValidationIssue;
    use crate::domain::a003_address_directory::builtin_directory;
    use chrono::TimeZone;

    fn product(price: f64) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": "p1",
            "title": "Lamp",
            "price": price,
            "merchant_name": "Noor"
        }))
        .unwrap()
    }

    fn context() -> SubmissionContext {
        SubmissionContext {
            page_url: "https://shop.example.com/?product_id=p1".to_string(),
            placed_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    fn form() -> OrderForm {
        OrderForm {
            customer_name: " Mona  Adel ".to_string(),
            customer_phone: "01012345678".to_string(),
            governorate: "Cairo".to_string(),
            area: "Maadi".to_string(),
            address: "12 Road 9".to_string(),
            ..Default::default()
        }
    }

    fn ready_session(price: f64) -> CheckoutSession {
        let mut session = CheckoutSession::new();
        session.directory_loaded(builtin_directory());
        session.product_loaded(Ok(product(price)));
        session
    }

    #[test]
    fn test_product_load_transitions() {
        let session = ready_session(200.0);
        assert_eq!(session.state(), &CheckoutState::Ready);
        assert!(session.submit_enabled());

        let mut failed = CheckoutSession::new();
        failed.product_loaded(Err(ProductFetchError::NotFound {
            product_id: "p1".into(),
        }));
        assert!(matches!(failed.state(), CheckoutState::Failed { .. }));
        assert!(failed.product().is_none());
        assert!(!failed.submit_enabled());
    }

    #[test]
    fn test_missing_product_id_is_terminal() {
        let mut session = CheckoutSession::new();
        session.missing_product_id();
        session.product_loaded(Ok(product(10.0)));
        assert_eq!(
            session.state(),
            &CheckoutState::Failed {
                error: CheckoutError::MissingProductId
            }
        );
    }

    #[test]
    fn test_governorate_changes_total() {
        let mut session = ready_session(200.0);
        assert_eq!(session.summary().shipping, None);
        assert_eq!(session.summary().total, 200.0);

        session.select_governorate("Cairo");
        assert_eq!(session.summary().total, 270.0);
        assert_eq!(session.state(), &CheckoutState::Ready);

        session.select_governorate("Aswan");
        assert_eq!(session.summary().shipping, Some(135.0));

        session.select_governorate("");
        assert_eq!(session.summary().total, 200.0);
        assert_eq!(session.governorate(), None);
    }

    #[test]
    fn test_governorate_change_drops_foreign_area() {
        let mut session = ready_session(200.0);
        session.select_governorate("Cairo");
        session.select_area("Maadi");
        session.select_governorate("Cairo");
        assert_eq!(session.area(), Some("Maadi"));
        session.select_governorate("Giza");
        assert_eq!(session.area(), None);
    }

    #[test]
    fn test_begin_submission_builds_order() {
        let mut session = ready_session(200.0);
        let order = session.begin_submission(&form(), context()).unwrap();

        assert_eq!(session.state(), &CheckoutState::Submitting);
        assert!(!session.submit_enabled());
        assert_eq!(order.customer_name, "Mona Adel");
        assert_eq!(order.customer_whatsapp, "01012345678");
        assert_eq!(order.shipping_city, "القاهرة");
        assert_eq!(order.shipping_area, "المعادي");
        assert_eq!(order.shipping_city_key, "Cairo");
        assert_eq!(order.shipping_area_key, "Maadi");
        assert_eq!(order.subtotal, 200.0);
        assert_eq!(order.shipping_cost, 70.0);
        assert_eq!(order.total_amount, 270.0);
        assert_eq!(order.payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(order.timestamp, context().placed_at);
    }

    #[test]
    fn test_second_submission_is_rejected() {
        let mut session = ready_session(200.0);
        session.begin_submission(&form(), context()).unwrap();
        assert_eq!(
            session.begin_submission(&form(), context()),
            Err(CheckoutError::NotReady)
        );
    }

    #[test]
    fn test_invalid_form_stays_ready() {
        let mut session = ready_session(200.0);
        let bad = OrderForm {
            area: String::new(),
            ..form()
        };
        let err = session.begin_submission(&bad, context()).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));
        assert_eq!(session.state(), &CheckoutState::Ready);
        assert!(session.validation().has(ValidationIssue::AreaRequired));
        assert_eq!(session.notice(), Some("يرجى اختيار المنطقة"));
    }

    #[test]
    fn test_out_of_stock_cannot_submit() {
        let mut session = CheckoutSession::new();
        session.directory_loaded(builtin_directory());
        let mut p = product(50.0);
        p.availability = Some("out of stock".to_string());
        session.product_loaded(Ok(p));

        assert!(!session.submit_enabled());
        assert_eq!(
            session.begin_submission(&form(), context()),
            Err(CheckoutError::Submission(UNAVAILABLE_MESSAGE.to_string()))
        );
        assert_eq!(session.state(), &CheckoutState::Ready);
    }

    #[test]
    fn test_submission_outcomes() {
        let mut session = ready_session(200.0);
        session.begin_submission(&form(), context()).unwrap();
        session.finish_submission(OrderResult::failure("out of stock"));
        assert_eq!(session.state(), &CheckoutState::Ready);
        assert_eq!(session.notice(), Some("out of stock"));
        assert!(session.submit_enabled());

        session.begin_submission(&form(), context()).unwrap();
        assert_eq!(session.notice(), None);
        session.finish_submission(OrderResult::Success {
            order_id: "ORD-7".into(),
        });
        assert_eq!(
            session.state(),
            &CheckoutState::Submitted {
                order_id: "ORD-7".into()
            }
        );

        session.acknowledge_order();
        assert_eq!(session.state(), &CheckoutState::Ready);
        assert_eq!(session.governorate(), None);
    }

    #[test]
    fn test_new_directory_replaces_old() {
        let mut session = ready_session(200.0);
        session.select_governorate("Cairo");
        session.select_area("Maadi");

        let rows = vec![crate::shared::excel_importer::TabularRow::new(vec![
            ("City".to_string(), serde_json::json!("Giza")),
            ("Area".to_string(), serde_json::json!("Dokki")),
        ])];
        let dir = crate::domain::a003_address_directory::build_directory(&rows).unwrap();
        session.directory_loaded(dir.clone());

        assert_eq!(session.directory(), Some(&dir));
        assert_eq!(session.governorate(), None);
        assert_eq!(session.quote(), None);
    }
}
