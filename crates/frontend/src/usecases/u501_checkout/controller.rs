use super::backend::CheckoutBackend;
use super::error::CheckoutError;
use super::session::{CheckoutSession, SubmissionContext};
use crate::domain::a002_order::{OrderForm, OrderResult};
use crate::domain::a003_address_directory::{build_directory, builtin_directory};
use std::cell::RefCell;

type Observer = Box<dyn Fn(&CheckoutSession)>;

/// Drives one checkout session against a backend.
///
/// The session is only borrowed between awaits, never across one, so the
/// product and directory loads may run at the same time.
pub struct CheckoutController<B: CheckoutBackend> {
    backend: B,
    session: RefCell<CheckoutSession>,
    observer: RefCell<Option<Observer>>,
}

impl<B: CheckoutBackend> CheckoutController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: RefCell::new(CheckoutSession::new()),
            observer: RefCell::new(None),
        }
    }

    /// Called with the session after every change
    pub fn set_observer(&self, observer: impl Fn(&CheckoutSession) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
        self.notify();
    }

    pub fn snapshot(&self) -> CheckoutSession {
        self.session.borrow().clone()
    }

    fn update<R>(&self, f: impl FnOnce(&mut CheckoutSession) -> R) -> R {
        let result = f(&mut *self.session.borrow_mut());
        self.notify();
        result
    }

    fn notify(&self) {
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&self.session.borrow());
        }
    }

    /// Fetch the product named by the page; a missing id fails the session
    pub async fn load_product(&self, product_id: Option<&str>) {
        let Some(product_id) = product_id.map(str::trim).filter(|id| !id.is_empty()) else {
            self.update(CheckoutSession::missing_product_id);
            return;
        };
        let result = self.backend.fetch_product(product_id).await;
        self.update(|s| s.product_loaded(result));
    }

    /// Загрузка справочника; при любой ошибке используется встроенный
    pub async fn load_directory(&self) {
        let ingested = self
            .backend
            .fetch_address_rows()
            .await
            .and_then(|rows| build_directory(&rows));

        let directory = match ingested {
            Ok(directory) => directory,
            Err(e) => {
                log::warn!("Using built-in address directory: {}", e);
                builtin_directory()
            }
        };
        self.update(|s| s.directory_loaded(directory));
    }

    pub fn select_governorate(&self, key: &str) {
        self.update(|s| s.select_governorate(key));
    }

    pub fn select_area(&self, key: &str) {
        self.update(|s| s.select_area(key));
    }

    pub fn dismiss_notice(&self) {
        self.update(CheckoutSession::dismiss_notice);
    }

    pub fn acknowledge_order(&self) {
        self.update(CheckoutSession::acknowledge_order);
    }

    /// Validate, post and record the outcome. Returns the order id on success.
    pub async fn submit(
        &self,
        form: &OrderForm,
        context: SubmissionContext,
    ) -> Result<String, CheckoutError> {
        let order = self.update(|s| s.begin_submission(form, context))?;
        log::info!(
            "Submitting order for product {} ({} total)",
            order.product_id,
            order.total_amount
        );

        let result = self.backend.submit_order(&order).await;
        self.update(|s| s.finish_submission(result.clone()));

        match result {
            OrderResult::Success { order_id } => Ok(order_id),
            OrderResult::Failure { reason } => Err(CheckoutError::Submission(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ProductFetchError;
    use crate::domain::a003_address_directory::{DirectoryIngestError, DirectorySource};
    use crate::shared::excel_importer::TabularRow;
    use crate::usecases::u501_checkout::session::CheckoutState;
    use async_trait::async_trait;
    use chrono::Utc;
    use contracts::domain::a001_product::aggregate::Product;
    use contracts::domain::a002_order::aggregate::OrderRequest;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeBackend {
        product: Result<Product, ProductFetchError>,
        rows: Result<Vec<TabularRow>, DirectoryIngestError>,
        order_result: OrderResult,
        submitted: RefCell<Vec<OrderRequest>>,
    }

    impl FakeBackend {
        fn new(order_result: OrderResult) -> Self {
            Self {
                product: Ok(serde_json::from_value(json!({"id": "p1", "price": 200})).unwrap()),
                rows: Err(DirectoryIngestError::Fetch("offline".into())),
                order_result,
                submitted: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl CheckoutBackend for FakeBackend {
        async fn fetch_product(&self, _product_id: &str) -> Result<Product, ProductFetchError> {
            self.product.clone()
        }

        async fn fetch_address_rows(&self) -> Result<Vec<TabularRow>, DirectoryIngestError> {
            self.rows.clone()
        }

        async fn submit_order(&self, order: &OrderRequest) -> OrderResult {
            self.submitted.borrow_mut().push(order.clone());
            self.order_result.clone()
        }
    }

    fn context() -> SubmissionContext {
        SubmissionContext {
            page_url: "https://shop.example.com/?product_id=p1".into(),
            placed_at: Utc::now(),
        }
    }

    fn form() -> OrderForm {
        OrderForm {
            customer_name: "Mona".into(),
            customer_phone: "01012345678".into(),
            governorate: "Cairo".into(),
            area: "Maadi".into(),
            address: "12 Road 9".into(),
            ..Default::default()
        }
    }

    async fn loaded(backend: FakeBackend) -> CheckoutController<FakeBackend> {
        let controller = CheckoutController::new(backend);
        controller.load_directory().await;
        controller.load_product(Some("p1")).await;
        controller
    }

    #[tokio::test]
    async fn test_cairo_total_is_270() {
        let controller = loaded(FakeBackend::new(OrderResult::Success {
            order_id: "ORD-1".into(),
        }))
        .await;
        controller.select_governorate("Cairo");

        let summary = controller.snapshot().summary();
        assert_eq!(summary.subtotal, 200.0);
        assert_eq!(summary.shipping, Some(70.0));
        assert_eq!(summary.total, 270.0);

        assert_eq!(controller.submit(&form(), context()).await, Ok("ORD-1".to_string()));
        assert_eq!(
            controller.snapshot().state(),
            &CheckoutState::Submitted {
                order_id: "ORD-1".into()
            }
        );
        assert_eq!(controller.backend.submitted.borrow()[0].total_amount, 270.0);
    }

    #[tokio::test]
    async fn test_product_before_directory() {
        let controller = CheckoutController::new(FakeBackend::new(OrderResult::Success {
            order_id: "ORD-2".into(),
        }));
        controller.load_product(Some("p1")).await;
        assert!(controller.snapshot().product().is_some());
        assert!(!controller.snapshot().submit_enabled());

        controller.load_directory().await;
        let session = controller.snapshot();
        assert_eq!(session.state(), &CheckoutState::Ready);
        assert!(session.directory().is_some());
        assert!(session.submit_enabled());

        controller.select_governorate("Cairo");
        assert_eq!(controller.submit(&form(), context()).await, Ok("ORD-2".to_string()));
    }

    #[tokio::test]
    async fn test_backend_failure_returns_to_ready() {
        let controller = loaded(FakeBackend::new(OrderResult::failure("out of stock"))).await;

        let err = controller.submit(&form(), context()).await.unwrap_err();
        assert_eq!(err, CheckoutError::Submission("out of stock".into()));

        let session = controller.snapshot();
        assert_eq!(session.state(), &CheckoutState::Ready);
        assert_eq!(session.notice(), Some("out of stock"));
        assert!(session.submit_enabled());
    }

    #[tokio::test]
    async fn test_failed_dataset_gives_builtin_directory() {
        let controller = loaded(FakeBackend::new(OrderResult::failure("x"))).await;
        let session = controller.snapshot();
        assert_eq!(session.directory(), Some(&builtin_directory()));
        assert_eq!(session.directory().unwrap().source(), DirectorySource::BuiltIn);
    }

    #[tokio::test]
    async fn test_unusable_dataset_gives_builtin_directory() {
        let mut backend = FakeBackend::new(OrderResult::failure("x"));
        backend.rows = Ok(vec![TabularRow::new(vec![(
            "City".into(),
            json!("undefined"),
        )])]);
        let controller = loaded(backend).await;
        assert_eq!(controller.snapshot().directory(), Some(&builtin_directory()));
    }

    #[tokio::test]
    async fn test_dataset_is_used_when_readable() {
        let mut backend = FakeBackend::new(OrderResult::failure("x"));
        backend.rows = Ok(vec![TabularRow::new(vec![
            ("المحافظة".into(), json!("Luxor")),
            ("المنطقة".into(), json!("Karnak")),
        ])]);
        let controller = loaded(backend).await;
        let session = controller.snapshot();
        let dir = session.directory().unwrap();
        assert_eq!(dir.source(), DirectorySource::Dataset);
        assert!(dir.contains_area("Luxor", "Karnak"));
        assert!(dir.governorate("Cairo").is_none());
    }

    #[tokio::test]
    async fn test_missing_product_id() {
        let controller = CheckoutController::new(FakeBackend::new(OrderResult::failure("x")));
        controller.load_product(Some("  ")).await;
        assert_eq!(
            controller.snapshot().state(),
            &CheckoutState::Failed {
                error: CheckoutError::MissingProductId
            }
        );
    }

    #[tokio::test]
    async fn test_product_failure_blocks_submission() {
        let mut backend = FakeBackend::new(OrderResult::failure("x"));
        backend.product = Err(ProductFetchError::NotFound {
            product_id: "p1".into(),
        });
        let controller = loaded(backend).await;

        assert_eq!(
            controller.submit(&form(), context()).await,
            Err(CheckoutError::NotReady)
        );
        assert!(controller.backend.submitted.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_posted() {
        let controller = loaded(FakeBackend::new(OrderResult::failure("x"))).await;
        let bad = OrderForm {
            customer_phone: "11012345678".into(),
            ..form()
        };
        let err = controller.submit(&bad, context()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));
        assert!(controller.backend.submitted.borrow().is_empty());
        assert_eq!(controller.snapshot().state(), &CheckoutState::Ready);
    }

    #[tokio::test]
    async fn test_observer_sees_every_change() {
        let controller = CheckoutController::new(FakeBackend::new(OrderResult::failure("x")));
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        controller.set_observer(move |_| seen.set(seen.get() + 1));
        controller.load_directory().await;
        controller.load_product(Some("p1")).await;
        controller.select_governorate("Giza");
        assert_eq!(calls.get(), 4);
    }
}
