use crate::domain::a001_product::{self, ProductFetchError};
use crate::domain::a002_order::{self, OrderResult};
use crate::domain::a003_address_directory::{source, DirectoryIngestError};
use crate::shared::config::StorefrontConfig;
use crate::shared::excel_importer::TabularRow;
use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_order::aggregate::OrderRequest;

/// Everything the checkout needs from the outside world
#[async_trait(?Send)]
pub trait CheckoutBackend {
    async fn fetch_product(&self, product_id: &str) -> Result<Product, ProductFetchError>;

    async fn fetch_address_rows(&self) -> Result<Vec<TabularRow>, DirectoryIngestError>;

    async fn submit_order(&self, order: &OrderRequest) -> OrderResult;
}

/// Browser implementation over `fetch`
pub struct HttpCheckoutBackend {
    config: StorefrontConfig,
}

impl HttpCheckoutBackend {
    pub fn new(config: StorefrontConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl CheckoutBackend for HttpCheckoutBackend {
    async fn fetch_product(&self, product_id: &str) -> Result<Product, ProductFetchError> {
        a001_product::fetch_product(&self.config.api, product_id).await
    }

    async fn fetch_address_rows(&self) -> Result<Vec<TabularRow>, DirectoryIngestError> {
        source::fetch_dataset(&self.config.directory).await
    }

    async fn submit_order(&self, order: &OrderRequest) -> OrderResult {
        a002_order::submit_order(&self.config.api, order).await
    }
}
