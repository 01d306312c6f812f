pub mod model;

pub use model::{fetch_product, interpret_product_response, product_path, ProductFetchError};
