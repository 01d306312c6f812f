pub mod aggregate;

pub use aggregate::{OrderRequest, OrderResponse, OrderSource, PaymentMethod};
