pub mod aggregate;

pub use aggregate::{Product, ProductResponse, AVAILABILITY_OUT_OF_STOCK, STATUS_ON_SALE};
