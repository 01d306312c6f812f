pub mod a001_product;
pub mod a002_order;
pub mod a003_address_directory;
pub mod a004_shipping_rate;
