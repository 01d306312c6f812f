pub mod calculator;

pub use calculator::{quote, ShippingQuote, DEFAULT_RATE, HANDLING_FEE};
