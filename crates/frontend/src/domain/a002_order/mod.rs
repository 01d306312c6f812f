pub mod model;
pub mod validator;

pub use model::{interpret_order_response, submit_order, OrderResult, ORDER_PATH};
pub use validator::{validate, FormField, OrderForm, ValidationIssue, ValidationResult};
