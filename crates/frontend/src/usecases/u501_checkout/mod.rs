pub mod backend;
pub mod controller;
pub mod error;
pub mod presenter;
pub mod session;
pub mod view;
pub mod view_model;

pub use controller::CheckoutController;
pub use error::CheckoutError;
pub use session::{CheckoutSession, CheckoutState};
pub use view::CheckoutPage;
