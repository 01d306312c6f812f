//! Wire contracts shared between the storefront checkout page and its backend.

pub mod domain;
