use crate::domain::a001_product::ProductFetchError;
use crate::domain::a002_order::ValidationResult;
use thiserror::Error;

/// Session-level failures. `Display` is the text shown to the buyer.
///
/// Dataset problems never appear here: they end at the directory fallback.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("خطأ: لم يتم تحديد منتج. الرجاء استخدام رابط صحيح.")]
    MissingProductId,

    #[error("تعذر تحميل بيانات المنتج. الرجاء المحاولة لاحقاً.")]
    ProductFetch(#[from] ProductFetchError),

    #[error("{}", .0.message().unwrap_or_default())]
    Validation(ValidationResult),

    #[error("{0}")]
    Submission(String),

    /// Submit pressed while the session cannot take an order
    #[error("لم يتم تحميل بيانات المنتج بعد")]
    NotReady,
}

impl CheckoutError {
    /// `false` when the page view cannot continue
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            CheckoutError::MissingProductId | CheckoutError::ProductFetch(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_order::ValidationIssue;

    #[test]
    fn test_recoverability() {
        assert!(!CheckoutError::MissingProductId.is_recoverable());
        assert!(!CheckoutError::ProductFetch(ProductFetchError::DataError("x".into())).is_recoverable());
        assert!(CheckoutError::Submission("out of stock".into()).is_recoverable());
        assert!(CheckoutError::NotReady.is_recoverable());
        assert!(CheckoutError::Validation(ValidationResult::default()).is_recoverable());
    }

    #[test]
    fn test_validation_message() {
        let err = CheckoutError::Validation(ValidationResult {
            issues: vec![ValidationIssue::InvalidPhone],
        });
        assert_eq!(err.to_string(), ValidationIssue::InvalidPhone.to_string());
    }
}
