use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Flat fee added to every shipment
pub const HANDLING_FEE: f64 = 5.0;

/// Base rate for governorates missing from the table
pub const DEFAULT_RATE: f64 = 80.0;

/// Base delivery rate per governorate key, in EGP
const RATE_TABLE: &[(&str, f64)] = &[
    ("Cairo", 65.0),
    ("Giza", 65.0),
    ("Alexandria", 75.0),
    ("Sharqia", 75.0),
    ("Dakahlia", 75.0),
    ("Gharbia", 75.0),
    ("Monufia", 75.0),
    ("Qalyubia", 75.0),
    ("Behira", 75.0),
    ("Damietta", 75.0),
    ("Ismailia", 85.0),
    ("Port Said", 85.0),
    ("Suez", 85.0),
    ("Asyut", 95.0),
    ("BeniSuef", 95.0),
    ("Faiyum", 95.0),
    ("Minya", 95.0),
    ("Sohag", 95.0),
    ("Aswan", 130.0),
    ("Qena", 130.0),
    ("Luxor", 130.0),
    ("Red Sea", 130.0),
    ("New Valley", 130.0),
    ("Matrouh", 130.0),
    ("North Sinai", 130.0),
    ("South Sinai", 130.0),
];

static RATES: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    RATE_TABLE
        .iter()
        .map(|(name, rate)| (name.to_lowercase(), *rate))
        .collect()
});

#[derive(Debug, Clone, PartialEq)]
pub struct ShippingQuote {
    pub governorate: String,
    pub base_rate: f64,
    pub handling_fee: f64,
    pub total: f64,
}

/// Shipping cost for a governorate key.
///
/// Lookup ignores case and surrounding spaces; unknown keys get
/// [`DEFAULT_RATE`]. The total is never below [`HANDLING_FEE`].
pub fn quote(governorate: &str) -> ShippingQuote {
    let key = governorate.trim().to_lowercase();
    let base_rate = RATES.get(&key).copied().unwrap_or_else(|| {
        log::debug!("no shipping rate for '{}', using default", governorate);
        DEFAULT_RATE
    });
    ShippingQuote {
        governorate: governorate.trim().to_string(),
        base_rate,
        handling_fee: HANDLING_FEE,
        total: base_rate + HANDLING_FEE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_governorate() {
        let q = quote("Cairo");
        assert_eq!(q.base_rate, 65.0);
        assert_eq!(q.total, 70.0);
        assert_eq!(quote(" giza ").total, 70.0);
        assert_eq!(quote("Aswan").total, 135.0);
    }

    #[test]
    fn test_unknown_governorate_uses_default() {
        let q = quote("Atlantis");
        assert_eq!(q.base_rate, DEFAULT_RATE);
        assert_eq!(q.total, 85.0);
    }

    #[test]
    fn test_total_never_below_fee() {
        for (name, _) in RATE_TABLE {
            assert!(quote(name).total >= HANDLING_FEE);
        }
        assert!(quote("").total >= HANDLING_FEE);
    }
}
