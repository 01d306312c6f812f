//! Checks of the buyer's order form
//!
//! Every field is checked on each call so the page can flag all offending
//! inputs at once. The result is pure data; styling is left to the view.

use crate::domain::a003_address_directory::AddressDirectory;
use crate::shared::text;
use thiserror::Error;

/// Maximum digits accepted in phone inputs
pub const PHONE_DIGITS: usize = 11;

/// Raw values of the order form as typed by the buyer.
///
/// `governorate` and `area` hold directory keys (select values), not labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_whatsapp: String,
    pub governorate: String,
    pub area: String,
    pub address: String,
    pub building: String,
    pub apartment: String,
    pub landmark: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Phone,
    Whatsapp,
    Governorate,
    Area,
    Address,
}

impl FormField {
    pub const REQUIRED: [FormField; 5] = [
        FormField::Name,
        FormField::Phone,
        FormField::Governorate,
        FormField::Area,
        FormField::Address,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "الاسم",
            FormField::Phone => "رقم الهاتف",
            FormField::Whatsapp => "رقم الواتساب",
            FormField::Governorate => "المحافظة",
            FormField::Area => "المنطقة",
            FormField::Address => "العنوان",
        }
    }

    fn value<'a>(&self, form: &'a OrderForm) -> &'a str {
        match self {
            FormField::Name => &form.customer_name,
            FormField::Phone => &form.customer_phone,
            FormField::Whatsapp => &form.customer_whatsapp,
            FormField::Governorate => &form.governorate,
            FormField::Area => &form.area,
            FormField::Address => &form.address,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("{} مطلوب", .0.label())]
    Required(FormField),
    #[error("يرجى اختيار المنطقة")]
    AreaRequired,
    #[error("يرجى إدخال رقم هاتف صحيح (11 رقم تبدأ بـ 01)")]
    InvalidPhone,
    #[error("يرجى إدخال رقم واتساب صحيح (11 رقم تبدأ بـ 01)")]
    InvalidWhatsapp,
    #[error("المنطقة المختارة لا تتبع المحافظة")]
    AreaMismatch,
}

impl ValidationIssue {
    pub fn field(&self) -> FormField {
        match self {
            ValidationIssue::Required(field) => *field,
            ValidationIssue::AreaRequired | ValidationIssue::AreaMismatch => FormField::Area,
            ValidationIssue::InvalidPhone => FormField::Phone,
            ValidationIssue::InvalidWhatsapp => FormField::Whatsapp,
        }
    }

    /// Lower is reported first
    fn priority(&self) -> u8 {
        match self {
            ValidationIssue::AreaRequired => 0,
            ValidationIssue::InvalidPhone => 1,
            ValidationIssue::AreaMismatch => 2,
            ValidationIssue::InvalidWhatsapp => 3,
            ValidationIssue::Required(_) => 4,
        }
    }
}

/// Message shown when only required-field issues remain
pub const REQUIRED_FIELDS_MESSAGE: &str = "يرجى ملء جميع الحقول المطلوبة";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn is_flagged(&self, field: FormField) -> bool {
        self.issues.iter().any(|i| i.field() == field)
    }

    pub fn has(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }

    /// The issue the buyer is told about
    pub fn primary_issue(&self) -> Option<ValidationIssue> {
        self.issues.iter().copied().min_by_key(ValidationIssue::priority)
    }

    /// Blocking message for the page, `None` when valid
    pub fn message(&self) -> Option<String> {
        self.primary_issue().map(|issue| match issue {
            ValidationIssue::Required(_) => REQUIRED_FIELDS_MESSAGE.to_string(),
            other => other.to_string(),
        })
    }
}

/// Local mobile format: `01` followed by nine digits
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    phone.len() == PHONE_DIGITS
        && phone.starts_with("01")
        && phone.chars().all(|c| c.is_ascii_digit())
}

fn is_blank(value: &str) -> bool {
    text::normalize(value).is_empty()
}

pub fn validate(form: &OrderForm, directory: &AddressDirectory) -> ValidationResult {
    let mut issues = Vec::new();
    let governorate_chosen = !is_blank(&form.governorate);

    for field in FormField::REQUIRED {
        if !is_blank(field.value(form)) {
            continue;
        }
        if field == FormField::Area && governorate_chosen {
            issues.push(ValidationIssue::AreaRequired);
        } else {
            issues.push(ValidationIssue::Required(field));
        }
    }

    if !is_blank(&form.customer_phone) && !is_valid_phone(&form.customer_phone) {
        issues.push(ValidationIssue::InvalidPhone);
    }

    if !is_blank(&form.customer_whatsapp) && !is_valid_phone(&form.customer_whatsapp) {
        issues.push(ValidationIssue::InvalidWhatsapp);
    }

    if governorate_chosen
        && !is_blank(&form.area)
        && !directory.contains_area(form.governorate.trim(), form.area.trim())
    {
        issues.push(ValidationIssue::AreaMismatch);
    }

    ValidationResult { issues }
}
