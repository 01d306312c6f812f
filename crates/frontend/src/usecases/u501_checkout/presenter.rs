//! Plain view data derived from the session; the view only renders it

use super::session::{CheckoutSession, CheckoutState, OrderSummary};
use crate::domain::a003_address_directory::{AddressDirectory, LabelPair};
use crate::shared::number_format::format_price;
use contracts::domain::a001_product::aggregate::Product;

pub const STORE_NAME: &str = "Argento Store";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x400?text=No+Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductBadge {
    Unavailable,
    OnSale,
}

impl ProductBadge {
    pub fn label(&self) -> &'static str {
        match self {
            ProductBadge::Unavailable => "غير متوفر",
            ProductBadge::OnSale => "عرض خاص",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ProductBadge::Unavailable => "badge badge--danger",
            ProductBadge::OnSale => "badge badge--success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub title: String,
    pub page_title: String,
    pub image_url: String,
    pub price: String,
    pub merchant_line: String,
    pub description: String,
    pub badge: Option<ProductBadge>,
}

pub fn product_card(product: &Product) -> ProductCard {
    let title = non_blank(Some(&product.title)).unwrap_or("منتج").to_string();
    let merchant = non_blank(product.merchant_name.as_ref()).unwrap_or(STORE_NAME);
    let description = non_blank(product.description.as_ref())
        .map(str::to_string)
        .unwrap_or_else(|| format!("منتج عالي الجودة من {}", merchant));

    let badge = if !product.is_available() {
        Some(ProductBadge::Unavailable)
    } else if product.is_on_sale() {
        Some(ProductBadge::OnSale)
    } else {
        None
    };

    ProductCard {
        page_title: format!("{} - {}", title, STORE_NAME),
        image_url: non_blank(product.image_url.as_ref())
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string(),
        price: format_price(product.price),
        merchant_line: format!("التاجر: {}", merchant),
        description,
        badge,
        title,
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
}

pub fn summary_view(summary: &OrderSummary) -> SummaryView {
    SummaryView {
        subtotal: format_price(summary.subtotal),
        shipping: summary
            .shipping
            .map_or_else(|| "اختر المحافظة".to_string(), format_price),
        total: format_price(summary.total),
    }
}

pub fn submit_label(session: &CheckoutSession) -> &'static str {
    if session.is_submitting() {
        "جاري إرسال طلبك..."
    } else {
        "تأكيد الطلب والدفع عند الاستلام"
    }
}

/// Page-level message for sessions that cannot continue
pub fn fatal_message(session: &CheckoutSession) -> Option<String> {
    match session.state() {
        CheckoutState::Failed { error } => Some(error.to_string()),
        _ => None,
    }
}

pub fn governorate_options(directory: Option<&AddressDirectory>) -> Vec<LabelPair> {
    directory
        .map(AddressDirectory::governorate_options)
        .unwrap_or_default()
}

pub fn area_options(directory: Option<&AddressDirectory>, governorate: Option<&str>) -> Vec<LabelPair> {
    match (directory, governorate) {
        (Some(dir), Some(gov)) => dir.areas(gov).to_vec(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_address_directory::builtin_directory;
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_product_card_defaults() {
        let card = product_card(&product(json!({"id": 1, "price": 1500})));
        assert_eq!(card.title, "منتج");
        assert_eq!(card.price, "1,500 ج");
        assert_eq!(card.image_url, PLACEHOLDER_IMAGE);
        assert_eq!(card.merchant_line, "التاجر: Argento Store");
        assert_eq!(card.description, "منتج عالي الجودة من Argento Store");
        assert_eq!(card.badge, None);
    }

    #[test]
    fn test_product_card_badges() {
        let card = product_card(&product(json!({
            "id": "p1", "name": "Lamp", "price": 99.5,
            "image": "https://cdn/x.jpg", "status": "on_sale"
        })));
        assert_eq!(card.title, "Lamp");
        assert_eq!(card.page_title, "Lamp - Argento Store");
        assert_eq!(card.price, "99.50 ج");
        assert_eq!(card.image_url, "https://cdn/x.jpg");
        assert_eq!(card.badge, Some(ProductBadge::OnSale));

        let card = product_card(&product(json!({
            "id": "p1", "price": 10, "availability": "Out of Stock", "status": "on_sale"
        })));
        assert_eq!(card.badge, Some(ProductBadge::Unavailable));
    }

    #[test]
    fn test_summary_view() {
        let view = summary_view(&OrderSummary {
            subtotal: 200.0,
            shipping: None,
            total: 200.0,
        });
        assert_eq!(view.shipping, "اختر المحافظة");

        let view = summary_view(&OrderSummary {
            subtotal: 200.0,
            shipping: Some(70.0),
            total: 270.0,
        });
        assert_eq!(view.shipping, "70 ج");
        assert_eq!(view.total, "270 ج");
    }

    #[test]
    fn test_options() {
        let dir = builtin_directory();
        assert_eq!(governorate_options(Some(&dir)).len(), 5);
        assert!(governorate_options(None).is_empty());
        assert_eq!(area_options(Some(&dir), Some("Dakahlia")).len(), 3);
        assert!(area_options(Some(&dir), None).is_empty());
    }
}
