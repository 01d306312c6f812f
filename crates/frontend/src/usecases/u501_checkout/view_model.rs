//! ViewModel of the checkout page
//!
//! Form fields live in individual RwSignals; the session is mirrored into
//! `session` after every controller transition.

use super::backend::HttpCheckoutBackend;
use super::controller::CheckoutController;
use super::session::{CheckoutSession, CheckoutState, SubmissionContext};
use crate::domain::a002_order::validator::PHONE_DIGITS;
use crate::domain::a002_order::{FormField, OrderForm};
use crate::shared::api_utils::current_page_url;
use crate::shared::config::StorefrontConfig;
use crate::shared::text::digits_only;
use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// How long a recoverable error stays on screen
const NOTICE_TIMEOUT_MS: u32 = 5_000;

type Controller = CheckoutController<HttpCheckoutBackend>;

#[derive(Clone, Copy)]
pub struct CheckoutVm {
    // === Поля формы ===
    pub customer_name: RwSignal<String>,
    pub customer_phone: RwSignal<String>,
    pub customer_whatsapp: RwSignal<String>,
    pub governorate: RwSignal<String>,
    pub area: RwSignal<String>,
    pub address: RwSignal<String>,
    pub building: RwSignal<String>,
    pub apartment: RwSignal<String>,
    pub landmark: RwSignal<String>,

    // === Зеркало сессии ===
    pub session: RwSignal<CheckoutSession>,

    controller: StoredValue<Rc<Controller>, LocalStorage>,
}

impl CheckoutVm {
    pub fn new(config: StorefrontConfig) -> Self {
        let controller = Rc::new(CheckoutController::new(HttpCheckoutBackend::new(config)));
        let session = RwSignal::new(controller.snapshot());
        controller.set_observer(move |s| session.set(s.clone()));

        Self {
            customer_name: RwSignal::new(String::new()),
            customer_phone: RwSignal::new(String::new()),
            customer_whatsapp: RwSignal::new(String::new()),
            governorate: RwSignal::new(String::new()),
            area: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            building: RwSignal::new(String::new()),
            apartment: RwSignal::new(String::new()),
            landmark: RwSignal::new(String::new()),
            session,
            controller: StoredValue::new_local(controller),
        }
    }

    // === Производные сигналы ===

    pub fn is_flagged(&self, field: FormField) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.validation().is_flagged(field)))
    }

    pub fn is_submit_disabled(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || !session.with(CheckoutSession::submit_enabled))
    }

    /// Order id while the confirmation is open
    pub fn confirmed_order(&self) -> Signal<Option<String>> {
        let session = self.session;
        Signal::derive(move || {
            session.with(|s| match s.state() {
                CheckoutState::Submitted { order_id } => Some(order_id.clone()),
                _ => None,
            })
        })
    }

    pub fn form(&self) -> OrderForm {
        OrderForm {
            customer_name: self.customer_name.get_untracked(),
            customer_phone: self.customer_phone.get_untracked(),
            customer_whatsapp: self.customer_whatsapp.get_untracked(),
            governorate: self.governorate.get_untracked(),
            area: self.area.get_untracked(),
            address: self.address.get_untracked(),
            building: self.building.get_untracked(),
            apartment: self.apartment.get_untracked(),
            landmark: self.landmark.get_untracked(),
        }
    }

    // === Команды ===

    /// Товар и справочник адресов грузятся параллельно
    pub fn start(&self, product_id: Option<String>) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.load_directory().await;
        });

        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.load_product(product_id.as_deref()).await;
        });
    }

    pub fn select_governorate(&self, value: String) {
        let controller = self.controller.get_value();
        controller.select_governorate(&value);
        self.governorate.set(value);
        self.area
            .set(self.session.with_untracked(|s| s.area().unwrap_or_default().to_string()));
    }

    pub fn select_area(&self, value: String) {
        self.controller.get_value().select_area(&value);
        self.area.set(value);
    }

    pub fn set_phone(&self, raw: String) {
        self.customer_phone.set(digits_only(&raw, PHONE_DIGITS));
    }

    pub fn set_whatsapp(&self, raw: String) {
        self.customer_whatsapp.set(digits_only(&raw, PHONE_DIGITS));
    }

    pub fn dismiss_notice(&self) {
        self.controller.get_value().dismiss_notice();
    }

    pub fn submit(&self) {
        if self.is_submit_disabled().get_untracked() {
            return;
        }
        let form = self.form();
        let controller = self.controller.get_value();
        let this = *self;

        spawn_local(async move {
            let context = SubmissionContext {
                page_url: current_page_url(),
                placed_at: Utc::now(),
            };
            if let Err(e) = controller.submit(&form, context).await {
                log::warn!("Order not placed: {}", e);
                this.schedule_notice_dismiss();
            }
        });
    }

    /// Clear the current notice after a delay unless it has been replaced
    fn schedule_notice_dismiss(&self) {
        let Some(shown) = self
            .session
            .with_untracked(|s| s.notice().map(str::to_string))
        else {
            return;
        };
        let controller = self.controller.get_value();
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            if controller.snapshot().notice() == Some(shown.as_str()) {
                controller.dismiss_notice();
            }
        });
    }

    /// Close the confirmation and start over with an empty form
    pub fn close_confirmation(&self) {
        self.controller.get_value().acknowledge_order();
        for field in [
            self.customer_name,
            self.customer_phone,
            self.customer_whatsapp,
            self.governorate,
            self.area,
            self.address,
            self.building,
            self.apartment,
            self.landmark,
        ] {
            field.set(String::new());
        }
    }
}
