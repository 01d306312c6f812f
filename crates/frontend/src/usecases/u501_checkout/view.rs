use super::presenter::{self, ProductCard};
use super::session::CheckoutState;
use super::view_model::CheckoutVm;
use crate::domain::a002_order::FormField;
use crate::domain::a003_address_directory::LabelPair;
use crate::shared::components::ui::{Badge, Button, Input, Select, Textarea};
use crate::shared::config::StorefrontConfig;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::{Flex, FlexGap, Spinner};

fn pairs(options: Vec<LabelPair>) -> Vec<(String, String)> {
    options.into_iter().map(|o| (o.value, o.label)).collect()
}

#[component]
pub fn CheckoutPage(config: StorefrontConfig, product_id: Option<String>) -> impl IntoView {
    let vm = CheckoutVm::new(config);
    vm.start(product_id);

    let session = vm.session;

    let card = Memo::new(move |_| session.with(|s| s.product().map(presenter::product_card)));
    let summary = Memo::new(move |_| session.with(|s| presenter::summary_view(&s.summary())));
    let fatal = Memo::new(move |_| session.with(presenter::fatal_message));
    let loading = Memo::new(move |_| session.with(|s| *s.state() == CheckoutState::Loading));
    let notice = Memo::new(move |_| session.with(|s| s.notice().map(str::to_string)));
    let submit_label = Memo::new(move |_| session.with(presenter::submit_label));

    let governorate_options = Signal::derive(move || {
        session.with(|s| pairs(presenter::governorate_options(s.directory())))
    });
    let area_options = Signal::derive(move || {
        session.with(|s| pairs(presenter::area_options(s.directory(), s.governorate())))
    });

    Effect::new(move |_| {
        if let Some(card) = card.get() {
            document().set_title(&card.page_title);
        }
    });

    view! {
        <main class="checkout" dir="rtl">
            {move || fatal.get().map(|message| view! {
                <div class="alert alert--error alert--fatal">{message}</div>
            })}

            <Show when=move || loading.get()>
                <LoadingIndicator />
            </Show>

            {move || card.get().map(|card| view! { <ProductSection card=card /> })}

            <Show when=move || card.with(Option::is_some)>
                <form
                    class="checkout__form"
                    novalidate=true
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    <Input
                        id="customer-name"
                        label="الاسم بالكامل"
                        required=true
                        value=vm.customer_name
                        invalid=vm.is_flagged(FormField::Name)
                        on_input=Callback::new(move |v: String| vm.customer_name.set(v))
                    />
                    <Input
                        id="customer-phone"
                        label="رقم الهاتف"
                        input_type="tel"
                        placeholder="01xxxxxxxxx"
                        required=true
                        maxlength=11
                        value=vm.customer_phone
                        invalid=vm.is_flagged(FormField::Phone)
                        on_input=Callback::new(move |v: String| vm.set_phone(v))
                    />
                    <Input
                        id="customer-whatsapp"
                        label="رقم الواتساب (اختياري)"
                        input_type="tel"
                        placeholder="01xxxxxxxxx"
                        maxlength=11
                        value=vm.customer_whatsapp
                        invalid=vm.is_flagged(FormField::Whatsapp)
                        on_input=Callback::new(move |v: String| vm.set_whatsapp(v))
                    />
                    <Select
                        id="shipping-city"
                        label="المحافظة"
                        placeholder="اختر المحافظة"
                        required=true
                        value=vm.governorate
                        options=governorate_options
                        invalid=vm.is_flagged(FormField::Governorate)
                        on_change=Callback::new(move |v: String| vm.select_governorate(v))
                    />
                    <Select
                        id="shipping-area"
                        label="المنطقة"
                        placeholder="اختر المنطقة"
                        required=true
                        value=vm.area
                        options=area_options
                        disabled=Signal::derive(move || vm.governorate.with(String::is_empty))
                        invalid=vm.is_flagged(FormField::Area)
                        on_change=Callback::new(move |v: String| vm.select_area(v))
                    />
                    <Textarea
                        id="shipping-address"
                        label="العنوان بالتفصيل"
                        required=true
                        value=vm.address
                        invalid=vm.is_flagged(FormField::Address)
                        on_input=Callback::new(move |v: String| vm.address.set(v))
                    />
                    <div class="form__row">
                        <Input
                            id="shipping-building"
                            label="رقم العمارة"
                            value=vm.building
                            on_input=Callback::new(move |v: String| vm.building.set(v))
                        />
                        <Input
                            id="shipping-apartment"
                            label="رقم الشقة"
                            value=vm.apartment
                            on_input=Callback::new(move |v: String| vm.apartment.set(v))
                        />
                    </div>
                    <Input
                        id="shipping-landmark"
                        label="علامة مميزة"
                        value=vm.landmark
                        on_input=Callback::new(move |v: String| vm.landmark.set(v))
                    />

                    <div class="summary">
                        <div class="summary__row">
                            <span>"سعر المنتج"</span>
                            <span>{move || summary.get().subtotal}</span>
                        </div>
                        <div class="summary__row">
                            <span>"الشحن"</span>
                            <span>{move || summary.get().shipping}</span>
                        </div>
                        <div class="summary__row summary__row--total">
                            <span>"الإجمالي"</span>
                            <span>{move || summary.get().total}</span>
                        </div>
                        <div class="summary__payment">"الدفع عند الاستلام"</div>
                    </div>

                    <Button button_type="submit" block=true disabled=vm.is_submit_disabled()>
                        {move || submit_label.get()}
                    </Button>
                </form>
            </Show>

            {move || notice.get().map(|message| view! {
                <div class="alert alert--error" role="alert" on:click=move |_| vm.dismiss_notice()>
                    {message}
                </div>
            })}

            {move || vm.confirmed_order().get().map(|order_id| view! {
                <Modal
                    title="تم إرسال طلبك بنجاح".to_string()
                    on_close=Callback::new(move |_: ()| vm.close_confirmation())
                >
                    <p>"رقم الطلب: " <strong>{order_id}</strong></p>
                    <p>"سيتواصل معك فريقنا قريباً لتأكيد الطلب."</p>
                </Modal>
            })}
        </main>
    }
}

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 2rem;">
            <Spinner />
            <span>"جاري التحميل..."</span>
        </Flex>
    }
}

#[component]
fn ProductSection(card: ProductCard) -> impl IntoView {
    view! {
        <section class="product">
            <div class="product__media">
                <img class="product__image" src=card.image_url alt=card.title.clone() />
                {card.badge.map(|badge| view! {
                    <Badge class=badge.class()>{badge.label()}</Badge>
                })}
            </div>
            <div class="product__info">
                <h1 class="product__title">{card.title}</h1>
                <div class="product__price">{card.price}</div>
                <div class="product__merchant">{card.merchant_line}</div>
                <p class="product__description">{card.description}</p>
            </div>
        </section>
    }
}
