use crate::shared::config::{level_filter, load_config, StorefrontConfig};
use crate::shared::text;
use crate::usecases::u501_checkout::view::LoadingIndicator;
use crate::usecases::u501_checkout::CheckoutPage;
use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    product_id: Option<String>,
}

/// Product id from `?product_id=...`, else from a `/product/{id}` path
pub fn product_id_from_location(search: &str, pathname: &str) -> Option<String> {
    let query: PageQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

    query
        .product_id
        .and_then(|id| text::clean(&id))
        .or_else(|| product_id_from_path(pathname))
}

fn product_id_from_path(pathname: &str) -> Option<String> {
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    segments
        .windows(2)
        .find(|pair| pair[0] == "product")
        .and_then(|pair| urlencoding::decode(pair[1]).ok())
        .and_then(|id| text::clean(&id))
}

fn current_product_id() -> Option<String> {
    let location = web_sys::window()?.location();
    let search = location.search().unwrap_or_default();
    let pathname = location.pathname().unwrap_or_default();
    product_id_from_location(&search, &pathname)
}

#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(None::<StorefrontConfig>);

    leptos::task::spawn_local(async move {
        let loaded = load_config().await;
        log::set_max_level(level_filter(&loaded.logging.level));
        config.set(Some(loaded));
    });

    view! {
        {move || match config.get() {
            Some(config) => view! {
                <CheckoutPage config=config product_id=current_product_id() />
            }
            .into_any(),
            None => view! { <LoadingIndicator /> }.into_any(),
        }}
    }
}
