use leptos::prelude::*;

/// Small label over the product image
#[component]
pub fn Badge(
    /// Full class list, e.g. "badge badge--success"
    #[prop(into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=class>
            {children()}
        </span>
    }
}
