use leptos::ev;
use leptos::prelude::*;

fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Centered dialog over a dimmed page. Escape, the overlay and the close
/// button all call `on_close`.
#[component]
pub fn Modal(title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if is_close_key(&event.key()) {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                <div class="modal-footer">
                    <button class="button button--primary" on:click=move |_| on_close.run(())>
                        "حسناً"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_key() {
        assert!(is_close_key("Escape"));
        assert!(is_close_key("Esc"));
        assert!(!is_close_key("Enter"));
        assert!(!is_close_key("e"));
    }
}
