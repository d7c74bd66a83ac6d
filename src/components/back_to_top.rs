//! Floating "back to top" control, active past the scroll threshold.

use leptos::prelude::*;

use crate::util::scroll;

#[component]
pub fn BackToTop() -> impl IntoView {
    let active = RwSignal::new(scroll::back_to_top_active(scroll::scroll_y()));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            active.set(scroll::back_to_top_active(scroll::scroll_y()));
        });
        on_cleanup(move || handle.remove());
    }

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        scroll::smooth_scroll_to(0.0);
    };

    view! {
        <a href="#home" class="back-to-top" class:active=move || active.get() aria-label="Back to top" on:click=on_click>
            <i class="fas fa-arrow-up" aria-hidden="true"></i>
        </a>
    }
}
