//! In-page link with smooth scrolling and offset for the fixed header.

use leptos::prelude::*;

use crate::util::scroll;

#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    /// Runs after navigation, e.g. to close the mobile menu.
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if scroll::fragment(href).is_some() {
            ev.prevent_default();
            scroll::scroll_to_anchor(href);
        }
        if let Some(cb) = on_navigate {
            cb.run(());
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
