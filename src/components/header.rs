//! Fixed header with the theme switch and the mobile navigation menu.

use leptos::prelude::*;

use super::anchor::AnchorLink;
use crate::state::nav::NavState;
use crate::state::theme::ThemeState;
use crate::util::dark_mode;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let on_theme_toggle = move |_| {
        if let Some(next) = theme.try_update(ThemeState::toggle) {
            dark_mode::commit(next);
        }
    };

    let close_menu = Callback::new(move |()| nav.update(NavState::close));

    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::click, move |ev| {
            let inside_nav = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(".nav").ok().flatten())
                .is_some();
            if nav.get_untracked().is_open() {
                nav.update(|n| {
                    n.click_outside(inside_nav);
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <header class="header">
            <nav class="nav" aria-label="Main navigation">
                <AnchorLink href="#home" class="logo">"Portfolio"</AnchorLink>
                <ul class="nav-links" class:active=move || nav.get().is_open() id="navLinks">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <AnchorLink href=href class="nav-link" on_navigate=close_menu>
                                        {label}
                                    </AnchorLink>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <button
                        id="themeToggle"
                        class="theme-toggle"
                        type="button"
                        aria-label="Toggle dark mode"
                        aria-pressed=move || if theme.get().get().is_dark() { "true" } else { "false" }
                        on:click=on_theme_toggle
                    >
                        <span class="theme-toggle__track"></span>
                    </button>
                    <button
                        class="hamburger"
                        type="button"
                        aria-label="Toggle navigation menu"
                        aria-controls="navLinks"
                        aria-expanded=move || nav.get().aria_expanded()
                        on:click=move |_| nav.update(NavState::toggle)
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}
