//! Page footer with the current year.

use leptos::prelude::*;

use crate::content::data::OWNER_NAME;

/// Year shown when no browser clock is available.
#[cfg(not(feature = "csr"))]
const FALLBACK_YEAR: u32 = 2025;

fn current_year() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_YEAR
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© " <span id="year">{current_year()}</span> " " {OWNER_NAME} ". All rights reserved."</p>
        </footer>
    }
}
