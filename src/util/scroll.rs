//! Back-to-top threshold and in-page anchor navigation.
//!
//! The offset math is pure; the `csr` half performs the smooth scroll and
//! pushes the fragment into history without a reload.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Vertical scroll past which the back-to-top control activates.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;
/// Extra space left above an anchor target, below the header.
pub const ANCHOR_MARGIN: f64 = 20.0;

pub fn back_to_top_active(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Scroll position that lands `target_top` just below the header. May be
/// negative; the browser clamps it.
pub fn anchor_offset(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height - ANCHOR_MARGIN
}

/// Extract the fragment selector from an in-page `href` (`"#about"`).
/// Bare `"#"` and non-fragment links yield `None`.
pub fn fragment(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(href) }
}

/// Current vertical scroll position.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = top;
    }
}

/// Navigate to the in-page target named by `href`.
///
/// Returns `false` without scrolling or touching history when `href` is not
/// a fragment or the target element does not exist.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(selector) = fragment(href) else {
        return false;
    };
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(document) = window.document() else {
            return false;
        };
        let Some(target) = document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            log::debug!("anchor target {selector} not found");
            return false;
        };
        let header_height = document
            .query_selector(".header")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map_or(0.0, |header| f64::from(header.offset_height()));

        smooth_scroll_to(anchor_offset(f64::from(target.offset_top()), header_height));
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(selector));
        }
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = selector;
        false
    }
}
