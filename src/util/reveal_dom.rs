//! IntersectionObserver wiring for section reveals and skill bar animation.
//!
//! `RevealTracker` decides; this module observes `.section` elements, applies
//! the `animate` class, and stops observing a section once it is revealed.

#[cfg(test)]
#[path = "reveal_dom_test.rs"]
mod reveal_dom_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::reveal::RevealTracker;
#[cfg(feature = "csr")]
use crate::state::reveal::{
    BAR_ANIMATION_DELAY_MS, BarAnimation, REVEAL_THRESHOLD, REVEALED_CLASS, Reveal, SECTION_CLASS,
};

/// Observe every section and run the load-time check for sections already
/// in view.
pub fn observe_sections(tracker: Rc<RefCell<RevealTracker>>) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Ok(sections) = document.query_selector_all(&format!(".{SECTION_CLASS}")) else {
            return;
        };

        let observer_tracker = Rc::clone(&tracker);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let reveal = observer_tracker.borrow_mut().observe(
                        &target.id(),
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    );
                    if let Some(reveal) = reveal {
                        apply_reveal(&target, &reveal);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::debug!("IntersectionObserver unavailable: {err:?}");
                return;
            }
        };
        callback.forget();

        let viewport_height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        for i in 0..sections.length() {
            let Some(section) = sections.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let top = section.get_bounding_client_rect().top();
            let reveal = tracker.borrow_mut().check_initial(&section.id(), top, viewport_height);
            if let Some(reveal) = reveal {
                apply_reveal(&section, &reveal);
                continue;
            }
            observer.observe(&section);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = tracker;
    }
}

#[cfg(feature = "csr")]
fn apply_reveal(section: &web_sys::Element, reveal: &Reveal) {
    let _ = section.class_list().add_1(REVEALED_CLASS);
    if reveal.animate_skill_bars {
        animate_skill_bars();
    }
}

/// Collapse every `.skill-progress` bar to zero width, then restore its
/// captured width after a short delay so the CSS transition plays.
pub fn animate_skill_bars() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(bars) = document.query_selector_all(".skill-progress") else {
            return;
        };
        for i in 0..bars.length() {
            let Some(bar) = bars.item(i).and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok()) else {
                continue;
            };
            let style = bar.style();
            let animation = BarAnimation::capture(&style.get_property_value("width").unwrap_or_default());
            let _ = style.set_property("width", animation.reset_width());
            crate::util::timers::after_ms(BAR_ANIMATION_DELAY_MS, move || {
                let _ = bar.style().set_property("width", animation.final_width());
            });
        }
    }
}
