//! Browser shims shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules are the only code that touches `web-sys` directly. Each
//! compiles to a no-op without the `csr` feature, and each degrades to a
//! no-op in the browser when the element it needs is missing.

pub mod dark_mode;
pub mod reveal_dom;
pub mod scroll;
pub mod timers;
