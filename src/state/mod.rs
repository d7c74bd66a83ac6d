//! Application state modules.
//!
//! DESIGN
//! ======
//! Each behavior owns one small state holder with pure transitions. Browser
//! glue in `components` and `util` drives these holders and renders their
//! output, which keeps every rule here testable without a DOM or timers.

pub mod contact;
pub mod nav;
pub mod notification;
pub mod reveal;
pub mod theme;
pub mod typing;
