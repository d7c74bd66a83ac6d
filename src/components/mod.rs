//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page and forward events into the state holders
//! provided by `app::App`. DOM side effects go through `util`.

pub mod anchor;
pub mod back_to_top;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod hero;
pub mod notification;
pub mod projects;
pub mod skills;
