//! Outbound networking for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the relay identifiers baked in at build time and `relay`
//! builds and sends the email request. Nothing else in the crate talks to
//! the network.

pub mod config;
pub mod relay;
