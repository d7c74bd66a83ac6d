//! Static portfolio content and its markup.
//!
//! ARCHITECTURE
//! ============
//! `data` holds the build-time skill and project lists; `markup` maps them to
//! HTML fragments. Components inject the fragments wholesale, so rendering
//! stays a pure function of the data.

pub mod data;
pub mod markup;
