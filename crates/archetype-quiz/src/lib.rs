//! Archetype quiz engine and lead-capture submission workflow.
//!
//! The crate is split between the pure quiz domain (`quiz`: answer
//! validation, scoring, profile classification) and the submission side
//! (`submission`: gateway, contact-store abstraction, HTTP routes). The
//! remaining modules carry service plumbing shared with the api binary.

pub mod config;
pub mod error;
pub mod quiz;
pub mod submission;
pub mod telemetry;
