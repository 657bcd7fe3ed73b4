//! Portfolio Core - Shared API contracts.
//!
//! This crate describes the data exchanged with the portfolio backend:
//! - what the site sends (login, registration, contact messages, inputs)
//! - what the backend returns (users, categories, contacts, education
//!   entries), always wrapped in the [`ApiResponse`] envelope
//!
//! # Architecture
//!
//! The core crate contains only passive data shapes - no I/O, no HTTP
//! clients, no validation beyond what serde enforces. Everything here is
//! request- or response-scoped and never persisted by the site.
//!
//! # Modules
//!
//! - [`types`] - Typed identifiers and the lenient calendar date
//! - [`contracts`] - Entity shapes and the response envelope

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod contracts;
pub mod types;

pub use contracts::*;
pub use types::*;
