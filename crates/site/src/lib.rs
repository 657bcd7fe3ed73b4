//! Portfolio site library.
//!
//! This crate provides the site as a library so the router can be built
//! and exercised in tests without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod layout;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seo;
pub mod state;
