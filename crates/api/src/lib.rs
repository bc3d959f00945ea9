//! HTTP API: configuration, routing, and request/response mapping.
//!
//! Stands in for the interactive planning form: every request carries the full
//! career selection and gets a freshly computed report back. Nothing is stored
//! between requests.

pub mod app;
pub mod config;
pub mod middleware;
