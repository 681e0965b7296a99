//! Translation-management backend: localization keys, their per-locale
//! translations, and a language detection endpoint.

pub mod config;
pub mod detect;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;
