//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and caching so route handlers can
//! stay focused on protocol translation and error-policy mapping.

pub mod cache;
pub mod tip;
