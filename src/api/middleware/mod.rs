//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, admin gating, and observability middleware.

pub mod admin;
pub mod auth;
pub mod tracing;
