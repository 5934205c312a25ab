//! HTTP route definitions
//!
//! The catalog is served as GraphQL at /graphql. Probes live at /healthz and
//! /readyz.

pub mod graphql;
pub mod health;
