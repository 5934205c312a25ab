//! Library catalog backend
//!
//! A read-only GraphQL API over a SQLite catalog of libraries, books,
//! authors, genres, users and loans. Every list field is a Relay connection
//! backed by the cursor pagination engine in [`pagination`].

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod graphql;
pub mod pagination;

pub use app::{AppState, build_app};
