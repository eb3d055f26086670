//! Service layer for FilmIQ
//!
//! Filters the joined table and runs the aggregations behind each dashboard
//! page, between the HTTP/CLI front ends and storage.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::ref_patterns, reason = "Ref patterns are clearer in some contexts")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::manual_let_else, reason = "if let is clearer")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

pub mod aggregate;
mod dashboard_service;
mod error;
mod query;

#[cfg(test)]
mod fixtures;

pub use dashboard_service::{
    ActorsPage, DashboardService, DirectorsPage, FilterOptions, OverviewPage,
};
pub use error::ServiceError;
pub use query::{apply_filter, full_view, row_matches};
