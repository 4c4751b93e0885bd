//! Cost Manager HTTP API Service.
//!
//! This crate provides the HTTP API for personal expense tracking:
//!
//! - User registration and running totals
//! - Cost item ingestion within the accepted date window
//! - Monthly reports grouped by category, frozen into a cache once a month
//!   is past its grace period

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers are async for the router

pub mod config;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod routes;
pub mod state;

pub use config::{ServiceConfig, TeamMember};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
