//! Cost Manager Client SDK.
//!
//! This crate provides a typed client for the cost-manager HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use cost_manager_client::{AddCostRequest, CostManagerClient, CreateUserRequest};
//! use cost_manager_core::{Category, UserId};
//!
//! # async fn example() -> Result<(), cost_manager_client::ClientError> {
//! let client = CostManagerClient::new("http://localhost:3000")?;
//!
//! client
//!     .create_user(&CreateUserRequest {
//!         id: UserId::new(123),
//!         first_name: "Ada".to_string(),
//!         last_name: "Lovelace".to_string(),
//!     })
//!     .await?;
//!
//! let cost = client
//!     .add_cost(&AddCostRequest::new(UserId::new(123), Category::Food, "lunch", 50.0))
//!     .await?;
//!
//! let report = client.monthly_report(UserId::new(123), 2025, 3).await?;
//! println!("{} food items", report.costs.get(Category::Food).len());
//! # let _ = cost;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, CostManagerClient};
pub use error::ClientError;
pub use types::*;
