#![forbid(unsafe_code)]

//! Core domain model and business logic for the Bulking Bites calculator.
//!
//! This crate provides:
//! - Domain types (inputs, plans, policies)
//! - The nutrition estimator
//! - Transient form session state
//! - Configuration and logging support

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod estimator;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, PlanConfig};
pub use estimator::compute_plan;
pub use session::FormSession;
