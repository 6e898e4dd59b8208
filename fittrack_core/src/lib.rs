#![forbid(unsafe_code)]

//! Core domain model and business logic for the FitTrack system.
//!
//! This crate provides:
//! - Domain types (user records, field updates, reports)
//! - BMI and calorie/protein recommendation formulas
//! - The roster of users with by-name delegation
//! - Flat-file persistence of the roster
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod record;
pub mod roster;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use record::{bmi_change, parse_height_meters};
pub use roster::Roster;
pub use store::{load_all, save_all, USER_DATA_FILE};
