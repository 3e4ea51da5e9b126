//! Expense Saver - personal expense and savings tracker
//!
//! This library records expenses and savings, groups them by calendar
//! month or year, and produces category breakdowns, trends, pie charts
//! and PDF/CSV statements.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, savings goals, periods, money)
//! - `analytics`: Pure filtering, aggregation and trend bucketing
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Business logic layer
//! - `reports`: Storage-backed reports
//! - `chart`: SVG pie chart rendering
//! - `export`: PDF and CSV statements
//! - `display`: Terminal tables and formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_saver::config::{paths::SaverPaths, settings::Settings};
//!
//! let paths = SaverPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod analytics;
pub mod audit;
pub mod chart;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SaverError, SaverResult};
