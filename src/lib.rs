//! expense-cli - Personal expense tracker for the terminal
//!
//! This library provides the core functionality for the `expenses` command
//! line tool: a flat-file expense store, monthly budget ceilings, and
//! filtered summaries and exports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, month keys)
//! - `storage`: CSV/JSON file storage layer
//! - `services`: Business logic (aggregation engine, expense and budget services)
//! - `display`: Plain-text formatting for terminal output
//! - `export`: CSV and JSON export encoders
//! - `cli`: clap subcommand definitions and handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
