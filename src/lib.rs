//! AyurSutra - Panchakarma clinic dashboard backend
//!
//! REST API over in-memory demo data for the AyurSutra dashboard: therapy
//! and practitioner catalog, bookings, patient notifications, feedback and
//! derived statistics.
//!
//! # Architecture
//! - `storage`: record types, demo dataset and the in-memory store
//! - `services`: business logic shared by the HTTP API and the CLI
//! - `api`: HTTP handlers, routes and middleware
//! - `config`: static configuration (TOML + environment)
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
