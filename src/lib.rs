//! Shortlink Console - terminal client for a URL shortener service
//!
//! This library provides the client side of a cookie-session URL shortener:
//! an HTTP API client, the auth session, the paginated URL list and the
//! form logic, shared by a command-line interface and a terminal UI.
//!
//! # Features
//! - **cli**: Command-line subcommands (default)
//! - **tui**: Terminal user interface (default)
//! - **full**: All features enabled
//!
//! # Architecture
//! - `client`: Backend API trait, HTTP implementation and cookie store
//! - `session`: Authentication state shared by every view
//! - `listing`: Paginated, sortable URL list view-model
//! - `forms`: Login, registration and shorten forms
//! - `presentation`: Table rows, pagination bar and sort controls
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod forms;
pub mod interfaces;
pub mod listing;
pub mod models;
pub mod presentation;
pub mod runtime;
pub mod session;
pub mod system;
pub mod utils;

#[cfg(test)]
mod testing;
