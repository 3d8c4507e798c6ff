//! # Rachunki
//!
//! A terminal dashboard for household utility bills (electricity, gas, water).
//!
//! ## Overview
//!
//! This library turns the billing records collected by the rachunki backend
//! (invoice parsers + scrapers feeding a SQLite database and an HTTP API)
//! into cost timelines for the terminal:
//! - Monthly cost allocation across multi-month billing periods
//! - Calendar-quarter roll-ups
//! - A pannable visible window over the timeline (1y/2y/3y/all presets)
//! - Cost and consumption tables as colored text or JSON
//!
//! The aggregation core (`timeline`, `window`, `project`) is pure and
//! stateless; the binary owns input loading and recomputation.
//!
//! ## Features
//!
//! - `colors` (default): Enables terminal color output via owo-colors

/// HTTP client for the rachunki backend chart endpoint
pub mod api;

/// Command-line argument parsing and configuration
pub mod cli;

/// Read access to the rachunki SQLite database
pub mod db;

/// Display formatting for text and JSON output
pub mod display;

/// Data models for billing records and derived rows
pub mod models;

/// Window filtering and display projection
pub mod project;

/// Monthly cost allocation and quarter aggregation
pub mod timeline;

/// Utility functions for month keys, rounding, and formatting
pub mod utils;

/// Visible-window calculation and paging
pub mod window;
