//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (area engine, settings, messages)
//! - `controllers/` - Orchestration (the calculator form)
//! - `infrastructure/` - External integrations (error, logging, platform)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod state;

// Re-exports for convenient external access
pub use controllers::calculator::CalculatorForm;
pub use domain::{AppSettings, AreaError, AreaResult, Message, NumericField, ThemeMode};
pub use domain::{compute_area, format_result, parse_positive_number};
pub use infrastructure::error::AppError;
pub use infrastructure::platform::detect_system_dark_mode;
