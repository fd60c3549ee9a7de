//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The area engine (validation, computation, formatting)
//! - Application settings
//! - Message types for the event system

pub mod area;
pub mod messages;
pub mod settings;

pub use area::{AreaError, AreaResult, NumericField, compute_area, format_result, parse_positive_number};
pub use messages::Message;
pub use settings::{AppSettings, ThemeMode};
