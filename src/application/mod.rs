// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between a front end and the services
// - Validates user input before anything is dispatched
// - Translates between DTOs and domain values

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{CommandResult, ErrorResponse, ErrorType};
pub use state::AppState;
