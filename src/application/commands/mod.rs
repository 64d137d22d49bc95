// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between a front end and the services
// - Commands validate input, then dispatch; the store never validates
// - Commands turn every failure into an ErrorResponse

pub mod anime_commands;
pub mod collection_commands;
pub mod window_commands;

pub use anime_commands::*;
pub use collection_commands::*;
pub use window_commands::*;
