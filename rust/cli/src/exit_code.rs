//! Exit code constants for the CLI application.
//!
//! This module centralizes all exit codes used by the CLI, making them
//! easier to maintain and ensuring consistency across commands.

/// Success exit code (standard Unix convention). Also used when the player quits.
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;
