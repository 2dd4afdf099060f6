//! File system storage management
//!
//! Handles path confinement, file operations, and the metadata they report.

pub mod filesystem;
pub mod operations;
pub mod permissions;
pub mod results;
pub mod validation;

pub use operations::FileOperations;
pub use results::*;
pub use validation::{ConfinedPath, WorkspaceRoot};
