//! Command handlers for CLI operations

pub mod check;
pub mod show;

pub use check::CheckCommandHandler;
pub use show::ShowCommandHandler;
