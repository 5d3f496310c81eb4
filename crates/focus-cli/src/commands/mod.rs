//! Command implementations for focus-cli

pub mod add;
pub mod clean;
pub mod list;

pub use add::run_add;
pub use clean::run_clean;
pub use list::run_list;
