//! CLI command handlers, one per file.

mod classify;
mod fetch;
mod list;

pub use classify::run_classify;
pub use fetch::run_fetch;
pub use list::run_list;
