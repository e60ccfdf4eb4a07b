//! CLI command handlers.

mod base;
mod generate;
mod param;
mod show;

pub use base::{run_api_base, run_geofencing_base};
pub use generate::{run_completions, run_man};
pub use param::run_param;
pub use show::run_show;
