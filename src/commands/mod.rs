//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `build` - Run the full staging pipeline
//! - `preflight` - Check host tools and project inputs
//! - `show` - Display resolved configuration and layout
//! - `clean` - Remove staging artifacts

pub mod build;
mod clean;
mod preflight;
pub mod show;

pub use build::cmd_build;
pub use clean::cmd_clean;
pub use preflight::cmd_preflight;
pub use show::cmd_show;
