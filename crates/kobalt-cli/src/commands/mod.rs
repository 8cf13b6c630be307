//! Command implementations for kobalt-cli

pub mod path;
pub mod proxy;
pub mod show;

pub use path::run_path;
pub use proxy::run_proxy;
pub use show::run_show;
