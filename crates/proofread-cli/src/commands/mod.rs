//! Command implementations.

pub mod check;
pub mod config;
pub mod extract;
pub mod formats;

pub use self::check::execute_check;
pub use self::config::execute_config;
pub use self::extract::execute_extract;
pub use self::formats::execute_formats;
