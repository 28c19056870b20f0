pub mod atomic_file;
pub mod boundary;
pub mod build_source;
pub mod cli;
pub mod domain;
pub mod error;
pub mod ini;
pub mod observability;
pub mod preferences;
pub mod ui;
pub mod version_file;

pub use error::{Result, TravisCliError};
