//! Domain logic - pure version rules independent of files and CI services

pub mod build;
pub mod bump;
pub mod reconcile;
pub mod version;

pub use build::{highest_build_number, BuildRecord};
pub use bump::{BumpFlags, BumpRequest, VersionBump};
pub use reconcile::{reconcile, reconcile_flags};
pub use version::SemanticVersion;
