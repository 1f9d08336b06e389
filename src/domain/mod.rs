//! Domain logic - release version rules independent of any transport

pub mod label;
pub mod version;
pub mod versions;

pub use label::{LabelPolicy, PickIntoLabel};
pub use version::ReleaseVersion;
pub use versions::{latest_of, next_security_versions, StaticCatalog, VersionCatalog};
