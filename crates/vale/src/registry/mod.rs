//! Documentation-framework registry.
//!
//! A framework profile pairs an import pattern with the names of components
//! whose children are prose. Profiles are static and ordered by priority.

/// Built-in framework profiles.
pub mod defaults;
/// Profile resolution for a document.
pub mod detect;
/// Registry type definitions.
pub mod types;

pub use defaults::{FERN, FRAMEWORKS, MINTLIFY, STARLIGHT};
pub use detect::{find_profile, resolve};
pub use types::FrameworkProfile;
