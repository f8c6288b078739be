//! Shared vocabulary for the strata layout-protection crates.
//!
//! Two coexisting UI trees (`legacy` and `nextgen`) live side by side
//! during migration; every declarative claim in the other crates is tagged
//! with the [`Environment`] it belongs to, or an [`EnvScope`] when it spans
//! both. [`ComponentHandle`] is the opaque reference registries hold to a
//! host-framework renderable.

mod environment;
mod handle;

pub use environment::{EnvScope, Environment};
pub use handle::ComponentHandle;
