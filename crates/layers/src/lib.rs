//! Z-index contracts, safe-frame shells, and the registry arbitrating them.
//!
//! Independently developed UI layers claim stacking positions by
//! registering [`ZIndexContract`]s and rectangular regions by registering
//! [`SafeFrameShell`]s with a [`LayerRegistry`]. The registry validates
//! each claim at insertion and rejects silent stacking conflicts; after
//! bootstrap it answers pure layout-validity queries.

mod contract;
mod error;
mod frame;
mod registry;

pub use contract::{Condition, ContractRules, LayerKind, ZIndexContract};
pub use error::{Dimension, LayerError};
pub use frame::{FrameConstraints, FramePosition, FrameRules, Padding, SafeFrameShell};
pub use registry::LayerRegistry;
