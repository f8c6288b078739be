//! Sacred-component and mount-point protection.
//!
//! A sacred component is a privileged UI component that newer layout
//! tooling must not silently wrap, re-skin, or alter. Hosts declare them
//! (and the mount points that own them) in a [`SacredRegistry`] before any
//! role-wrapping tooling runs; the registry enforces the protection-level
//! invariants at registration time and answers `is_protected` /
//! `can_wrap_with_role` queries afterwards.

mod component;
mod error;
mod mount;
mod registry;

pub use component::{ProtectionLevel, SacredComponent, SacredRules};
pub use error::ProtectError;
pub use mount::{MountPoint, MountProtection};
pub use registry::{AcceptAllProps, DuplicatePolicy, InsertOutcome, PropValidator, SacredRegistry};
