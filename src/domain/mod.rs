//! Domain layer containing the toolbar selection logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (tool ids, gesture types, errors)
//! - `toolbar` - Tools, selectors, the toolbar aggregate and its resolver

pub mod foundation;
pub mod toolbar;
