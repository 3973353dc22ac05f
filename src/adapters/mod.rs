//! Adapters - Implementations of port interfaces.
//!
//! - `grouping` - Tool classification and per-class mutual exclusion

pub mod grouping;

pub use grouping::ExclusiveGrouping;
