//! Tool grouping adapters.

mod exclusive;

pub use exclusive::ExclusiveGrouping;
