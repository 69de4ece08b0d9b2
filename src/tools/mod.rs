// src/tools/mod.rs
pub mod breach;

pub use breach::{check_breach, HashRange, LookupError, PwnedRangeClient, RangeLookup};
