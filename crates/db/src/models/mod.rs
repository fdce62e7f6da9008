//! Record types for the on-disk dataset.

pub mod vehicle;
