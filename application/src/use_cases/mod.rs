//! Application use cases

pub mod discussion;
