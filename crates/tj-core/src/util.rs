//! Small helpers shared by the geometry crates

pub mod tracing_wrappers;
