//! Small helpers shared across modules

pub mod jitter;
