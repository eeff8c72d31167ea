#![forbid(unsafe_code)]

pub mod config;
pub mod diag;
pub mod identity;
pub mod markers;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod vault;
