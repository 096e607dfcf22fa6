//! Types shared between the sweeper engine and the front ends that drive it.

pub mod models;
pub mod protocol;
