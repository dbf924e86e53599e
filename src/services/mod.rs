// src/services/mod.rs

pub mod authz;
pub mod board;
pub mod thread;
