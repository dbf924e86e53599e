// src/models/mod.rs

pub mod category;
pub mod reply;
pub mod thread;
pub mod user;
