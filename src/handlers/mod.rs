// src/handlers/mod.rs

pub mod auth;
pub mod board;
pub mod home;
pub mod thread;
