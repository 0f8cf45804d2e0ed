// src/handlers/mod.rs
pub mod signup;
