// src/api/handlers/mod.rs
pub mod analyze;
pub mod pages;
pub mod system;
