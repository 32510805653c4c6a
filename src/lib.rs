// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod display;
pub mod errors;
pub mod models;
pub mod providers;
pub mod runner;
