// src/lib.rs

//! Stormboard Advisory Library

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
