//! MedBot Library
//!
//! A keyword-driven assistant for symptom advice, doctors, appointments and a
//! pharmacy cart, usable from the terminal or over HTTP.

// Domain modules
pub mod bot;
pub mod knowledge;
pub mod store;
pub mod user;

// Infrastructure
pub mod config;
pub mod error;
pub mod logger;
pub mod router;
pub mod terminal;
