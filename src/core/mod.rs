//! Core client module

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod request;
pub mod response;
