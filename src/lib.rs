//! Cropdoc Library
//!
//! Core library for the cropdoc CLI: the static disease/treatment catalog,
//! the recommendation engine, the in-memory TTL cache, and the service
//! layer that ties them together.

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod service;
pub mod sweep;
