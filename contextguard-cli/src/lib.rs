//! ContextGuard CLI library
//!
//! This library provides the command-line interface for ContextGuard
//! content location and text adaptation.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
