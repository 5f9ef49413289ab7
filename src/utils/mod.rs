//! Utility modules for the gallery generator
//!
//! This module contains the I/O and rendering helpers organized by functionality:
//! - `files`: Input reading, output writing and exception map loading
//! - `html`: HTML escaping and gallery page rendering
//! - `json`: Pretty JSON serialization of the deck record

pub mod files;
pub mod html;
pub mod json;
