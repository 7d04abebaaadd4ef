//! graphsum - Load plain-text graph descriptions and report on them
//!
//! This crate parses a small text format describing a directed or
//! undirected, optionally weighted graph into an adjacency model, and
//! reports summary statistics about it.

pub mod error;
pub mod export;
pub mod graph;
pub mod parser;
