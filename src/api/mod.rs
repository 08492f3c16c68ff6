//! HTTP API Client
//!
//! Functions for communicating with the document-store REST API.

mod client;

pub use client::*;
