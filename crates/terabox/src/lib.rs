//! Terabox direct-link resolver
//!
//! This crate provides the two pieces the bot needs to turn a Terabox
//! share link into a direct download URL: a cheap syntactic link check
//! and a thin client for the RapidAPI resolver endpoint.

pub mod client;
pub mod error;
pub mod link;

pub use client::{ApiConfig, LinkResolver, TeraboxApi};
pub use error::ResolveError;
pub use link::{find_terabox_link, is_terabox_link};
pub use reqwest::StatusCode;
