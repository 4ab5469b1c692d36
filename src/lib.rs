//! Personal website server
//!
//! Serves a small set of server-rendered HTML pages composed from a shared
//! layout plus page-specific template fragments, and static assets from a
//! directory mounted under a URL prefix.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routes;
