//! HTTP protocol layer module
//!
//! MIME detection and response builders, decoupled from routing and page
//! composition.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_405_response, build_500_response};
