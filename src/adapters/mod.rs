//! Infrastructure adapters. Implement outbound ports.
//!
//! HTTP feed, filesystem. Map errors to DomainError.

pub mod feed;
pub mod persistence;
