//! # IO Module
//!
//! Interface layer between HTTP clients and the domain services: request
//! parsing, DTO mapping and translation of domain errors into status codes.
//!
//! - **rest**: axum handlers, one file per resource, plus the DTO mappers

pub mod rest;

pub use rest::*;
