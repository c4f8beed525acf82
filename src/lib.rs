//! vdrl-screen: a small web front-end for a pre-trained VDRL screening classifier.
//!
//! The crate is layered strictly: [`schema`] holds the fixed feature ordering,
//! [`model`] owns the loaded classifier artifact, [`handler`] turns an untrusted
//! form submission into an outcome, and [`server`] exposes the HTTP surface.

pub mod handler;
pub mod model;
pub mod schema;
pub mod server;
