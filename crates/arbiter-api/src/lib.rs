//! Arbiter HTTP API.
//!
//! A thin layer over the core crates: it parses and validates request
//! payloads, enforces bearer-token authorization and the iteration cap, and
//! serializes core outcomes back to JSON. All check semantics live in
//! `arbiter-checks` and `arbiter-sim`.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
