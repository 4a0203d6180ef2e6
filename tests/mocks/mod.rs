//! Test doubles for the submission path.
//!
//! `transport` records POSTs in memory; `server` is a one-shot HTTP listener
//! for exercising the real `HttpTransport`.

pub mod server;

pub use server::*;
pub use transport::*;
