//! Domain types and pure logic for the diptych generation backend.
//!
//! No I/O lives here: the job record, its log entries, request validation,
//! and the per-tick status transition function are all plain data and
//! functions so they can be tested without a server or a remote API.

pub mod error;
pub mod job;
pub mod request;
pub mod tick;
pub mod types;
