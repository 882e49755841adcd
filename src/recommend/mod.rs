//! # Recommendation Module
//!
//! Submitting recommendation jobs and following them to completion.
//!
//! - `models`: request, job and recommendation types
//! - `request`: the recommendation request client
//! - `poller`: the bounded job status poll loop

pub mod models;
pub mod poller;
pub mod request;

pub use poller::{JobPoller, PollOutcome};
pub use request::{QueuedJob, submit};
