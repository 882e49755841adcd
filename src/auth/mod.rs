//! # Authentication Module
//!
//! Session state and the login client that fills it from the gateway's
//! `/auth/login` endpoint.

pub mod login;
pub mod models;
pub mod session;

pub use login::login;
