// # Routes Module
//
// - HTTP route handlers for the MovieMatch frontend.
// - Handlers only translate HTTP into client calls; all UI state changes go
//   through the `UiStore`.

/// Liveness and gateway health endpoints
pub mod health;

/// The page itself
pub mod page;

/// Login form submission
pub mod auth;

/// Recommendation form submission
pub mod recommend;
