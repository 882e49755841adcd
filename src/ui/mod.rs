//! # UI Module
//!
//! State container, reducer and presentation for the single-page form.
//!
//! - `state`: [`UiState`] and the events that change it
//! - `store`: shared handle the clients dispatch events through
//! - `render`: HTML rendering of a state snapshot

pub mod render;
pub mod state;
pub mod store;

pub use render::PageRenderer;
pub use state::{UiEvent, UiState};
pub use store::UiStore;
