//! Core, DOM-free primitives and helpers for the portfolio UI.
pub mod content;
pub mod splash;
pub mod state;
pub mod store;
pub mod theme;
