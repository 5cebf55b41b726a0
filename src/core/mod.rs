//! Core client-side state and error types

pub mod cart;
pub mod error;
pub mod history;
pub mod session;
