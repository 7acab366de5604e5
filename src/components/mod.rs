//! Reusable UI components

mod phone_input;

pub use phone_input::*;
