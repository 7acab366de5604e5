//! Client for the Chattify registration API

mod client;

pub use client::*;
