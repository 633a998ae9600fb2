// src/core.rs
pub mod codec;
pub mod filter;
pub mod output;
pub mod walker;
