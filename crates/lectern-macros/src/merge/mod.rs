//! Implementation of the `#[derive(Merge)]` macro.

mod attrs;
mod derive;

pub use derive::merge_derive_impl;
