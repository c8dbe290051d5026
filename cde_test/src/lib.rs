//! Contains the helpers shared by the property based tests of the CODE interpreter crates.

#![deny(missing_docs, missing_debug_implementations, clippy::all)]

pub mod input;
