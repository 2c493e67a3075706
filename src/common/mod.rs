//! Common, shared types.

pub mod error;
pub mod layers;
pub mod mask;
pub mod screen;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
