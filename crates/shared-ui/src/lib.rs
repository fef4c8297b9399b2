//! Styled building blocks shared by every Kronotrack screen.

pub mod components;

pub use components::*;
