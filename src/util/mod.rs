//! Module with various utilities.

pub mod text;
