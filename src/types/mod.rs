//! Shared wire types.

pub mod image;
