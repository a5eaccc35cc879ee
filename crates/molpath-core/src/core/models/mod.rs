//! Typed molecule descriptions consumed by the graph builders.

pub mod atom;
pub mod bond;
pub mod molecule;
