//! Public, per-molecule pipeline entry points.

pub mod path_complex;
