//! Foundation layer: molecule models, oracle seams, feature encoders,
//! geometric feature functions, and I/O utilities.

pub mod features;
pub mod io;
pub mod models;
pub mod oracles;
pub mod utils;
