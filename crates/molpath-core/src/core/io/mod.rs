//! Molecule description input and feature matrix export.

pub mod export;
pub mod molfile;
