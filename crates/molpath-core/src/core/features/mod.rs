//! Pure feature encoders for atoms and edges.

pub mod atom;
pub mod bond;

use thiserror::Error;

/// An atom descriptor fell outside its encodable one-hot range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("formal charge {charge} is outside the encodable -8..=8 range")]
    ChargeOutOfRange { charge: i8 },

    #[error("degree {degree} is outside the encodable 0..=10 range")]
    DegreeOutOfRange { degree: usize },

    #[error("hydrogen count {count} is outside the encodable 0..=8 range")]
    HydrogenCountOutOfRange { count: usize },
}
