use crate::core::features::EncodingError;
use crate::core::oracles::chemistry::DescriptorError;
use crate::core::oracles::geometry::EmbedError;
use thiserror::Error;

/// A whole-molecule construction failure. Any of these aborts the pipeline
/// for the molecule; no partial graphs are returned.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("molecule has {count} atoms, exceeding the {ceiling}-atom ceiling")]
    TooLarge { count: usize, ceiling: usize },

    #[error("3D embedding failed: {source}")]
    Embedding {
        #[from]
        source: EmbedError,
    },

    #[error("conformer provides {positions} positions and {charges} charges for {atoms} atoms")]
    ConformerMismatch {
        atoms: usize,
        positions: usize,
        charges: usize,
    },

    #[error("atoms {atom1} and {atom2} are coincident; non-bonded features are undefined")]
    DegenerateConformer { atom1: usize, atom2: usize },

    #[error("atom descriptor lookup failed: {source}")]
    Descriptor {
        #[from]
        source: DescriptorError,
    },

    #[error("descriptor for atom {atom} is {got} wide, expected {expected}")]
    DescriptorWidth {
        atom: usize,
        expected: usize,
        got: usize,
    },

    #[error("atom feature encoding failed for atom {atom}: {source}")]
    Encoding {
        atom: usize,
        #[source]
        source: EncodingError,
    },
}
