//! Error type for color operations
//!
//! [`ColorError`] covers every failure of the conversion, naming and mixing
//! operations. Dataset loading has its own
//! [`DatasetError`](crate::database::DatasetError).

use thiserror::Error;

/// Failure of a color-science operation.
///
/// All variants are local, synchronous conditions. The engine holds no
/// mutable state, so there is never anything to roll back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Malformed hex string or non-finite LAB component.
    #[error("invalid color input: {0}")]
    InvalidColorInput(String),

    /// Naming or mixing was requested against an empty reference table.
    #[error("no reference colors available")]
    NoReferenceData,

    /// The reference table has no usable white (L > 95) or black (L < 5) anchor.
    #[error("insufficient paint palette: no {missing} anchor paint")]
    InsufficientPaintPalette {
        /// Which anchor could not be found ("white" or "black")
        missing: &'static str,
    },

    /// Mixing options outside their valid range.
    #[error("invalid mix options: {0}")]
    InvalidMixOptions(String),

    /// The caller cancelled a running mix search.
    #[error("mix search cancelled")]
    Cancelled,
}
