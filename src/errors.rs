use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric template index other than 1 or 2 was supplied when picking
    /// a role-specific adapter fragment. This is a caller defect, not a data
    /// condition; the typed [`MateRole`](crate::MateRole) API cannot hit it.
    #[error("read template index must be 1 or 2, got {index}")]
    InvalidMateRole { index: usize },
}
