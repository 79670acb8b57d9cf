use thiserror::Error;

/// Errors surfaced by the input-handling layer.
///
/// The algorithm core is total over well-formed ordered input and never
/// produces these; parsing and validation stop bad input before it reaches
/// the algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The raw input contained no tokens at all.
    #[error("please enter a sequence")]
    EmptySequence,

    /// A numeric token ran past the allowed length, which almost always
    /// means the separator between two numbers was forgotten.
    #[error("the number \"{0}\" is too long; make sure every number is separated")]
    NumberTooLong(String),
}

pub type Result<T> = std::result::Result<T, Error>;
