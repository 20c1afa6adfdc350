use thiserror::Error;

/// Errors reported while mapping a single schema entity to C# source fragments.
/// A failure only concerns the entity being processed, the caller decides whether to go on
/// with the rest of the document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The parameter's schema has a shape the query emitter cannot serialize (objects).
    #[error("unsupported schema shape for query parameter `{parameter}`")]
    UnsupportedShape { parameter: String },

    /// An identifier token was empty where a first character is needed.
    #[error("cannot build an identifier from an empty token ({context})")]
    InvalidIdentifierInput { context: String },
}

pub type Result<T> = std::result::Result<T, CodegenError>;
