use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum SketchError {
    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),

    /// A colour field held something other than a `#rrggbb` value
    #[error("invalid colour value: {0}")]
    InvalidColour(String),

    /// A page listed in the page order was missing from the document
    #[error("page is missing from the document")]
    PageMissing,
}
