// Error
//------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum QRError {
    // Encoder
    #[error("Empty data")]
    EmptyData,
    #[error("Encoding failure: {0}")]
    EncodingFailure(#[from] qrcode::types::QrError),
    #[error("Module matrix is not square: expected {expected} modules per row, found {found}")]
    InvalidMatrix { expected: usize, found: usize },

    // Renderer
    #[error("Module matrix too small to hold three finder patterns: {module_count} modules")]
    MatrixTooSmall { module_count: usize },
    #[error("Invalid render config: {0}")]
    InvalidConfig(&'static str),
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Failed to parse render config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    // Surfaces
    #[error("Logo source {0:?} cannot be drawn on this surface")]
    UnsupportedLogoSource(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QRError {
    /// True for failures caused by the caller's input rather than the environment.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::EmptyData
                | Self::InvalidMatrix { .. }
                | Self::MatrixTooSmall { .. }
                | Self::InvalidConfig(_)
                | Self::InvalidColor(_)
        )
    }
}

pub type QRResult<T> = Result<T, QRError>;
