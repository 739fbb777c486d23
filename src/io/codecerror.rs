use thiserror::Error;

use crate::tabulated::tabulatedfunctionerror::TabulatedFunctionError;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("token {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("negative point count {0}")]
    NegativeCount(i64),

    #[error("invalid table: {0}")]
    Function(#[from] TabulatedFunctionError),
}
