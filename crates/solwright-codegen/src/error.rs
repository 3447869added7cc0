use solwright_model::CompositionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error(transparent)]
    Composition(#[from] CompositionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
