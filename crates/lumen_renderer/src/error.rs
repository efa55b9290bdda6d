use lumen_core::TextureError;
use thiserror::Error;

/// Errors from loading render inputs or writing frames.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error("Failed to save image {path}: {source}")]
    Save {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;
