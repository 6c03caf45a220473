//! Error types for the editor

use jsongraph_document::CodecError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
