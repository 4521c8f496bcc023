use sm83_isa::OpcodeSpace;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("invalid JSON metadata: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML metadata: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{space} key `{key}` is not an opcode byte")]
    InvalidKey { space: OpcodeSpace, key: String },

    #[error("{space} opcode {byte:#04x} is listed more than once")]
    DuplicateKey { space: OpcodeSpace, byte: u8 },

    #[error("unsupported metadata format `{0}` (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, MetadataError>;
