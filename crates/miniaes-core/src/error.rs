//! Error types for the cipher crate.

use core::fmt;

use miniaes_codec::CodecError;

/// Errors surfaced by the cipher driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CipherError {
    /// The supplied key is not exactly 12 binary digits.
    InvalidKey {
        /// The rejected key string.
        key: String,
    },
    /// The codec rejected the input (non-hex ciphertext).
    Codec(CodecError),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidKey { key } => {
                write!(f, "key must be exactly 12 binary digits, got: {key:?}")
            }
            CipherError::Codec(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CipherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CipherError::Codec(err) => Some(err),
            CipherError::InvalidKey { .. } => None,
        }
    }
}

impl From<CodecError> for CipherError {
    fn from(err: CodecError) -> Self {
        CipherError::Codec(err)
    }
}
