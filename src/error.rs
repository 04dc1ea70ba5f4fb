//! Host-level errors: failures that happen *around* the language (reading a
//! file, decoding its bytes) rather than *inside* it. Those stay
//! first-class `Value::Error`s produced by the evaluator; see
//! [`crate::value::Value::Error`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
