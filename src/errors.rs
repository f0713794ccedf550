use std::string::FromUtf8Error;

/// All error types that can occur when talking to WiZ bulbs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize data to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// A network socket operation failed while communicating with a bulb.
    #[error("socket {action} error: {err:?}")]
    Socket { action: String, err: std::io::Error },

    /// The UDP response from a bulb contained invalid UTF-8.
    #[error("utf8 decoding error: {0:?}")]
    Utf8Decode(FromUtf8Error),

    /// The bulb answered with an error object instead of a result.
    #[error("bulb replied with error {code}: {message}")]
    Bulb { code: i64, message: String },

    /// The requested scene name is not in the scene table.
    #[error("scene not found: {0}")]
    SceneNotFound(String),

    /// Failed to parse an [`crate::Rgb`] or wider color from a string.
    #[error("invalid color string: {0}")]
    InvalidColorString(String),
}

impl Error {
    /// Create a new socket error
    pub fn socket(action: &str, err: std::io::Error) -> Self {
        Error::Socket {
            action: action.to_string(),
            err,
        }
    }

    /// Create a new bulb error from the `error` object of a reply.
    pub fn bulb(code: i64, message: &str) -> Self {
        Error::Bulb {
            code,
            message: message.to_string(),
        }
    }
}
