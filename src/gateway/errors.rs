use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}
