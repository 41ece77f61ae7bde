use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
  #[error("request failed: {0}")]
  Transport(String),
  #[error("HTTP {0}")]
  Status(u16),
  #[error("failed to decode response: {0}")]
  Decode(String),
  #[error("failed to encode request body: {0}")]
  Encode(String)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
  #[error("missing #{0} element")]
  MissingElement(&'static str),
  #[error("dom operation failed: {0}")]
  Dom(String)
}
