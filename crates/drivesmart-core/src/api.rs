use std::rc::Rc;

use drivesmart_shared::HttpMethod;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

pub const JSON_CONTENT_TYPE: &str =
  "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
  pub endpoint: String,
  pub method:   HttpMethod,
  pub body:     Option<String>
}

impl ApiRequest {
  pub fn get(endpoint: &str) -> Self {
    Self {
      endpoint: endpoint.to_string(),
      method:   HttpMethod::Get,
      body:     None
    }
  }

  pub fn with_json<B>(
    endpoint: &str,
    method: HttpMethod,
    data: Option<&B>
  ) -> Result<Self, ApiError>
  where
    B: Serialize + ?Sized
  {
    let body = data
      .map(serde_json::to_string)
      .transpose()
      .map_err(|e| {
        ApiError::Encode(e.to_string())
      })?;

    Ok(Self {
      endpoint: endpoint.to_string(),
      method,
      body
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
  pub status: u16,
  pub body:   String
}

impl HttpResponse {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// Sends JSON requests. Every request
/// carries `Content-Type:
/// application/json`.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
  async fn send(
    &self,
    request: &ApiRequest
  ) -> Result<HttpResponse, ApiError>;
}

impl<T> HttpTransport for Rc<T>
where
  T: HttpTransport + ?Sized
{
  async fn send(
    &self,
    request: &ApiRequest
  ) -> Result<HttpResponse, ApiError> {
    (**self).send(request).await
  }
}

/// Sends `request` and decodes a JSON body.
/// A success status with an empty body is
/// a decode error.
pub async fn fetch_json<H, T>(
  http: &H,
  request: &ApiRequest
) -> Result<T, ApiError>
where
  H: HttpTransport + ?Sized,
  T: DeserializeOwned
{
  debug!(
    method = %request.method,
    endpoint = %request.endpoint,
    "sending api request"
  );
  let response = http.send(request).await?;

  if !response.is_success() {
    return Err(ApiError::Status(
      response.status
    ));
  }

  serde_json::from_str(&response.body)
    .map_err(|e| ApiError::Decode(e.to_string()))
}
