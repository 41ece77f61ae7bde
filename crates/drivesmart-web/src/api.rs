use drivesmart_core::api::JSON_CONTENT_TYPE;
use drivesmart_core::{
  ApiError,
  ApiRequest,
  HttpResponse,
  HttpTransport
};
use drivesmart_shared::HttpMethod;
use gloo::net::http::{
  Method,
  RequestBuilder
};

/// `fetch` transport for same-origin API
/// calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
  async fn send(
    &self,
    request: &ApiRequest
  ) -> Result<HttpResponse, ApiError> {
    let builder =
      RequestBuilder::new(&request.endpoint)
        .method(method(request.method))
        .header(
          "Content-Type",
          JSON_CONTENT_TYPE
        );
    let outgoing = match &request.body {
      | Some(body) => builder.body(body.as_str()),
      | None => builder.build()
    }
    .map_err(transport_error)?;

    let response = outgoing
      .send()
      .await
      .map_err(transport_error)?;
    let status = response.status();
    let body = response
      .text()
      .await
      .map_err(transport_error)?;

    tracing::debug!(
      endpoint = %request.endpoint,
      status,
      bytes = body.len(),
      "fetch completed"
    );
    Ok(HttpResponse { status, body })
  }
}

fn method(method: HttpMethod) -> Method {
  match method {
    | HttpMethod::Get => Method::GET,
    | HttpMethod::Post => Method::POST,
    | HttpMethod::Put => Method::PUT,
    | HttpMethod::Patch => Method::PATCH,
    | HttpMethod::Delete => Method::DELETE
  }
}

fn transport_error(
  error: gloo::net::Error
) -> ApiError {
  ApiError::Transport(error.to_string())
}
