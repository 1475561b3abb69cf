extern crate http;

pub use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
pub use http::{Method, Request};
pub use isahc::AsyncBody;
pub use url::Url;

use std::io::Result;

use crate::errors;

const JSON: &'static str = "application/json";

pub fn bearer(token: &str) -> String {
  format!("Bearer {}", token)
}

// Builds a json request against `url`, attaching the bearer credential when a token is given.
pub fn json_request(
  method: Method,
  url: &Url,
  token: Option<&str>,
  body: Option<Vec<u8>>,
) -> Result<Request<AsyncBody>> {
  let mut builder = Request::builder()
    .method(method)
    .uri(url.as_str())
    .header(ACCEPT, JSON);

  if let Some(token) = token {
    builder = builder.header(AUTHORIZATION, bearer(token));
  }

  let body = match body {
    Some(bytes) => {
      builder = builder.header(CONTENT_TYPE, JSON);
      AsyncBody::from(bytes)
    }
    None => AsyncBody::empty(),
  };

  builder.body(body).map_err(errors::humanize_error)
}
