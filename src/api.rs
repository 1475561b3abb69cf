use isahc::{AsyncReadResponseExt, HttpClient};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Result;

use crate::configuration::Configuration;
use crate::constants::{
  BUSINESSES_ENDPOINT, CREATE_BUSINESS_ENDPOINT, CREATE_BUSINESS_FAILED, FETCH_BUSINESSES_FAILED,
  FETCH_USER_FAILED, LOGIN_ENDPOINT, LOGIN_FAILED, ME_ENDPOINT, SIGNUP_ENDPOINT, SIGNUP_FAILED,
};
use crate::errors;
use crate::http::{json_request, Method, Url};
use crate::interchange::businesses::{Business, CreateBusinessPayload, NewBusiness};
use crate::interchange::errors::detail;
use crate::interchange::session::{Credentials, Registration, TokenPayload};
use crate::interchange::users::User;

// Every call here sends exactly one request and never retries. Failures always carry a message
// that is fit to show the user: the server's `detail` when it sent one, a fixed fallback
// otherwise.
pub struct Api {
  _client: HttpClient,
  _base: Url,
}

impl std::fmt::Debug for Api {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "Api<{}>", self._base)
  }
}

impl Api {
  pub fn open(configuration: &Configuration) -> Result<Self> {
    let base = configuration.api_url()?;
    let client = HttpClient::new().map_err(errors::humanize_error)?;
    info!("api client ready for '{}'", base);
    Ok(Api {
      _client: client,
      _base: base,
    })
  }

  fn endpoint(&self, path: &str) -> Result<Url> {
    self._base.join(path).map_err(errors::humanize_error)
  }

  async fn send<B, T>(
    &self,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<&B>,
    fallback: &str,
  ) -> Result<T>
  where
    B: Serialize,
    T: DeserializeOwned,
  {
    let url = self.endpoint(path)?;
    let bytes = match body {
      Some(payload) => Some(serde_json::to_vec(payload).map_err(errors::humanize_error)?),
      None => None,
    };
    let request = json_request(method.clone(), &url, token, bytes)?;

    debug!("sending {} {}", method, url);

    let mut response = match self._client.send_async(request).await {
      Ok(response) => response,
      Err(e) => {
        warn!("request to '{}' failed - {}", url, e);
        return Err(errors::e(fallback));
      }
    };

    let status = response.status();
    let text = response.text().await.unwrap_or_else(|e| {
      warn!("unable to read response body from '{}' - {}", url, e);
      String::new()
    });

    if !status.is_success() {
      info!("{} {} responded with {}", method, url, status);
      return Err(errors::e(detail(&text).unwrap_or_else(|| fallback.to_string())));
    }

    serde_json::from_str::<T>(&text).map_err(|e| {
      warn!("unable to parse response body from '{}' - {}", url, e);
      errors::e(fallback)
    })
  }

  pub async fn signup(&self, registration: &Registration) -> Result<TokenPayload> {
    debug!("creating account for {}", registration);
    self
      .send(
        Method::POST,
        SIGNUP_ENDPOINT,
        None,
        Some(registration),
        SIGNUP_FAILED,
      )
      .await
  }

  pub async fn login(&self, credentials: &Credentials) -> Result<TokenPayload> {
    debug!("logging in with {}", credentials);
    self
      .send(
        Method::POST,
        LOGIN_ENDPOINT,
        None,
        Some(credentials),
        LOGIN_FAILED,
      )
      .await
  }

  pub async fn current_user(&self, token: &str) -> Result<User> {
    self
      .send::<(), _>(Method::GET, ME_ENDPOINT, Some(token), None, FETCH_USER_FAILED)
      .await
  }

  pub async fn businesses(&self, token: &str) -> Result<Vec<Business>> {
    self
      .send::<(), _>(
        Method::GET,
        BUSINESSES_ENDPOINT,
        Some(token),
        None,
        FETCH_BUSINESSES_FAILED,
      )
      .await
  }

  pub async fn create_business(&self, token: &str, business: &NewBusiness) -> Result<Business> {
    let payload = CreateBusinessPayload::from(business);
    self
      .send(
        Method::POST,
        CREATE_BUSINESS_ENDPOINT,
        Some(token),
        Some(&payload),
        CREATE_BUSINESS_FAILED,
      )
      .await
  }
}

#[cfg(test)]
mod test {
  use super::Api;
  use crate::configuration::test_helpers::for_server;
  use crate::interchange::businesses::NewBusiness;
  use crate::interchange::session::{Credentials, Registration};
  use async_std::task::block_on;
  use mockito::{mock, server_url, Matcher};
  use serde_json::json;

  fn api() -> Api {
    Api::open(&for_server(&server_url())).expect("unable to open api")
  }

  #[test]
  fn current_user_sends_bearer() {
    let me = mock("GET", "/me")
      .match_header("authorization", "Bearer abc")
      .with_status(200)
      .with_header("content-type", "application/json")
      .with_body(r#"{"email":"a@b.com","slug":"jane"}"#)
      .create();

    let user = block_on(api().current_user("abc")).expect("unable to load user");
    assert_eq!(user.slug, "jane");
    assert_eq!(user.email, Some(String::from("a@b.com")));
    me.assert();
  }

  #[test]
  fn current_user_detail() {
    let me = mock("GET", "/me")
      .with_status(401)
      .with_body(r#"{"detail":"Invalid token"}"#)
      .create();

    let error = block_on(api().current_user("abc")).expect_err("should fail");
    assert_eq!(format!("{}", error), "Invalid token");
    me.assert();
  }

  #[test]
  fn current_user_fallback() {
    let me = mock("GET", "/me").with_status(502).with_body("oops").create();

    let error = block_on(api().current_user("abc")).expect_err("should fail");
    assert_eq!(format!("{}", error), "Failed to fetch user");
    me.assert();
  }

  #[test]
  fn transport_failure_uses_fallback() {
    let api = Api::open(&for_server("http://127.0.0.1:9")).expect("unable to open api");
    let error = block_on(api.businesses("abc")).expect_err("should fail");
    assert_eq!(format!("{}", error), "Failed to fetch businesses");
  }

  #[test]
  fn signup_body() {
    let create = mock("POST", "/create_user")
      .match_body(Matcher::Json(json!({
        "full_name": "Jane Doe",
        "email": "jane@example.com",
        "password": "hunter2",
      })))
      .with_status(200)
      .with_body(r#"{"token":"t-1","slug":"jane-doe"}"#)
      .create();

    let registration = Registration {
      full_name: String::from("Jane Doe"),
      email: String::from("jane@example.com"),
      password: String::from("hunter2"),
    };
    let payload = block_on(api().signup(&registration)).expect("unable to signup");
    assert_eq!(payload.token, "t-1");
    assert_eq!(payload.slug, Some(String::from("jane-doe")));
    create.assert();
  }

  #[test]
  fn login_is_anonymous() {
    let login = mock("POST", "/login")
      .match_header("authorization", Matcher::Missing)
      .match_body(Matcher::Json(json!({
        "email": "jane@example.com",
        "password": "hunter2",
      })))
      .with_status(200)
      .with_body(r#"{"token":"t-2"}"#)
      .create();

    let credentials = Credentials {
      email: String::from("jane@example.com"),
      password: String::from("hunter2"),
    };
    let payload = block_on(api().login(&credentials)).expect("unable to login");
    assert_eq!(payload.token, "t-2");
    assert_eq!(payload.slug, None);
    login.assert();
  }

  #[test]
  fn login_failure_detail() {
    let login = mock("POST", "/login")
      .with_status(400)
      .with_body(r#"{"detail":"Invalid credentials"}"#)
      .create();

    let credentials = Credentials {
      email: String::from("jane@example.com"),
      password: String::from("nope"),
    };
    let error = block_on(api().login(&credentials)).expect_err("should fail");
    assert_eq!(format!("{}", error), "Invalid credentials");
    login.assert();
  }

  #[test]
  fn list_businesses() {
    let list = mock("GET", "/businesses")
      .match_header("authorization", "Bearer abc")
      .with_status(200)
      .with_body(r#"[{"slug":"corner-cafe","name":"Corner Cafe","description":"coffee"}]"#)
      .create();

    let businesses = block_on(api().businesses("abc")).expect("unable to list");
    assert_eq!(businesses.len(), 1);
    assert_eq!(businesses[0].slug, "corner-cafe");
    assert_eq!(businesses[0].description, Some(String::from("coffee")));
    list.assert();
  }

  #[test]
  fn create_business_payload() {
    let create = mock("POST", "/create_business")
      .match_header("authorization", "Bearer abc")
      .match_body(Matcher::Json(json!({
        "business_name": "Corner Cafe",
        "business_desc": "coffee",
        "business_logo": null,
      })))
      .with_status(200)
      .with_body(r#"{"slug":"corner-cafe","business_name":"Corner Cafe"}"#)
      .create();

    let business = NewBusiness {
      name: String::from("Corner Cafe"),
      description: Some(String::from("coffee")),
      logo_url: None,
    };
    let created = block_on(api().create_business("abc", &business)).expect("unable to create");
    assert_eq!(created.slug, "corner-cafe");
    create.assert();
  }
}
