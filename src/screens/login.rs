use log::debug;
use std::io::Result;

use crate::authorization::landing_for_session;
use crate::constants::SIGNUP_PATH;
use crate::interchange::session::Credentials;
use crate::navigation::Navigation;
use crate::screens::{required, write_header, write_links, FormState, Link};
use crate::Context;

async fn attempt(context: &Context, credentials: &Credentials) -> Result<Navigation> {
  required("Email", &credentials.email)?;
  required("Password", &credentials.password)?;

  let payload = context.api().login(credentials).await?;
  context.session().store(&payload.token)?;
  debug!("login succeeded, resolving user slug");
  landing_for_session(context).await
}

#[derive(Debug, Default)]
pub struct Login {
  form: FormState,
}

impl Login {
  pub fn form(&self) -> &FormState {
    &self.form
  }

  pub async fn submit(&mut self, context: &Context, credentials: Credentials) {
    if !self.form.begin() {
      return;
    }

    let mount = context.navigator().mount();
    let result = attempt(context, &credentials).await;
    self.form.finish(context, &mount, result);
  }

  pub fn links(&self) -> Vec<Link> {
    vec![Link::new("Sign up", SIGNUP_PATH)]
  }
}

impl std::fmt::Display for Login {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write_header(formatter)?;
    writeln!(formatter, "Log in")?;
    writeln!(formatter, "  email, password")?;
    write!(formatter, "{}", self.form)?;
    writeln!(formatter)?;
    writeln!(formatter, "Don't have an account?")?;
    write_links(formatter, &self.links())
  }
}

#[cfg(test)]
mod test {
  use super::Login;
  use crate::context::test_helpers::context_at;
  use crate::interchange::session::Credentials;
  use async_std::task::block_on;
  use mockito::mock;

  fn credentials(password: &str) -> Credentials {
    Credentials {
      email: String::from("jane@example.com"),
      password: String::from(password),
    }
  }

  #[test]
  fn login_lands_on_user_page() {
    let login = mock("POST", "/login")
      .with_status(200)
      .with_body(r#"{"token":"t-1"}"#)
      .create();
    let me = mock("GET", "/me")
      .match_header("authorization", "Bearer t-1")
      .with_status(200)
      .with_body(r#"{"email":"jane@example.com","slug":"jane"}"#)
      .create();

    let context = context_at("/", None);
    context.navigator().push("/login");
    let mut page = Login::default();
    block_on(page.submit(&context, credentials("hunter2")));

    assert_eq!(context.session().token(), Some(String::from("t-1")));
    assert_eq!(context.navigator().entries(), vec!["/", "/jane"]);
    assert_eq!(page.form().error, None);
    assert!(!page.form().loading);
    login.assert();
    me.assert();
  }

  #[test]
  fn login_failure_stays() {
    let login = mock("POST", "/login")
      .with_status(401)
      .with_body(r#"{"detail":"Incorrect email or password"}"#)
      .create();

    let context = context_at("/login", None);
    let mut page = Login::default();
    block_on(page.submit(&context, credentials("nope")));

    assert_eq!(
      page.form().error,
      Some(String::from("Incorrect email or password"))
    );
    assert_eq!(context.session().token(), None);
    assert_eq!(context.navigator().current(), "/login");
    login.assert();
  }

  #[test]
  fn missing_password_sends_nothing() {
    let login = mock("POST", "/login").expect(0).create();
    let context = context_at("/login", None);
    let mut page = Login::default();
    block_on(page.submit(&context, credentials("")));

    assert_eq!(page.form().error, Some(String::from("Password is required")));
    login.assert();
  }
}
