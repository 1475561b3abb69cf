use log::debug;
use std::io::Result;

use crate::authorization::landing_for_session;
use crate::constants::{LANDING_PATH, LOGIN_PATH};
use crate::interchange::session::Registration;
use crate::navigation::Navigation;
use crate::screens::{required, write_header, write_links, FormState, Link};
use crate::Context;

async fn attempt(context: &Context, registration: &Registration) -> Result<Navigation> {
  required("Full name", &registration.full_name)?;
  required("Email", &registration.email)?;
  required("Password", &registration.password)?;

  let payload = context.api().signup(registration).await?;
  context.session().store(&payload.token)?;
  debug!("account created, resolving user slug");
  landing_for_session(context).await
}

#[derive(Debug, Default)]
pub struct Signup {
  form: FormState,
}

impl Signup {
  pub fn form(&self) -> &FormState {
    &self.form
  }

  pub async fn submit(&mut self, context: &Context, registration: Registration) {
    if !self.form.begin() {
      return;
    }

    let mount = context.navigator().mount();
    let result = attempt(context, &registration).await;
    self.form.finish(context, &mount, result);
  }

  pub fn links(&self) -> Vec<Link> {
    vec![
      Link::new("Back", LANDING_PATH),
      Link::new("Log in", LOGIN_PATH),
    ]
  }
}

impl std::fmt::Display for Signup {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write_header(formatter)?;
    writeln!(formatter, "Create account")?;
    writeln!(formatter, "Start managing your store today.")?;
    writeln!(formatter, "  full name, email, password")?;
    write!(formatter, "{}", self.form)?;
    writeln!(formatter)?;
    write_links(formatter, &self.links())
  }
}
