use crate::constants::{LOGIN_PATH, SIGNUP_PATH};
use crate::screens::{write_header, write_links, Link};

#[derive(Debug, Default)]
pub struct Landing;

impl Landing {
  pub fn links(&self) -> Vec<Link> {
    vec![
      Link::new("Log in", LOGIN_PATH),
      Link::new("Sign up", SIGNUP_PATH),
    ]
  }
}

impl std::fmt::Display for Landing {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write_header(formatter)?;
    writeln!(formatter, "Point of Sale, reinvented.")?;
    writeln!(formatter, "Run your business. Not your software.")?;
    writeln!(formatter)?;
    write_links(formatter, &self.links())
  }
}
