use crate::constants::LANDING_PATH;
use crate::screens::{write_header, write_links, Link};

#[derive(Debug)]
pub struct NotFound {
  path: String,
}

impl NotFound {
  pub fn new(path: &str) -> Self {
    NotFound {
      path: String::from(path),
    }
  }

  pub fn links(&self) -> Vec<Link> {
    vec![Link::new("Home", LANDING_PATH)]
  }
}

impl std::fmt::Display for NotFound {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write_header(formatter)?;
    writeln!(formatter, "Nothing lives at {}", self.path)?;
    writeln!(formatter)?;
    write_links(formatter, &self.links())
  }
}
