use crate::authority::Authority;
use crate::authorization::guard;
use crate::routes::Route;
use crate::screens::{write_header, write_links, Link};
use crate::Context;

#[derive(Debug)]
pub struct UserPage {
  route: Route,
  authority: Authority,
}

impl UserPage {
  pub fn new(slug: &str) -> Self {
    UserPage {
      route: Route::User {
        slug: String::from(slug),
      },
      authority: Authority::default(),
    }
  }

  pub fn authority(&self) -> &Authority {
    &self.authority
  }

  pub fn error(&self) -> Option<&str> {
    match &self.authority {
      Authority::Failed(message) => Some(message.as_str()),
      _ => None,
    }
  }

  pub async fn mount(&mut self, context: &Context) {
    let mount = context.navigator().mount();
    self.authority = Authority::Checking;

    if let Some(authority) = guard(context, &mount, &self.route).await {
      self.authority = authority;
    }
  }

  pub fn links(&self) -> Vec<Link> {
    match self.authority.user() {
      Some(user) => vec![Link::new(
        "View businesses",
        Route::Businesses {
          slug: user.slug.clone(),
        }
        .path(),
      )],
      None => Vec::new(),
    }
  }
}

impl std::fmt::Display for UserPage {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write_header(formatter)?;

    match &self.authority {
      Authority::Authorized { user, .. } => {
        writeln!(formatter, "Logged in as")?;
        let name = user.email.as_deref().or(user.full_name.as_deref());
        writeln!(formatter, "{}", name.unwrap_or(user.slug.as_str()))?;
        writeln!(formatter, "your space -> /{}", user.slug)?;
        writeln!(formatter)?;
        write_links(formatter, &self.links())
      }
      Authority::Failed(message) => writeln!(formatter, "! {}", message),
      Authority::Redirecting(navigation) => writeln!(formatter, "-> {}", navigation.target),
      Authority::Init | Authority::Checking => writeln!(formatter, "Loading..."),
    }
  }
}
