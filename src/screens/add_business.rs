use log::{info, warn};
use std::io::Result;

use crate::authority::Authority;
use crate::authorization::guard;
use crate::interchange::businesses::NewBusiness;
use crate::navigation::Navigation;
use crate::routes::Route;
use crate::screens::{required, write_header, write_links, FormState, Link};
use crate::Context;

async fn create(context: &Context, slug: &str, business: &NewBusiness) -> Result<Navigation> {
  required("Business name", &business.name)?;

  let token = context.session().require()?;
  let created = context.api().create_business(&token, business).await?;
  info!("created business '{}'", created.slug);

  let route = Route::Businesses {
    slug: String::from(slug),
  };
  Ok(Navigation::push(route.path()))
}

#[derive(Debug)]
pub struct AddBusiness {
  route: Route,
  authority: Authority,
  form: FormState,
}

impl AddBusiness {
  pub fn new(slug: &str) -> Self {
    AddBusiness {
      route: Route::AddBusiness {
        slug: String::from(slug),
      },
      authority: Authority::default(),
      form: FormState::default(),
    }
  }

  pub fn authority(&self) -> &Authority {
    &self.authority
  }

  pub fn form(&self) -> &FormState {
    &self.form
  }

  pub fn error(&self) -> Option<&str> {
    match &self.authority {
      Authority::Failed(message) => Some(message.as_str()),
      _ => self.form.error.as_deref(),
    }
  }

  pub async fn mount(&mut self, context: &Context) {
    let mount = context.navigator().mount();
    self.authority = Authority::Checking;

    if let Some(authority) = guard(context, &mount, &self.route).await {
      self.authority = authority;
    }
  }

  // The form only exists once the session check passed.
  pub async fn submit(&mut self, context: &Context, business: NewBusiness) {
    let slug = match self.authority.user() {
      Some(user) => user.slug.clone(),
      None => {
        warn!("add business submitted before the session was confirmed, ignoring");
        return;
      }
    };

    if !self.form.begin() {
      return;
    }

    let mount = context.navigator().mount();
    let result = create(context, &slug, &business).await;
    self.form.finish(context, &mount, result);
  }

  pub fn links(&self) -> Vec<Link> {
    match self.authority.user() {
      Some(user) => vec![Link::new(
        "Back",
        Route::Businesses {
          slug: user.slug.clone(),
        }
        .path(),
      )],
      None => Vec::new(),
    }
  }
}

impl std::fmt::Display for AddBusiness {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write_header(formatter)?;

    match &self.authority {
      Authority::Authorized { .. } => {
        writeln!(formatter, "New business")?;
        writeln!(formatter, "Add a business")?;
        writeln!(formatter, "  business name *, description, logo url")?;
        write!(formatter, "{}", self.form)?;
        writeln!(formatter)?;
        write_links(formatter, &self.links())
      }
      Authority::Failed(message) => writeln!(formatter, "! {}", message),
      Authority::Redirecting(navigation) => writeln!(formatter, "-> {}", navigation.target),
      Authority::Init | Authority::Checking => writeln!(formatter, "Loading..."),
    }
  }
}
