use log::{debug, warn};
use std::io::Result;

use crate::authorization;
use crate::constants::LOGIN_PATH;
use crate::interchange::businesses::NewBusiness;
use crate::interchange::session::{Credentials, Registration};
use crate::navigation::{Mount, Navigation};
use crate::routes::Route;
use crate::{errors, Context};

pub mod add_business;
pub mod businesses;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod user_page;

pub use add_business::AddBusiness;
pub use businesses::{Businesses, Listing};
pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use signup::Signup;
pub use user_page::UserPage;

const BRAND: &'static str = "⬛ POS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
  pub label: String,
  pub target: String,
}

impl Link {
  pub fn new<L: Into<String>, T: Into<String>>(label: L, target: T) -> Self {
    Link {
      label: label.into(),
      target: target.into(),
    }
  }
}

impl std::fmt::Display for Link {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "[{}] {}", self.label, self.target)
  }
}

pub(crate) fn write_links(formatter: &mut std::fmt::Formatter, links: &[Link]) -> std::fmt::Result {
  for link in links {
    writeln!(formatter, "  {}", link)?;
  }
  Ok(())
}

pub(crate) fn write_header(formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
  writeln!(formatter, "{}", BRAND)?;
  writeln!(formatter)
}

pub(crate) fn required(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(errors::e(format!("{} is required", field)));
  }
  Ok(())
}

// The shared bits of every form: an inline error and a loading flag that blocks a second
// submission while one is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
  pub error: Option<String>,
  pub loading: bool,
}

impl FormState {
  pub fn begin(&mut self) -> bool {
    if self.loading {
      debug!("submission already in flight, ignoring");
      return false;
    }

    self.error = None;
    self.loading = true;
    true
  }

  // A missing session is never shown as an error, it is a trip to the login screen.
  pub fn finish(&mut self, context: &Context, mount: &Mount, result: Result<Navigation>) {
    let result = match mount.settle(result) {
      Some(result) => result,
      None => return,
    };

    self.loading = false;

    match result {
      Ok(navigation) => context.navigator().navigate(&navigation),
      Err(e) if errors::is_auth_required(&e) => context.navigator().push(LOGIN_PATH),
      Err(e) => self.error = Some(format!("{}", e)),
    }
  }
}

impl std::fmt::Display for FormState {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    if let Some(error) = &self.error {
      writeln!(formatter, "  ! {}", error)?;
    }

    if self.loading {
      writeln!(formatter, "  ...")?;
    }

    Ok(())
  }
}

// Things a user can do on a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  Follow(String),
  Login(Credentials),
  Signup(Registration),
  AddBusiness(NewBusiness),
  Back,
  Logout,
}

impl Action {
  pub fn name(&self) -> &'static str {
    match self {
      Action::Follow(_) => "follow",
      Action::Login(_) => "login",
      Action::Signup(_) => "signup",
      Action::AddBusiness(_) => "add business",
      Action::Back => "back",
      Action::Logout => "logout",
    }
  }
}

#[derive(Debug)]
pub enum Screen {
  Landing(Landing),
  Login(Login),
  Signup(Signup),
  User(UserPage),
  Businesses(Businesses),
  AddBusiness(AddBusiness),
  NotFound(NotFound),
}

impl Screen {
  pub fn for_route(route: Route) -> Self {
    match route {
      Route::Landing => Screen::Landing(Landing::default()),
      Route::Login => Screen::Login(Login::default()),
      Route::Signup => Screen::Signup(Signup::default()),
      Route::User { slug } => Screen::User(UserPage::new(&slug)),
      Route::Businesses { slug } => Screen::Businesses(Businesses::new(&slug)),
      Route::AddBusiness { slug } => Screen::AddBusiness(AddBusiness::new(&slug)),
      Route::NotFound(path) => Screen::NotFound(NotFound::new(&path)),
    }
  }

  pub async fn mount(&mut self, context: &Context) {
    match self {
      Screen::User(page) => page.mount(context).await,
      Screen::Businesses(page) => page.mount(context).await,
      Screen::AddBusiness(page) => page.mount(context).await,
      Screen::Landing(_) | Screen::Login(_) | Screen::Signup(_) | Screen::NotFound(_) => (),
    }
  }

  pub async fn dispatch(&mut self, context: &Context, action: Action) {
    match (self, action) {
      (_, Action::Logout) => authorization::logout(context),
      (_, Action::Follow(target)) => context.navigator().push(&target),
      (_, Action::Back) => {
        if context.navigator().back().is_none() {
          debug!("nothing to go back to");
        }
      }
      (Screen::Login(page), Action::Login(credentials)) => page.submit(context, credentials).await,
      (Screen::Signup(page), Action::Signup(registration)) => {
        page.submit(context, registration).await
      }
      (Screen::AddBusiness(page), Action::AddBusiness(business)) => {
        page.submit(context, business).await
      }
      (screen, action) => warn!("{} is not available on {}", action.name(), screen.name()),
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      Screen::Landing(_) => "landing",
      Screen::Login(_) => "login",
      Screen::Signup(_) => "signup",
      Screen::User(_) => "user",
      Screen::Businesses(_) => "businesses",
      Screen::AddBusiness(_) => "add business",
      Screen::NotFound(_) => "not found",
    }
  }

  pub fn links(&self) -> Vec<Link> {
    match self {
      Screen::Landing(page) => page.links(),
      Screen::Login(page) => page.links(),
      Screen::Signup(page) => page.links(),
      Screen::User(page) => page.links(),
      Screen::Businesses(page) => page.links(),
      Screen::AddBusiness(page) => page.links(),
      Screen::NotFound(page) => page.links(),
    }
  }

  pub fn error(&self) -> Option<&str> {
    match self {
      Screen::Login(page) => page.form().error.as_deref(),
      Screen::Signup(page) => page.form().error.as_deref(),
      Screen::AddBusiness(page) => page.error(),
      Screen::User(page) => page.error(),
      Screen::Businesses(page) => page.error(),
      Screen::Landing(_) | Screen::NotFound(_) => None,
    }
  }
}

impl std::fmt::Display for Screen {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Screen::Landing(page) => write!(formatter, "{}", page),
      Screen::Login(page) => write!(formatter, "{}", page),
      Screen::Signup(page) => write!(formatter, "{}", page),
      Screen::User(page) => write!(formatter, "{}", page),
      Screen::Businesses(page) => write!(formatter, "{}", page),
      Screen::AddBusiness(page) => write!(formatter, "{}", page),
      Screen::NotFound(page) => write!(formatter, "{}", page),
    }
  }
}
