use crate::constants::{ADD_SEGMENT, BUSINESSES_SEGMENT, LANDING_PATH, LOGIN_PATH, SIGNUP_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
  Landing,
  Login,
  Signup,
  User { slug: String },
  Businesses { slug: String },
  AddBusiness { slug: String },
  NotFound(String),
}

impl Route {
  // Static segments always win over `:slug`, so there is no user page at `/login`.
  pub fn parse(location: &str) -> Self {
    let path = location.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let segments = path
      .split('/')
      .filter(|segment| !segment.is_empty())
      .collect::<Vec<&str>>();

    match segments.as_slice() {
      [] => Route::Landing,
      ["login"] => Route::Login,
      ["signup"] => Route::Signup,
      [slug] => Route::User {
        slug: String::from(*slug),
      },
      [slug, businesses] if *businesses == BUSINESSES_SEGMENT => Route::Businesses {
        slug: String::from(*slug),
      },
      [slug, businesses, add] if *businesses == BUSINESSES_SEGMENT && *add == ADD_SEGMENT => {
        Route::AddBusiness {
          slug: String::from(*slug),
        }
      }
      _ => Route::NotFound(String::from(path)),
    }
  }

  pub fn slug(&self) -> Option<&str> {
    match self {
      Route::User { slug } | Route::Businesses { slug } | Route::AddBusiness { slug } => {
        Some(slug.as_str())
      }
      _ => None,
    }
  }

  // The same screen for a different user, e.g. `/bob/businesses` -> `/jane/businesses`.
  pub fn with_slug(&self, slug: &str) -> Self {
    let slug = String::from(slug);

    match self {
      Route::User { .. } => Route::User { slug },
      Route::Businesses { .. } => Route::Businesses { slug },
      Route::AddBusiness { .. } => Route::AddBusiness { slug },
      other => other.clone(),
    }
  }

  pub fn path(&self) -> String {
    match self {
      Route::Landing => String::from(LANDING_PATH),
      Route::Login => String::from(LOGIN_PATH),
      Route::Signup => String::from(SIGNUP_PATH),
      Route::User { slug } => format!("/{}", slug),
      Route::Businesses { slug } => format!("/{}/{}", slug, BUSINESSES_SEGMENT),
      Route::AddBusiness { slug } => format!("/{}/{}/{}", slug, BUSINESSES_SEGMENT, ADD_SEGMENT),
      Route::NotFound(path) => path.clone(),
    }
  }
}

impl std::fmt::Display for Route {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "{}", self.path())
  }
}

pub fn business_path(user_slug: &str, business_slug: &str) -> String {
  format!("/{}/{}/{}", user_slug, BUSINESSES_SEGMENT, business_slug)
}

#[cfg(test)]
mod test {
  use super::{business_path, Route};

  #[test]
  fn parse_static() {
    assert_eq!(Route::parse("/"), Route::Landing);
    assert_eq!(Route::parse(""), Route::Landing);
    assert_eq!(Route::parse("/login"), Route::Login);
    assert_eq!(Route::parse("/signup/"), Route::Signup);
  }

  #[test]
  fn parse_slug_routes() {
    assert_eq!(
      Route::parse("/jane"),
      Route::User {
        slug: String::from("jane")
      }
    );
    assert_eq!(
      Route::parse("/jane/businesses?page=2"),
      Route::Businesses {
        slug: String::from("jane")
      }
    );
    assert_eq!(
      Route::parse("/jane/businesses/add"),
      Route::AddBusiness {
        slug: String::from("jane")
      }
    );
  }

  #[test]
  fn parse_unknown() {
    assert_eq!(
      Route::parse("/jane/settings"),
      Route::NotFound(String::from("/jane/settings"))
    );
    assert_eq!(
      Route::parse("/jane/businesses/corner-cafe"),
      Route::NotFound(String::from("/jane/businesses/corner-cafe"))
    );
  }

  #[test]
  fn with_slug_keeps_suffix() {
    let route = Route::parse("/bob/businesses/add");
    assert_eq!(route.with_slug("jane").path(), "/jane/businesses/add");
    assert_eq!(Route::parse("/bob").with_slug("jane").path(), "/jane");
    assert_eq!(Route::Login.with_slug("jane"), Route::Login);
  }

  #[test]
  fn business_links() {
    assert_eq!(
      business_path("jane", "corner-cafe"),
      "/jane/businesses/corner-cafe"
    );
  }
}
