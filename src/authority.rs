use crate::interchange::users::User;
use crate::navigation::Navigation;

// Where a protected screen is in its session check. `Redirecting` and `Failed` are terminal for
// the mount; only `Authorized` may show protected content.
#[derive(Debug, Clone, PartialEq)]
pub enum Authority {
  Init,
  Checking,
  Authorized { token: String, user: User },
  Redirecting(Navigation),
  Failed(String),
}

impl Default for Authority {
  fn default() -> Self {
    Authority::Init
  }
}

impl Authority {
  pub fn user(&self) -> Option<&User> {
    match self {
      Authority::Authorized { user, .. } => Some(user),
      _ => None,
    }
  }

  pub fn token(&self) -> Option<&str> {
    match self {
      Authority::Authorized { token, .. } => Some(token.as_str()),
      _ => None,
    }
  }
}
