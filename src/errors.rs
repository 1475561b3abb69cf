use std::io::{Error, ErrorKind};

pub fn humanize_error<E: std::error::Error>(e: E) -> Error {
  Error::new(ErrorKind::Other, format!("{}", e))
}

pub fn e<S: std::fmt::Display>(message: S) -> Error {
  Error::new(ErrorKind::Other, format!("{}", message))
}

// Raised when a screen needs a session but the store has no token. Callers are expected to turn
// this into a redirect to the login screen rather than showing it.
pub fn auth_required() -> Error {
  Error::new(ErrorKind::PermissionDenied, "authentication required")
}

pub fn is_auth_required(error: &Error) -> bool {
  error.kind() == ErrorKind::PermissionDenied
}

#[cfg(test)]
mod test {
  use super::{auth_required, e, is_auth_required};

  #[test]
  fn messages_are_preserved() {
    let error = e("name required");
    assert_eq!(format!("{}", error), "name required");
    assert!(!is_auth_required(&error));
  }

  #[test]
  fn auth_required_is_detectable() {
    assert!(is_auth_required(&auth_required()));
  }
}
