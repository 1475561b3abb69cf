use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Registration {
  pub full_name: String,
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Credentials {
  pub email: String,
  pub password: String,
}

// Both `/create_user` and `/login` answer with a token; signup also includes the new slug.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TokenPayload {
  pub token: String,
  #[serde(default)]
  pub slug: Option<String>,
}

impl std::fmt::Display for Credentials {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "Credentials<{}>", self.email)
  }
}

impl std::fmt::Display for Registration {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "Registration<{}>", self.email)
  }
}
