use serde::{Deserialize, Serialize};

// The record returned by `/me`. Only `slug` is required; anything the server sends beyond these
// fields is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
  #[serde(default)]
  pub email: Option<String>,
  pub slug: String,
  #[serde(default)]
  pub full_name: Option<String>,
}
