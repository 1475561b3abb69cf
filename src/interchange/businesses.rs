use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Business {
  pub slug: String,
  #[serde(default, alias = "business_name")]
  pub name: Option<String>,
  #[serde(default, alias = "business_desc")]
  pub description: Option<String>,
  #[serde(default, alias = "business_logo")]
  pub logo: Option<String>,
  #[serde(default, alias = "business_banner")]
  pub banner: Option<String>,
}

impl Business {
  // The name column is nullable server side; unnamed businesses go by their slug.
  pub fn display_name(&self) -> &str {
    self
      .name
      .as_deref()
      .map(str::trim)
      .filter(|name| !name.is_empty())
      .unwrap_or(self.slug.as_str())
  }
}

// What the add business form collects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBusiness {
  pub name: String,
  pub description: Option<String>,
  pub logo_url: Option<String>,
}

// The `/create_business` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateBusinessPayload {
  pub business_name: String,
  pub business_desc: Option<String>,
  pub business_logo: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
  value
    .as_ref()
    .map(|inner| inner.trim())
    .filter(|inner| !inner.is_empty())
    .map(String::from)
}

impl From<&NewBusiness> for CreateBusinessPayload {
  fn from(business: &NewBusiness) -> Self {
    CreateBusinessPayload {
      business_name: business.name.clone(),
      business_desc: non_empty(&business.description),
      business_logo: non_empty(&business.logo_url),
    }
  }
}
