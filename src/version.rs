const GITHUB_SHA: Option<&'static str> = option_env!("GITHUB_SHA");
const POSWEB_VERSION: Option<&'static str> = option_env!("POSWEB_VERSION");

pub fn version() -> String {
  POSWEB_VERSION.or(GITHUB_SHA).unwrap_or("dev").to_string()
}
