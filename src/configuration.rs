extern crate serde;

use log::warn;
use serde::Deserialize;
use std::env::var_os;
use std::fs::read;
use std::io::{Error, ErrorKind, Result};
use std::str::FromStr;
use url::Url;

use crate::constants::{
  API_URL_ENV, DEFAULT_API_URL, DEFAULT_SESSION_FILE, DEFAULT_SESSION_KEY, SESSION_FILE_ENV,
};

fn env_or(name: &str, fallback: &str) -> String {
  var_os(name)
    .and_then(|value| value.into_string().ok())
    .filter(|value| !value.is_empty())
    .unwrap_or_else(|| String::from(fallback))
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Configuration {
  #[serde(default)]
  pub api: ApiConfiguration,

  #[serde(default)]
  pub session_store: SessionStoreConfiguration,
}

impl Configuration {
  pub fn load(path: &str) -> Result<Self> {
    let source = String::from_utf8(read(path)?).or(Err(Error::from(ErrorKind::InvalidData)))?;

    serde_json::from_str::<Configuration>(source.as_str()).map_err(|e| {
      warn!("unable to parse '{}': {:?}", path, e);
      Error::from(ErrorKind::InvalidData)
    })
  }

  pub fn api_url(&self) -> Result<Url> {
    let mut url = self
      .api
      .base_url
      .parse::<Url>()
      .map_err(|e| Error::new(ErrorKind::InvalidInput, e))?;

    // Endpoints are joined relative to the base, which needs a trailing slash to keep any prefix.
    if !url.path().ends_with('/') {
      let path = format!("{}/", url.path());
      url.set_path(&path);
    }

    Ok(url)
  }
}

impl FromStr for Configuration {
  type Err = Error;

  fn from_str(source: &str) -> std::result::Result<Self, Self::Err> {
    Configuration::load(source)
  }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfiguration {
  #[serde(default = "default_api_url")]
  pub base_url: String,
}

fn default_api_url() -> String {
  env_or(API_URL_ENV, DEFAULT_API_URL)
}

impl Default for ApiConfiguration {
  fn default() -> Self {
    ApiConfiguration {
      base_url: default_api_url(),
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SessionStoreConfiguration {
  #[serde(default = "default_session_file")]
  pub path: String,

  #[serde(default = "default_session_key")]
  pub key: String,
}

fn default_session_file() -> String {
  env_or(SESSION_FILE_ENV, DEFAULT_SESSION_FILE)
}

fn default_session_key() -> String {
  String::from(DEFAULT_SESSION_KEY)
}

impl Default for SessionStoreConfiguration {
  fn default() -> Self {
    SessionStoreConfiguration {
      path: default_session_file(),
      key: default_session_key(),
    }
  }
}
