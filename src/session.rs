use std::collections::HashMap;
use std::fs::{read, rename, write};
use std::io::{ErrorKind, Result};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use log::{debug, info, warn};

use crate::configuration::Configuration;
use crate::errors;

// A tiny key/value persistence layer, the moral equivalent of a browser's local storage.
pub trait Storage: Send + Sync {
  fn get(&self, key: &str) -> Result<Option<String>>;
  fn set(&self, key: &str, value: &str) -> Result<()>;
  fn remove(&self, key: &str) -> Result<()>;
}

// Keeps every key in a single json object on disk. The file is re-read on every access so that
// separate processes observe each other's logins and logouts.
#[derive(Debug, Clone)]
pub struct FileStorage {
  path: PathBuf,
}

impl FileStorage {
  pub fn new<P: Into<PathBuf>>(path: P) -> Self {
    FileStorage { path: path.into() }
  }

  fn entries(&self) -> Result<HashMap<String, String>> {
    match read(&self.path) {
      Ok(bytes) if bytes.is_empty() => Ok(HashMap::new()),
      Ok(bytes) => serde_json::from_slice(&bytes).map_err(errors::humanize_error),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
      Err(e) => Err(e),
    }
  }

  fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
    let serialized = serde_json::to_vec(entries).map_err(errors::humanize_error)?;
    let mut staging = self.path.clone().into_os_string();
    staging.push(format!(".{}.tmp", uuid::Uuid::new_v4()));
    write(&staging, serialized)?;
    rename(&staging, &self.path)
  }
}

impl Storage for FileStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    self.entries().map(|mut entries| entries.remove(key))
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    let mut entries = self.entries()?;
    entries.insert(String::from(key), String::from(value));
    self.persist(&entries)
  }

  fn remove(&self, key: &str) -> Result<()> {
    let mut entries = self.entries()?;

    if entries.remove(key).is_none() {
      return Ok(());
    }

    self.persist(&entries)
  }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
  fn with_entries<F, T>(&self, apply: F) -> T
  where
    F: FnOnce(&mut HashMap<String, String>) -> T,
  {
    let mut entries = self
      .entries
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner());
    apply(&mut entries)
  }
}

impl Storage for MemoryStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    Ok(self.with_entries(|entries| entries.get(key).cloned()))
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    self.with_entries(|entries| entries.insert(String::from(key), String::from(value)));
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<()> {
    self.with_entries(|entries| entries.remove(key));
    Ok(())
  }
}

// The only way anything reads or writes the bearer token. Absent token == logged out.
#[derive(Clone)]
pub struct SessionStore {
  _storage: Arc<dyn Storage>,
  _key: String,
}

impl std::fmt::Debug for SessionStore {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "SessionStore<{}>", self._key)
  }
}

impl SessionStore {
  pub fn new<S>(storage: S, key: &str) -> Self
  where
    S: Storage + 'static,
  {
    SessionStore {
      _storage: Arc::new(storage),
      _key: String::from(key),
    }
  }

  pub fn open(configuration: &Configuration) -> Self {
    let settings = &configuration.session_store;
    info!("session store backed by '{}'", settings.path);
    SessionStore::new(FileStorage::new(&settings.path), &settings.key)
  }

  // An unreadable store is treated the same as an empty one; the user just logs in again.
  pub fn token(&self) -> Option<String> {
    match self._storage.get(&self._key) {
      Ok(token) => token.filter(|value| !value.is_empty()),
      Err(e) => {
        warn!("unable to read session - {}", e);
        None
      }
    }
  }

  pub fn require(&self) -> Result<String> {
    self.token().ok_or_else(errors::auth_required)
  }

  pub fn store(&self, token: &str) -> Result<()> {
    debug!("persisting session token");
    self._storage.set(&self._key, token)
  }

  pub fn clear(&self) {
    debug!("clearing session token");

    if let Err(e) = self._storage.remove(&self._key) {
      warn!("unable to clear session - {}", e);
    }
  }
}
