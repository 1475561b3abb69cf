use log::debug;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::constants::LANDING_PATH;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Push,
  Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
  pub target: String,
  pub mode: Mode,
}

impl Navigation {
  pub fn push<S: Into<String>>(target: S) -> Self {
    Navigation {
      target: target.into(),
      mode: Mode::Push,
    }
  }

  pub fn replace<S: Into<String>>(target: S) -> Self {
    Navigation {
      target: target.into(),
      mode: Mode::Replace,
    }
  }
}

#[derive(Debug)]
struct History {
  entries: Vec<String>,
  generation: u64,
}

// The history stack. Clones share the same stack; every change of location bumps a generation
// counter so that screens can tell whether they are still the one on display.
#[derive(Debug, Clone)]
pub struct Navigator {
  _history: Arc<Mutex<History>>,
}

impl Default for Navigator {
  fn default() -> Self {
    Navigator::starting_at(LANDING_PATH)
  }
}

impl Navigator {
  pub fn starting_at(location: &str) -> Self {
    let history = History {
      entries: vec![String::from(location)],
      generation: 0,
    };

    Navigator {
      _history: Arc::new(Mutex::new(history)),
    }
  }

  fn history(&self) -> MutexGuard<'_, History> {
    self
      ._history
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  pub fn current(&self) -> String {
    self
      .history()
      .entries
      .last()
      .cloned()
      .unwrap_or_else(|| String::from(LANDING_PATH))
  }

  pub fn route(&self) -> Route {
    Route::parse(&self.current())
  }

  pub fn entries(&self) -> Vec<String> {
    self.history().entries.clone()
  }

  pub fn generation(&self) -> u64 {
    self.history().generation
  }

  pub fn push(&self, target: &str) {
    let mut history = self.history();
    debug!("navigation push '{}'", target);
    history.entries.push(String::from(target));
    history.generation += 1;
  }

  pub fn replace(&self, target: &str) {
    let mut history = self.history();
    debug!("navigation replace '{}'", target);
    history.entries.pop();
    history.entries.push(String::from(target));
    history.generation += 1;
  }

  pub fn navigate(&self, navigation: &Navigation) {
    match navigation.mode {
      Mode::Push => self.push(&navigation.target),
      Mode::Replace => self.replace(&navigation.target),
    }
  }

  // Returns the new location, or `None` when there is nothing to go back to.
  pub fn back(&self) -> Option<String> {
    let mut history = self.history();

    if history.entries.len() < 2 {
      return None;
    }

    history.entries.pop();
    history.generation += 1;
    history.entries.last().cloned()
  }

  pub fn mount(&self) -> Mount {
    Mount {
      _navigator: self.clone(),
      _generation: self.generation(),
    }
  }
}

// Taken by a screen when it mounts. Once the location changes the mount is stale, and anything
// that arrives for it afterwards should be dropped on the floor.
#[derive(Debug, Clone)]
pub struct Mount {
  _navigator: Navigator,
  _generation: u64,
}

impl Mount {
  pub fn is_current(&self) -> bool {
    self._navigator.generation() == self._generation
  }

  pub fn settle<T>(&self, value: T) -> Option<T> {
    if self.is_current() {
      return Some(value);
    }

    debug!("discarding result for stale mount {}", self._generation);
    None
  }
}

#[cfg(test)]
mod test {
  use super::{Navigation, Navigator};

  #[test]
  fn push_and_back() {
    let navigator = Navigator::default();
    navigator.push("/login");
    navigator.push("/jane");
    assert_eq!(navigator.current(), "/jane");
    assert_eq!(navigator.back(), Some(String::from("/login")));
    assert_eq!(navigator.back(), Some(String::from("/")));
    assert_eq!(navigator.back(), None);
  }

  #[test]
  fn replace_drops_stale_entry() {
    let navigator = Navigator::starting_at("/");
    navigator.navigate(&Navigation::push("/bob"));
    navigator.navigate(&Navigation::replace("/jane"));
    assert_eq!(navigator.entries(), vec!["/", "/jane"]);
    assert_eq!(navigator.back(), Some(String::from("/")));
  }

  #[test]
  fn clones_share_history() {
    let navigator = Navigator::default();
    let other = navigator.clone();
    other.push("/signup");
    assert_eq!(navigator.current(), "/signup");
  }

  #[test]
  fn mounts_go_stale() {
    let navigator = Navigator::starting_at("/jane");
    let mount = navigator.mount();
    assert!(mount.is_current());
    assert_eq!(mount.settle(1), Some(1));

    navigator.push("/login");
    assert!(!mount.is_current());
    assert_eq!(mount.settle(1), None);
  }
}
