use log::{debug, warn};

use crate::constants::MAX_REDIRECTS;
use crate::screens::{Action, Screen};
use crate::Context;

// Resolves whatever location the navigator is on into a mounted screen, following redirects
// until a screen stops navigating.
pub struct App {
  _context: Context,
}

impl App {
  pub fn new(context: Context) -> Self {
    App { _context: context }
  }

  pub fn context(&self) -> &Context {
    &self._context
  }

  pub async fn settle(&self) -> Screen {
    let navigator = self._context.navigator();
    let mut hops = 0;

    loop {
      let location = navigator.current();
      let mut screen = Screen::for_route(navigator.route());
      debug!("mounting {} screen for '{}'", screen.name(), location);
      screen.mount(&self._context).await;

      if navigator.current() == location {
        return screen;
      }

      hops += 1;

      if hops >= MAX_REDIRECTS {
        warn!("gave up after {} redirects, last at '{}'", hops, location);
        return screen;
      }
    }
  }

  pub async fn open(&self, location: &str) -> Screen {
    if self._context.navigator().current() != location {
      self._context.navigator().push(location);
    }

    self.settle().await
  }

  // Runs an action against the screen on display. If it moved the user somewhere else, the new
  // location is mounted and returned instead.
  pub async fn dispatch(&self, mut screen: Screen, action: Action) -> Screen {
    let location = self._context.navigator().current();
    screen.dispatch(&self._context, action).await;

    if self._context.navigator().current() == location {
      return screen;
    }

    self.settle().await
  }
}
