use std::io::Result;

use crate::{errors, Api, Configuration, Navigator, SessionStore};

// Everything a screen is allowed to touch. There is no ambient state; screens only see the
// session, the api and the navigator through here.
pub struct Context {
  _session: SessionStore,
  _api: Api,
  _navigator: Navigator,
}

impl Context {
  pub fn builder() -> ContextBuilder {
    ContextBuilder::default()
  }

  pub fn session(&self) -> &SessionStore {
    &self._session
  }

  pub fn api(&self) -> &Api {
    &self._api
  }

  pub fn navigator(&self) -> &Navigator {
    &self._navigator
  }
}

impl std::fmt::Debug for Context {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(
      formatter,
      "Context<{:?} @ {}>",
      self._api,
      self._navigator.current()
    )
  }
}

#[derive(Default)]
pub struct ContextBuilder {
  _session: Option<SessionStore>,
  _navigator: Option<Navigator>,
  _config: Option<Configuration>,
}

impl ContextBuilder {
  pub fn configuration(self, config: &Configuration) -> Self {
    ContextBuilder {
      _config: Some(config.clone()),
      ..self
    }
  }

  pub fn session(self, session: SessionStore) -> Self {
    ContextBuilder {
      _session: Some(session),
      ..self
    }
  }

  pub fn navigator(self, navigator: Navigator) -> Self {
    ContextBuilder {
      _navigator: Some(navigator),
      ..self
    }
  }

  // Without an explicit session the file backed store named in the configuration is used.
  pub fn build(self) -> Result<Context> {
    let config = self
      ._config
      .ok_or_else(|| errors::e("missing configuration for context"))?;

    let _api = Api::open(&config)?;
    let _session = self
      ._session
      .unwrap_or_else(|| SessionStore::open(&config));
    let _navigator = self._navigator.unwrap_or_default();

    Ok(Context {
      _session,
      _api,
      _navigator,
    })
  }
}


#[cfg(test)]
mod test {
  use super::Context;

  #[test]
  fn missing_configuration() {
    assert!(Context::builder().build().is_err());
  }

  #[test]
  fn defaults_to_landing() {
    let context = super::test_helpers::context_at("/", None);
    assert_eq!(context.navigator().current(), "/");
    assert_eq!(context.session().token(), None);
  }
}
