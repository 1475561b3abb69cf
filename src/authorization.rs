use log::{debug, info, warn};
use std::io::Result;

use crate::authority::Authority;
use crate::constants::LOGIN_PATH;
use crate::interchange::users::User;
use crate::navigation::{Mount, Navigation};
use crate::routes::Route;
use crate::{errors, Context};

// Trust the server's slug over whatever is in the url. A mismatch replaces the history entry so
// going back never lands on the stale slug.
pub fn reconcile(route: &Route, token: String, user: User) -> Authority {
  match route.slug() {
    Some(slug) if slug == user.slug => Authority::Authorized { token, user },
    _ => {
      let corrected = route.with_slug(&user.slug);
      info!("slug mismatch on '{}', correcting to '{}'", route, corrected);
      Authority::Redirecting(Navigation::replace(corrected.path()))
    }
  }
}

// The check every protected screen runs when it mounts: no token means a silent trip to the
// login screen without touching the network, otherwise exactly one `/me` request decides.
pub async fn authorize(context: &Context, route: &Route) -> Authority {
  let token = match context.session().require() {
    Ok(token) => token,
    Err(e) if errors::is_auth_required(&e) => {
      debug!("no session for '{}', sending to login", route);
      return Authority::Redirecting(Navigation::push(LOGIN_PATH));
    }
    Err(e) => return Authority::Failed(format!("{}", e)),
  };

  debug!("checking session for '{}'", route);

  match context.api().current_user(&token).await {
    Ok(user) => reconcile(route, token, user),
    Err(e) => {
      warn!("session check for '{}' failed - {}", route, e);
      Authority::Failed(format!("{}", e))
    }
  }
}

// Runs `authorize` for a mounted screen and carries out any redirect it asks for. Returns `None`
// when the location changed while the check was in flight.
pub async fn guard(context: &Context, mount: &Mount, route: &Route) -> Option<Authority> {
  let authority = authorize(context, route).await;
  let authority = mount.settle(authority)?;

  if let Authority::Redirecting(navigation) = &authority {
    context.navigator().navigate(navigation);
  }

  Some(authority)
}

// Used after a login or signup has stored a fresh token: ask the server who we are and land on
// that user's page.
pub async fn landing_for_session(context: &Context) -> Result<Navigation> {
  let token = context.session().require()?;
  let user = context.api().current_user(&token).await?;
  let route = Route::User { slug: user.slug };
  Ok(Navigation::replace(route.path()))
}

// Local only. Never talks to the server and cannot fail.
pub fn logout(context: &Context) {
  info!("logging out");
  context.session().clear();
  context.navigator().push(LOGIN_PATH);
}
