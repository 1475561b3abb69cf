use log::{debug, warn};

use crate::authority::Authority;
use crate::authorization::guard;
use crate::interchange::businesses::Business;
use crate::routes::{business_path, Route};
use crate::screens::{write_header, write_links, Link};
use crate::Context;

#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
  Loading,
  Loaded(Vec<Business>),
  Failed(String),
}

#[derive(Debug)]
pub struct Businesses {
  route: Route,
  authority: Authority,
  listing: Listing,
}

impl Businesses {
  pub fn new(slug: &str) -> Self {
    Businesses {
      route: Route::Businesses {
        slug: String::from(slug),
      },
      authority: Authority::default(),
      listing: Listing::Loading,
    }
  }

  pub fn authority(&self) -> &Authority {
    &self.authority
  }

  pub fn listing(&self) -> &Listing {
    &self.listing
  }

  pub fn error(&self) -> Option<&str> {
    match (&self.authority, &self.listing) {
      (Authority::Failed(message), _) => Some(message.as_str()),
      (Authority::Authorized { .. }, Listing::Failed(message)) => Some(message.as_str()),
      _ => None,
    }
  }

  pub async fn mount(&mut self, context: &Context) {
    let mount = context.navigator().mount();
    self.authority = Authority::Checking;
    self.listing = Listing::Loading;

    let authority = match guard(context, &mount, &self.route).await {
      Some(authority) => authority,
      None => return,
    };

    let token = authority.token().map(String::from);
    self.authority = authority;

    let token = match token {
      Some(token) => token,
      None => return,
    };

    let listing = match context.api().businesses(&token).await {
      Ok(businesses) => {
        debug!("loaded {} businesses", businesses.len());
        Listing::Loaded(businesses)
      }
      Err(e) => {
        warn!("unable to list businesses - {}", e);
        Listing::Failed(format!("{}", e))
      }
    };

    if let Some(listing) = mount.settle(listing) {
      self.listing = listing;
    }
  }

  pub fn links(&self) -> Vec<Link> {
    let slug = match self.authority.user() {
      Some(user) => user.slug.clone(),
      None => return Vec::new(),
    };

    let mut links = vec![
      Link::new("Back", Route::User { slug: slug.clone() }.path()),
      Link::new("+ Add business", Route::AddBusiness { slug: slug.clone() }.path()),
    ];

    if let Listing::Loaded(businesses) = &self.listing {
      links.extend(
        businesses
          .iter()
          .map(|business| {
            Link::new(business.display_name(), business_path(&slug, &business.slug))
          }),
      );
    }

    links
  }
}

impl std::fmt::Display for Businesses {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write_header(formatter)?;

    match &self.authority {
      Authority::Authorized { .. } => (),
      Authority::Failed(message) => return writeln!(formatter, "! {}", message),
      Authority::Redirecting(navigation) => return writeln!(formatter, "-> {}", navigation.target),
      Authority::Init | Authority::Checking => return writeln!(formatter, "Loading..."),
    }

    writeln!(formatter, "Your portfolio")?;
    writeln!(formatter, "Businesses")?;
    writeln!(formatter)?;

    match &self.listing {
      Listing::Loading => writeln!(formatter, "Loading...")?,
      Listing::Failed(message) => writeln!(formatter, "! {}", message)?,
      Listing::Loaded(businesses) if businesses.is_empty() => {
        writeln!(formatter, "No businesses yet.")?
      }
      Listing::Loaded(businesses) => {
        for business in businesses {
          writeln!(formatter, "* {}", business.display_name())?;

          if let Some(description) = &business.description {
            writeln!(formatter, "  {}", description)?;
          }
        }
      }
    }

    writeln!(formatter)?;
    write_links(formatter, &self.links())
  }
}

#[cfg(test)]
mod test {
  use super::{Businesses, Listing};
  use crate::context::test_helpers::context_at;
  use crate::screens::Link;
  use async_std::task::block_on;
  use mockito::mock;

  fn me() -> mockito::Mock {
    mock("GET", "/me")
      .match_header("authorization", "Bearer abc")
      .with_status(200)
      .with_body(r#"{"email":"a@b.com","slug":"jane"}"#)
      .create()
  }

  #[test]
  fn lists_businesses() {
    let me = me();
    let list = mock("GET", "/businesses")
      .match_header("authorization", "Bearer abc")
      .with_status(200)
      .with_body(r#"[{"slug":"corner-cafe","name":"Corner Cafe","description":"coffee"}]"#)
      .create();

    let context = context_at("/jane/businesses", Some("abc"));
    let mut page = Businesses::new("jane");
    block_on(page.mount(&context));

    let rendered = format!("{}", page);
    assert!(rendered.contains("Corner Cafe"));
    assert!(rendered.contains("coffee"));
    assert!(page
      .links()
      .contains(&Link::new("Corner Cafe", "/jane/businesses/corner-cafe")));
    assert!(page
      .links()
      .contains(&Link::new("+ Add business", "/jane/businesses/add")));
    me.assert();
    list.assert();
  }

  #[test]
  fn unnamed_business_does_not_fail_listing() {
    let me = me();
    let list = mock("GET", "/businesses")
      .with_status(200)
      .with_body(r#"[{"slug":"a","business_name":null},{"slug":"b","business_name":"Cafe"}]"#)
      .create();

    let context = context_at("/jane/businesses", Some("abc"));
    let mut page = Businesses::new("jane");
    block_on(page.mount(&context));

    assert_eq!(page.error(), None);
    let rendered = format!("{}", page);
    assert!(rendered.contains("* a\n"));
    assert!(rendered.contains("* Cafe\n"));
    assert!(page.links().contains(&Link::new("a", "/jane/businesses/a")));
    me.assert();
    list.assert();
  }

  #[test]
  fn empty_listing() {
    let me = me();
    let list = mock("GET", "/businesses").with_status(200).with_body("[]").create();

    let context = context_at("/jane/businesses", Some("abc"));
    let mut page = Businesses::new("jane");
    block_on(page.mount(&context));

    assert_eq!(page.listing(), &Listing::Loaded(Vec::new()));
    assert!(format!("{}", page).contains("No businesses yet."));
    me.assert();
    list.assert();
  }

  #[test]
  fn stale_slug_redirects_before_listing() {
    let me = me();
    let list = mock("GET", "/businesses").expect(0).create();

    let context = context_at("/bob/businesses", Some("abc"));
    let mut page = Businesses::new("bob");
    block_on(page.mount(&context));

    assert_eq!(context.navigator().entries(), vec!["/jane/businesses"]);
    assert_eq!(page.listing(), &Listing::Loading);
    me.assert();
    list.assert();
  }

  #[test]
  fn no_session_no_requests() {
    let me = mock("GET", "/me").expect(0).create();
    let list = mock("GET", "/businesses").expect(0).create();

    let context = context_at("/jane/businesses", None);
    let mut page = Businesses::new("jane");
    block_on(page.mount(&context));

    assert_eq!(context.navigator().current(), "/login");
    me.assert();
    list.assert();
  }

  #[test]
  fn listing_failure_inline() {
    let me = me();
    let list = mock("GET", "/businesses")
      .with_status(500)
      .with_body("{}")
      .create();

    let context = context_at("/jane/businesses", Some("abc"));
    let mut page = Businesses::new("jane");
    block_on(page.mount(&context));

    assert_eq!(page.error(), Some("Failed to fetch businesses"));
    assert_eq!(context.navigator().current(), "/jane/businesses");
    me.assert();
    list.assert();
  }
}
