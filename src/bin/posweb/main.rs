extern crate async_std;
extern crate dotenv;
extern crate gumdrop;

use async_std::task;
use gumdrop::{parse_args_default_or_exit, Options as Gumdrop};
use log::{debug, info, warn};
use std::io::Result;
use std::process::exit;

use posweb::constants::{LANDING_PATH, LOGIN_PATH, SIGNUP_PATH};
use posweb::interchange::businesses::NewBusiness;
use posweb::interchange::session::{Credentials, Registration};
use posweb::{version, Action, App, Configuration, Context, Route, Screen};

// Used in place of a slug when none is given; the session check swaps in the real one.
const SELF_SLUG: &'static str = "me";

#[derive(Debug, Gumdrop)]
struct Options {
  #[options(help = "configuration json file")]
  config: Configuration,

  #[options(help = "display the help text")]
  help: bool,

  #[options(help = "print the version and exit")]
  version: bool,

  #[options(command)]
  command: Option<Command>,
}

#[derive(Debug, Gumdrop)]
enum Command {
  #[options(help = "render the screen at a path")]
  Open(OpenOptions),

  #[options(help = "create an account and log in")]
  Signup(SignupOptions),

  #[options(help = "log in with an existing account")]
  Login(LoginOptions),

  #[options(help = "forget the stored session")]
  Logout(LogoutOptions),

  #[options(help = "create a business for the logged in user")]
  AddBusiness(AddBusinessOptions),
}

#[derive(Debug, Gumdrop)]
struct OpenOptions {
  #[options(help = "display the help text")]
  help: bool,

  #[options(free, help = "path to open, e.g. /jane/businesses")]
  path: Vec<String>,
}

#[derive(Debug, Gumdrop)]
struct SignupOptions {
  #[options(help = "display the help text")]
  help: bool,

  #[options(help = "full name")]
  full_name: String,

  #[options(help = "email address")]
  email: String,

  #[options(help = "password")]
  password: String,
}

#[derive(Debug, Gumdrop)]
struct LoginOptions {
  #[options(help = "display the help text")]
  help: bool,

  #[options(help = "email address")]
  email: String,

  #[options(help = "password")]
  password: String,
}

#[derive(Debug, Gumdrop)]
struct LogoutOptions {
  #[options(help = "display the help text")]
  help: bool,
}

#[derive(Debug, Gumdrop)]
struct AddBusinessOptions {
  #[options(help = "display the help text")]
  help: bool,

  #[options(help = "user slug (defaults to the logged in user)")]
  slug: Option<String>,

  #[options(help = "business name")]
  name: String,

  #[options(help = "business description")]
  description: Option<String>,

  #[options(help = "logo url")]
  logo: Option<String>,
}

async fn run(command: Option<Command>, app: &App) -> Screen {
  match command {
    None => app.open(LANDING_PATH).await,
    Some(Command::Open(options)) => {
      let path = options
        .path
        .first()
        .map(String::as_str)
        .unwrap_or(LANDING_PATH);
      app.open(path).await
    }
    Some(Command::Signup(options)) => {
      let screen = app.open(SIGNUP_PATH).await;
      let registration = Registration {
        full_name: options.full_name,
        email: options.email,
        password: options.password,
      };
      app.dispatch(screen, Action::Signup(registration)).await
    }
    Some(Command::Login(options)) => {
      let screen = app.open(LOGIN_PATH).await;
      let credentials = Credentials {
        email: options.email,
        password: options.password,
      };
      app.dispatch(screen, Action::Login(credentials)).await
    }
    Some(Command::Logout(_)) => {
      let screen = app.settle().await;
      app.dispatch(screen, Action::Logout).await
    }
    Some(Command::AddBusiness(options)) => {
      let slug = options.slug.unwrap_or_else(|| String::from(SELF_SLUG));
      let screen = app.open(&Route::AddBusiness { slug }.path()).await;

      if !matches!(screen, Screen::AddBusiness(_)) {
        debug!("add business form unavailable, landed on {}", screen.name());
        return screen;
      }

      let business = NewBusiness {
        name: options.name,
        description: options.description,
        logo_url: options.logo,
      };
      app.dispatch(screen, Action::AddBusiness(business)).await
    }
  }
}

fn main() -> Result<()> {
  env_logger::builder().format_timestamp_millis().init();

  if let Err(e) = dotenv::dotenv() {
    debug!("unable to load .env - {}", e);
  }

  let opts = parse_args_default_or_exit::<Options>();

  if opts.version {
    println!("posweb version - {}", version::version());
    exit(0);
  }

  info!(
    "starting against '{}' (version {})",
    opts.config.api.base_url,
    version::version()
  );

  let context = Context::builder().configuration(&opts.config).build()?;
  let app = App::new(context);
  let screen = task::block_on(run(opts.command, &app));

  println!("{}", screen);

  if let Some(error) = screen.error() {
    warn!("finished on {} with error - {}", screen.name(), error);
    exit(1);
  }

  Ok(())
}
