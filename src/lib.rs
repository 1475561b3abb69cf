extern crate serde;

pub mod api;
pub mod app;
pub mod authority;
pub mod authorization;
pub mod configuration;
pub mod constants;
pub mod context;
pub mod errors;
pub mod http;
pub mod interchange;
pub mod navigation;
pub mod routes;
pub mod screens;
pub mod session;
pub mod version;

pub use api::Api;
pub use app::App;
pub use authority::Authority;
pub use configuration::Configuration;
pub use context::Context;
pub use navigation::{Mount, Navigation, Navigator};
pub use routes::Route;
pub use screens::{Action, Screen};
pub use session::{FileStorage, MemoryStorage, SessionStore, Storage};
