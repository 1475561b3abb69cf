pub mod businesses;
pub mod errors;
pub mod session;
pub mod users;
