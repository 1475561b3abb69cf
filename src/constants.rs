pub const DEFAULT_API_URL: &'static str = "http://localhost:8000";
pub const DEFAULT_SESSION_FILE: &'static str = ".posweb-session.json";
pub const DEFAULT_SESSION_KEY: &'static str = "token";

pub const API_URL_ENV: &'static str = "POSWEB_API_URL";
pub const SESSION_FILE_ENV: &'static str = "POSWEB_SESSION_FILE";

pub const SIGNUP_ENDPOINT: &'static str = "create_user";
pub const LOGIN_ENDPOINT: &'static str = "login";
pub const ME_ENDPOINT: &'static str = "me";
pub const BUSINESSES_ENDPOINT: &'static str = "businesses";
pub const CREATE_BUSINESS_ENDPOINT: &'static str = "create_business";

pub const SIGNUP_FAILED: &'static str = "Signup failed";
pub const LOGIN_FAILED: &'static str = "Login failed";
pub const FETCH_USER_FAILED: &'static str = "Failed to fetch user";
pub const FETCH_BUSINESSES_FAILED: &'static str = "Failed to fetch businesses";
pub const CREATE_BUSINESS_FAILED: &'static str = "Failed to create business";

pub const LANDING_PATH: &'static str = "/";
pub const LOGIN_PATH: &'static str = "/login";
pub const SIGNUP_PATH: &'static str = "/signup";
pub const BUSINESSES_SEGMENT: &'static str = "businesses";
pub const ADD_SEGMENT: &'static str = "add";

// Upper bound on redirects followed while settling a single navigation.
pub const MAX_REDIRECTS: u8 = 8;
