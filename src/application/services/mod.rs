//! Business logic services for the application layer.

pub mod login_service;

pub use login_service::{
    HOME_PATH, LOGIN_PATH, LOGIN_SUCCESS_MESSAGE, LoginOutcome, LoginService, REGISTER_PATH,
};
