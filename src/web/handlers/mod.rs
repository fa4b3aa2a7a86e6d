//! HTML template rendering handlers.

mod home;
mod login;

pub use home::{HomeTemplate, home_handler};
pub use login::{LoginTemplate, login_page_handler, login_submit_handler};
