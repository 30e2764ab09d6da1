//! HTML template rendering handlers.

mod feed;
mod login;
mod register;

pub use feed::feed_handler;
pub use login::{login_page_handler, login_submit_handler, logout_submit_handler};
pub use register::{register_page_handler, register_submit_handler};
