pub mod action;
pub mod config;
pub mod error;
pub mod guard;
pub mod menu;
pub mod requests;
pub mod role;
pub mod session;
pub mod ticket;
pub mod user;

pub use action::*;
pub use config::*;
pub use error::*;
pub use guard::*;
pub use menu::*;
pub use requests::*;
pub use role::*;
pub use session::*;
pub use ticket::*;
pub use user::*;
