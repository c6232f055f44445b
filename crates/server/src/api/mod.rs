mod auth;
pub use auth::*;

mod users;
pub use users::*;
