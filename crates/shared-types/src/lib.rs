pub mod config;
pub mod error;
pub mod feature_flags;
pub mod navigation;
pub mod requests;
pub mod role;
pub mod session;
pub mod user;

pub use config::*;
pub use error::*;
pub use feature_flags::*;
pub use navigation::*;
pub use requests::*;
pub use role::*;
pub use session::*;
pub use user::*;
