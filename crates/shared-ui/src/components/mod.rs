// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod input;
pub mod page_header;
pub mod sheet;
pub mod sidebar;
pub mod skeleton;

// Primitive wrappers
pub mod separator;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form::*;
pub use input::*;
pub use page_header::*;
pub use separator::*;
pub use sheet::*;
pub use sidebar::*;
pub use skeleton::*;
pub use toast::*;
