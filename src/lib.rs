pub mod config;
pub mod error;
pub mod notices;
pub mod parser;
pub mod store;
pub mod theme;
pub mod validator;
pub mod widget;

pub use config::EmailsInputConfig;
pub use error::AddError;
pub use store::{AddReport, AddressEntry, EmailStore};
pub use theme::InputTheme;
pub use widget::EmailsInput;
