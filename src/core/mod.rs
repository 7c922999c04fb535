pub mod constants;
pub mod contact;
pub mod cursor;
pub mod effects;
pub mod mail;
pub mod radar;
pub mod scroll;
pub mod showcase;
pub mod tactical;
pub mod title;
pub mod toast;

pub use contact::ContactForm;
pub use cursor::CursorState;
pub use mail::{MailRelayConfig, RelayError};
pub use title::TitleState;
