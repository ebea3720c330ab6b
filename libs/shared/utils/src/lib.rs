pub mod extractor;
pub mod html;
pub mod notice;
pub mod session;
pub mod state;
pub mod test_utils;

pub use html::{HtmlTemplate, SelectOption};
pub use notice::{Notice, NoticeKind};
pub use session::{SessionRegistry, SESSION_COOKIE};
pub use state::AppState;
