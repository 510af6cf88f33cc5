pub mod document;
pub mod layout;
pub mod typewriter;
pub mod widgets;

pub use document::{DocView, Document, ROW_UNITS};
pub use layout::{anchored_right, centered_rect, AppLayout, LayoutAreas};
pub use typewriter::Typewriter;
pub use widgets::*;
