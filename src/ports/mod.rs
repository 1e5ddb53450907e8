// src/ports/mod.rs
pub mod html;
pub mod text;
pub mod view;

pub use html::HtmlPresenter;
pub use text::TextPresenter;
pub use view::{Control, NoteView, NoteWidget, WidgetBoard, WidgetHandle};
