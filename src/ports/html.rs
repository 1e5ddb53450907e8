// src/ports/html.rs
use crate::ports::view::{Control, NoteView, NoteWidget, WidgetBoard};
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn control_icon(control: Control) -> &'static str {
        match control {
            Control::Pin => r#"<i class="bi bi-pin" title="Pin"></i>"#,
            Control::Delete => r#"<i class="bi bi-x-lg" title="Delete"></i>"#,
            Control::Duplicate => r#"<i class="bi bi-file-earmark-plus" title="Duplicate"></i>"#,
        }
    }

    #[instrument(level = "trace", skip(self, widget), fields(note_id = widget.note_id))]
    fn render_widget(&self, widget: &NoteWidget) -> String {
        let class = if widget.pinned { "note fixed" } else { "note" };
        let controls: String = widget
            .controls
            .iter()
            .map(|c| Self::control_icon(*c))
            .collect();

        format!(
            r#"        <div class="{class}" data-note-id="{id}">
            <textarea placeholder="Add some text...">{text}</textarea>
            {controls}
        </div>"#,
            class = class,
            id = widget.note_id,
            text = encode_text(&widget.text),
            controls = controls,
        )
    }

    pub fn render(&self, board: &WidgetBoard) -> String {
        let notes: Vec<String> = board
            .widgets()
            .iter()
            .map(|w| self.render_widget(w))
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Sticky Notes</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css">
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            margin: 2rem;
            background-color: #f5f5f5;
        }}
        #notes-container {{
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
        }}
        .note {{
            background: #fff8b3;
            border-radius: 4px;
            padding: 0.5rem;
            width: 14rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .note.fixed {{
            background: #ffe066;
        }}
        .note textarea {{
            width: 100%;
            height: 8rem;
            border: none;
            background: transparent;
            resize: none;
        }}
        .note i {{
            cursor: pointer;
            margin-right: 0.5rem;
        }}
    </style>
</head>
<body>
    <div class="controls">
        <input type="text" id="note-content" placeholder="What do you want to note?" value="{draft}">
        <button class="add-note">+</button>
        <input type="text" id="search-input" placeholder="Search notes..." value="{search}">
        <button id="exports-notes">Export CSV</button>
    </div>
    <div id="notes-container">
{notes}
    </div>
</body>
</html>"#,
            draft = encode_double_quoted_attribute(board.draft()),
            search = encode_double_quoted_attribute(board.search()),
            notes = notes.join("\n"),
        )
    }
}
