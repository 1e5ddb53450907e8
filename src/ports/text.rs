// src/ports/text.rs
use crate::ports::view::WidgetBoard;
use crate::util::text::{extra_line_count, summarize};

/// Terminal rendition of a widget board, one line per widget
#[derive(Debug, Clone)]
pub struct TextPresenter {
    width: usize,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self::with_width(60)
    }

    pub fn with_width(width: usize) -> Self {
        Self { width }
    }

    pub fn render(&self, board: &WidgetBoard) -> String {
        if board.is_empty() {
            return if board.search().is_empty() {
                "No notes".to_string()
            } else {
                format!("No notes matching '{}'", board.search())
            };
        }

        board
            .widgets()
            .iter()
            .map(|w| {
                let marker = if w.pinned { "*" } else { " " };
                let more = match extra_line_count(&w.text) {
                    0 => String::new(),
                    n => format!(" (+{n} lines)"),
                };
                format!("{marker} {:>5}  {}{more}", w.note_id, summarize(&w.text, self.width))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use crate::ports::view::NoteView;

    #[test]
    fn given_empty_board_when_rendering_then_says_so() {
        let board = WidgetBoard::new();

        assert_eq!(TextPresenter::new().render(&board), "No notes");
    }

    #[test]
    fn given_empty_search_result_when_rendering_then_names_the_query() {
        let mut board = WidgetBoard::new();
        board.type_search("milk");

        assert_eq!(TextPresenter::new().render(&board), "No notes matching 'milk'");
    }

    #[test]
    fn given_pinned_and_plain_notes_when_rendering_then_marks_pinned() {
        let mut board = WidgetBoard::new();
        board.render_list(&[
            Note {
                id: 12,
                content: "first\nsecond".to_string(),
                fixed: true,
            },
            Note::new(3, "plain"),
        ]);

        let output = TextPresenter::new().render(&board);

        assert_eq!(output, "*    12  first (+1 lines)\n      3  plain");
    }
}
