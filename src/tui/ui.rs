//! Frame layout: heading on top, message log in the middle, input at the
//! bottom. Pure function of the model plus presentation state - ratatui's
//! double buffer diffs the result against the live terminal.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::Model;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MessageList, TitleBar};

pub fn draw_ui(frame: &mut Frame, model: &Model, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    TitleBar::render(frame, title_area, model.messages.len());

    let mut list = MessageList::new(&mut tui.message_list, &model.messages);
    list.render(frame, main_area);

    tui.input_box.render(frame, input_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(model: &Model) -> String {
        let mut tui = TuiState::new();
        tui.input_box.set_field(&model.field);
        let backend = TestBackend::new(60, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, model, &mut tui)).unwrap();
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_draw_ui_empty_model() {
        let rendered = draw(&Model::new());
        assert!(rendered.contains("Relay"));
        assert!(rendered.contains("Input"));
    }

    #[test]
    fn test_draw_ui_shows_log_and_field() {
        let model = Model {
            field: "draft".to_string(),
            messages: vec!["hello".to_string(), "peer: hello".to_string()],
        };
        let rendered = draw(&model);
        assert!(rendered.contains("hello"));
        assert!(rendered.contains("peer: hello"));
        assert!(rendered.contains("draft"));
    }
}
