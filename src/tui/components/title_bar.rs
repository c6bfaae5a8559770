use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Top heading bar. Stateless - receives everything as props.
pub struct TitleBar;

impl TitleBar {
    pub fn render(frame: &mut Frame, area: Rect, message_count: usize) {
        let title = if message_count == 0 {
            "Relay".to_string()
        } else {
            format!("Relay | {} messages", message_count)
        };
        let span = Span::styled(title, Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_shows_message_count() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| TitleBar::render(f, f.area(), 3))
            .unwrap();
        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("3 messages"));
    }
}
