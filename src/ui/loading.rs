use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(7),
        Constraint::Percentage(40),
    ])
    .split(area);

    let level = app
        .loading_level()
        .map(|level| format!("{} level", level))
        .unwrap_or_default();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Preparing your quiz...",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(level.fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            app.loading_message(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
