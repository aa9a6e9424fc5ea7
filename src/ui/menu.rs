use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Difficulty;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ROBOTICS QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Test your robotics knowledge".fg(Color::DarkGray)),
        Line::from(""),
    ];

    for (index, level) in Difficulty::ALL.into_iter().enumerate() {
        let is_selected = level == app.menu_selection();
        let style = if is_selected {
            Style::default().fg(level_color(level)).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        content.push(Line::from(vec![
            Span::styled(format!("{} {}. ", marker, index + 1), style),
            Span::styled(level.as_str(), style),
        ]));
        content.push(Line::from(""));
    }

    content.push(Line::from(
        "1-3 or j/k + enter to start  ·  q quit".fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn level_color(level: Difficulty) -> Color {
    match level {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}
