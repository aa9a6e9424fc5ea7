use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{OPTION_COUNT, Question, QuizSession};

const OPTION_LABELS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D', 'E'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], chunks[1], session);
    render_question_text(frame, chunks[2], question.text());
    render_options(
        frame,
        chunks[3],
        question,
        session.selected_option(),
        app.highlighted_option(),
    );
    render_controls(frame, chunks[4], session.selected_option().is_some());
}

fn render_progress(frame: &mut Frame, label_area: Rect, bar_area: Rect, session: &QuizSession) {
    let label = Paragraph::new(format!(
        "{}  ·  Question {}/{}  ·  Score {}",
        session.difficulty(),
        session.current_question_number(),
        session.total_questions(),
        session.score()
    ))
    .alignment(Alignment::Right)
    .fg(Color::DarkGray);
    frame.render_widget(label, label_area);

    let ratio = session.current_question_number() as f64 / session.total_questions().max(1) as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, bar_area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    answered: Option<usize>,
    highlighted: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(OPTION_COUNT * 2);

    for (index, option) in question.options().iter().enumerate() {
        let style = option_style(question, answered, highlighted, index);
        let marker = match answered {
            Some(_) if question.is_correct(index) => "+",
            Some(chosen) if chosen == index => "-",
            None if index == highlighted => ">",
            _ => " ",
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn option_style(
    question: &Question,
    answered: Option<usize>,
    highlighted: usize,
    index: usize,
) -> Style {
    match answered {
        Some(_) if question.is_correct(index) => Style::default().fg(Color::Green).bold(),
        Some(chosen) if chosen == index => Style::default().fg(Color::Red).bold(),
        Some(_) => Style::default().fg(Color::DarkGray),
        None if index == highlighted => Style::default().fg(Color::Cyan).bold(),
        None => Style::default().fg(Color::Gray),
    }
}

fn render_controls(frame: &mut Frame, area: Rect, answered: bool) {
    let text = if answered {
        "enter/n next  ·  q quit"
    } else {
        "j/k navigate  ·  enter or a-e select  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
