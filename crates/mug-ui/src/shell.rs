use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use mug_core::logging::{ActivityEntry, LogLevel};

use crate::layout::ShellRects;

/// Everything the shell chrome shows around the face.
pub struct ShellView<'a> {
    pub title: &'a str,
    pub status_line: &'a str,
    pub keys: Vec<String>,
    pub params: Vec<String>,
    pub activity: Vec<ActivityEntry>,
}

pub fn render_shell(
    f: &mut Frame,
    rects: ShellRects,
    view: ShellView<'_>,
    hero: impl FnOnce(&mut Frame, Rect),
) {
    let top = Paragraph::new(Line::from(format!("MUG | {} | {}", view.title, view.status_line)))
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(top, rects.top);

    hero(f, rects.hero);

    f.render_widget(lines_panel("KEYS", view.keys), rects.hud_keys);
    f.render_widget(lines_panel("PARAMS", view.params), rects.hud_params);

    let activity: Vec<Line> = view.activity.iter().map(activity_line).collect();
    f.render_widget(
        Paragraph::new(Text::from(activity))
            .block(Block::default().borders(Borders::ALL).title("ACTIVITY")),
        rects.hud_activity,
    );
}

fn lines_panel(title: &str, lines: Vec<String>) -> Paragraph<'static> {
    let text = Text::from(lines.into_iter().map(Line::from).collect::<Vec<_>>());
    Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title.to_string()))
}

fn activity_line(entry: &ActivityEntry) -> Line<'static> {
    let color = match entry.level {
        LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Green,
        LogLevel::Debug => Color::Cyan,
        LogLevel::Trace => Color::DarkGray,
    };
    Line::from(vec![
        Span::styled(format!("{:5} ", entry.level), Style::default().fg(color)),
        Span::raw(entry.message.clone()),
    ])
}
