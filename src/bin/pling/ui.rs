//! Drawing code for the pling demo page.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::Pling;

/// Render the whole frame
pub fn render(frame: &mut Frame, app: &Pling) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with sound state
            Constraint::Min(6),    // Surfaces
            Constraint::Length(4), // Details panel
            Constraint::Length(1), // Tooltip
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_surfaces(frame, chunks[1], app);
    render_panel(frame, chunks[2], app);
    render_tooltip(frame, chunks[3], app);
    render_help(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &Pling) {
    let block = Block::default().title(" pling ").borders(Borders::ALL);

    let (symbol, label, color) = if app.sound_enabled() {
        ("♪", "Sound on", Color::Green)
    } else {
        ("∅", "Sound off", Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} {}  ", symbol, label),
            Style::default().fg(color),
        ),
        Span::styled(
            "hover, click, submit and toggle to hear the feedback sounds",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_surfaces(frame: &mut Frame, area: Rect, app: &Pling) {
    let items: Vec<ListItem> = app
        .surfaces()
        .iter()
        .enumerate()
        .map(|(i, surface)| {
            let selected = i == app.selected();
            let marker = if selected { " > " } else { "   " };
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, surface.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Page ").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn render_panel(frame: &mut Frame, area: Rect, app: &Pling) {
    let block = Block::default().title(" Details ").borders(Borders::ALL);

    let body = if app.panel_open() {
        Paragraph::new(" The panel slid open with a whoosh.")
            .style(Style::default().fg(Color::White))
            .block(block)
    } else {
        Paragraph::new(" (closed)")
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
    };

    frame.render_widget(body, area);
}

fn render_tooltip(frame: &mut Frame, area: Rect, app: &Pling) {
    if let Some(message) = app.tooltip() {
        let tooltip = Paragraph::new(format!(" {} ", message)).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(tooltip, area);
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(" [↑/↓] Hover  [Enter] Activate  [A] Ambient  [M] Mute/unmute  [Q] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
