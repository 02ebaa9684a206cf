//! Frame rendering
//!
//! The active board's markup lines become the content paragraph; a tab
//! row above and a key-hint footer below frame it. Styling stays minimal:
//! the markup tree carries the content, the chrome carries the counts.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use kiosk_app::{view, AppState, Board};

/// Draw one full frame for the active board.
pub fn draw(frame: &mut Frame, state: &AppState, active: Board) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_tabs(frame, areas[0], state, active);
    draw_board(frame, areas[1], state, active);
    draw_footer(frame, areas[2]);
}

fn draw_tabs(frame: &mut Frame, area: Rect, state: &AppState, active: Board) {
    let titles: Vec<String> = Board::ALL
        .iter()
        .map(|board| {
            let count = match board {
                Board::Posts => state.posts.len(),
                Board::Users => state.users.len(),
            };
            format!("{} ({count})", board.label())
        })
        .collect();

    let selected = Board::ALL
        .iter()
        .position(|board| *board == active)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title("kiosk"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_board(frame: &mut Frame, area: Rect, state: &AppState, active: Board) {
    let lines: Vec<Line> = view(state, active)
        .lines()
        .into_iter()
        .map(Line::from)
        .collect();

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(content, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::styled(
        " q quit | 1 posts | 2 users | tab next | r refresh",
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(Paragraph::new(hints), area);
}
