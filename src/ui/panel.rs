use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Row, Table};
use ratatui::Frame;

use super::PALETTE;
use crate::score::HighScores;
use crate::state::GameState;

const STATS_HEIGHT: u16 = 5;
const HELP_HEIGHT: u16 = 7;

/// Renders statistics, the top-10 table and key help into `area`.
pub fn render_side_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    high_scores: &HighScores,
) {
    let [stats_area, table_area, help_area] = Layout::vertical([
        Constraint::Length(STATS_HEIGHT),
        Constraint::Min(4),
        Constraint::Length(HELP_HEIGHT),
    ])
    .areas(area);

    render_stats(frame, stats_area, state, high_scores.high_score());
    render_high_score_table(frame, table_area, high_scores);
    render_key_help(frame, help_area);
}

fn render_stats(frame: &mut Frame<'_>, area: Rect, state: &GameState, high_score: u32) {
    let label = Style::new().fg(PALETTE.muted);
    let value = Style::new().fg(PALETTE.text).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.fg(PALETTE.accent)),
        ]),
        Line::from(vec![
            Span::styled("High Score: ", label),
            Span::styled(high_score.max(state.score).to_string(), value.fg(PALETTE.food)),
        ]),
        Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(state.snake.len().to_string(), value),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" stats ")),
        area,
    );
}

fn render_high_score_table(frame: &mut Frame<'_>, area: Rect, high_scores: &HighScores) {
    let block = Block::bordered().title(" high scores ");

    if high_scores.is_empty() {
        frame.render_widget(
            Paragraph::new("No scores yet")
                .alignment(Alignment::Center)
                .style(Style::new().fg(PALETTE.muted))
                .block(block),
            area,
        );
        return;
    }

    let rows = high_scores
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Row::new(vec![
                format!("#{}", index + 1),
                entry.score.to_string(),
                entry.date.clone(),
                entry.player.clone(),
            ])
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Min(6),
        ],
    )
    .header(
        Row::new(vec!["Rank", "Score", "Date", "Player"])
            .style(Style::new().fg(PALETTE.muted).add_modifier(Modifier::BOLD)),
    )
    .block(block);

    frame.render_widget(table, area);
}

fn render_key_help(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("Arrows/WASD  move"),
        Line::from("Space        pause"),
        Line::from("Enter        start/resume"),
        Line::from("R            restart"),
        Line::from("Q/Esc        quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::new().fg(PALETTE.muted))
            .block(Block::bordered().title(" keys ")),
        area,
    );
}
