use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use super::PALETTE;

/// Border plus one column of padding on each side.
const POPUP_FRAME_WIDTH: u16 = 4;
const POPUP_FRAME_HEIGHT: u16 = 2;

/// Draws the pause notice over the board.
pub fn render_pause_overlay(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("PAUSED").style(Style::new().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("[Space] Resume"),
        Line::from("[R] Restart [Q] Quit"),
    ];

    render_popup(frame, area, " pause ", lines);
}

/// Draws the end-of-game summary over the board.
///
/// `high_score` is the table's best score after this game was recorded.
pub fn render_game_over_overlay(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    won: bool,
) {
    let (title, headline) = if won {
        (" victory ", "BOARD CLEARED")
    } else {
        (" game over ", "GAME OVER")
    };
    let is_new_high = score > 0 && score >= high_score;

    let mut lines = vec![
        Line::from(headline).style(Style::new().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High score: {high_score}")),
    ];
    if is_new_high {
        lines.push(Line::from("New high score!").style(Style::new().fg(PALETTE.accent)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("[Enter] Again [Q] Quit"));

    render_popup(frame, area, title, lines);
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let content_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_FRAME_WIDTH);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_FRAME_HEIGHT);

    let popup = centered_popup(area, width, height);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(PALETTE.text).bg(PALETTE.background))
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
