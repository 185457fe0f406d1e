use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::score::HighScores;
use crate::snake::Position;
use crate::state::GameState;
use crate::ui::overlay::{render_game_over_overlay, render_pause_overlay};
use crate::ui::panel::render_side_panel;
use crate::ui::PALETTE;

/// Terminal columns per board cell; two keeps cells roughly square.
const CELL_WIDTH: u16 = 2;
const GLYPH_CELL: &str = "██";
const GLYPH_FOOD: &str = "●";
const PANEL_MIN_WIDTH: u16 = 36;
const PANEL_MIN_HEIGHT: u16 = 20;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, high_scores: &HighScores) {
    let area = frame.area();
    let board_width = state.board_size().saturating_mul(CELL_WIDTH).saturating_add(2);
    let board_height = state.board_size().saturating_add(2);
    let min_width = board_width.saturating_add(PANEL_MIN_WIDTH);

    if area.width < min_width || area.height < board_height.max(PANEL_MIN_HEIGHT) {
        render_too_small(frame, area, min_width, board_height);
        return;
    }

    let [board_column, panel_area] =
        Layout::horizontal([Constraint::Length(board_width), Constraint::Min(PANEL_MIN_WIDTH)])
            .areas(area);
    let [board_area, _] =
        Layout::vertical([Constraint::Length(board_height), Constraint::Min(0)]).areas(board_column);

    render_board(frame, board_area, state);
    render_side_panel(frame, panel_area, state, high_scores);

    if state.is_game_over {
        render_game_over_overlay(
            frame,
            board_area,
            state.score,
            high_scores.high_score(),
            state.is_won,
        );
    } else if state.is_paused {
        render_pause_overlay(frame, board_area);
    }
}

fn render_board(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let block = Block::bordered()
        .title(" SNAKE ")
        .title_alignment(Alignment::Center)
        .border_style(Style::new().fg(PALETTE.text).bg(PALETTE.border))
        .style(Style::new().bg(PALETTE.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buffer = frame.buffer_mut();

    if let Some((x, y)) = state
        .food
        .and_then(|food| cell_to_terminal(inner, state.board_size(), food))
    {
        buffer.set_string(
            x,
            y,
            GLYPH_FOOD,
            Style::new()
                .fg(PALETTE.food)
                .bg(PALETTE.background)
                .add_modifier(Modifier::BOLD),
        );
    }

    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, state.board_size(), *segment) else {
            continue;
        };

        let color = if index == 0 {
            PALETTE.snake_head
        } else {
            PALETTE.snake_body
        };
        buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(color));
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16) {
    frame.render_widget(
        Paragraph::new(format!(
            "Terminal too small: need at least {width}x{}",
            height.max(PANEL_MIN_HEIGHT)
        ))
        .alignment(Alignment::Center),
        area,
    );
}

fn cell_to_terminal(inner: Rect, board_size: u16, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(board_size) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.saturating_mul(CELL_WIDTH);
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
