//! Terminal preview of a board of task cards.
//!
//! Cards show the same fields in the same order as `TaskCard`, and the card's
//! class tokens are mapped onto ratatui styles here, so this module is the
//! styling collaborator for the terminal.

use crate::board::Board;
use crate::task::Task;
use crate::task_card::{edit_route, CARD_CLASSES};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame, Terminal,
};
use std::io;

// tailwind slate-500
const SLATE_500: Color = Color::Rgb(100, 116, 139);

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, board: &mut Board) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, board))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Left => board.select_left(),
                KeyCode::Right => board.select_right(),
                KeyCode::Up => board.select_up(),
                KeyCode::Down => board.select_down(),
                _ => {}
            }
        }
    }
}

pub fn draw(f: &mut Frame, board: &Board) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let columns = board.columns();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(50); columns.len()])
        .split(v_chunks[0]);

    for (i, status) in columns.iter().enumerate() {
        let is_selected_column = board.selected_column_index() == i;
        let column = Block::default()
            .title(format!(" {status} "))
            .borders(Borders::ALL)
            .border_style(if is_selected_column {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            });
        let inner = column.inner(chunks[i]);
        f.render_widget(column, chunks[i]);

        let tasks = board.tasks_by_status(*status);
        if tasks.is_empty() {
            continue;
        }
        let height = card_height(&CARD_CLASSES);
        let visible = (inner.height / height).max(1) as usize;
        let start = if is_selected_column {
            board.selected_task_index().saturating_sub(visible - 1)
        } else {
            0
        };

        for (slot, (idx, task)) in tasks.iter().enumerate().skip(start).take(visible).enumerate() {
            let area = Rect {
                y: inner.y + slot as u16 * height,
                height: height.min(inner.height.saturating_sub(slot as u16 * height)),
                ..inner
            };
            let mut block = card_block(&CARD_CLASSES);
            if is_selected_column && board.selected_task_index() == idx {
                block = block.border_style(Style::default().fg(Color::Yellow));
            }
            f.render_widget(Paragraph::new(card_lines(task)).block(block), area);
        }
    }

    let footer = match board.selected() {
        Some(task) => format!("{} -> {}", task.title, edit_route(task).path()),
        None => "no task selected".to_string(),
    };
    let help = Paragraph::new(Line::from(vec![
        Span::styled(footer, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   arrows: move  q: quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, v_chunks[1]);
}

/// One terminal line per card field, in card order.
pub fn card_lines(task: &Task) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            task.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(task.description.clone()),
        Line::raw(task.priority.as_str()),
        Line::raw(task.status.as_str()),
        Line::raw(task.due_date.clone()),
        Line::from(vec![
            Span::styled("Edit", Style::default().add_modifier(Modifier::UNDERLINED)),
            Span::raw(format!(" ({})", edit_route(task).path())),
        ]),
    ]
}

/// Maps class tokens onto a ratatui block. Unknown tokens are ignored;
/// the flex tokens are satisfied by stacking one line per field.
pub fn card_block(classes: &[&str]) -> Block<'static> {
    let mut block = Block::default().borders(Borders::ALL);
    for token in classes {
        block = match *token {
            "rounded-sm" => block.border_type(BorderType::Rounded),
            "bg-slate-500" => block.style(Style::default().bg(SLATE_500)),
            other => match padding_scale(other) {
                Some(n) => block.padding(Padding::symmetric(n / 2, n / 4)),
                None => block,
            },
        };
    }
    block
}

fn padding_scale(token: &str) -> Option<u16> {
    token.strip_prefix("p-").and_then(|n| n.parse().ok())
}

const CARD_FIELDS: u16 = 6;

fn card_height(classes: &[&str]) -> u16 {
    let padding = classes
        .iter()
        .find_map(|t| padding_scale(t))
        .map_or(0, |n| n / 4);
    CARD_FIELDS + 2 * padding + 2
}
