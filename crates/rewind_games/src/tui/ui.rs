//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 3 * 3 + 2;

/// Renders the whole screen: game pane on the left, history on the right.
pub fn draw(frame: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(outer[0]);

    draw_game(frame, panes[0], app);
    draw_history(frame, panes[1], app);
    draw_footer(frame, outer[1], app);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block("Rewind Tic-Tac-Toe", *app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Status
            Constraint::Length(BOARD_HEIGHT), // Board
            Constraint::Length(1),            // Gap
            Constraint::Length(1),            // New game control
            Constraint::Min(0),               // Ignored action notice
        ])
        .split(inner);

    let status_style = match app.game().outcome() {
        Some(_) => Style::default().fg(Color::Green),
        None => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(app.game().status_text())
        .style(status_style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[0]);

    draw_board(frame, center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT), app);

    if app.game().can_start_new_game() {
        let control = Paragraph::new("[n] Start New Game")
            .style(Style::default().fg(Color::Black).bg(Color::Blue))
            .alignment(Alignment::Center);
        frame.render_widget(control, center_rect(chunks[3], 20, 1));
    }

    if let Some(reason) = app.last_ignored() {
        let notice = Paragraph::new(reason.as_str())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(notice, chunks[4]);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); 3])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty if *app.show_cell_numbers() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (" ".to_string(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == *app.cursor() && *app.focus() == Focus::Board {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![
        Line::from(Span::styled(" ".repeat(CELL_WIDTH as usize), style)),
        Line::from(Span::styled(format!("{:^width$}", symbol, width = CELL_WIDTH as usize), style)),
        Line::from(Span::styled(" ".repeat(CELL_WIDTH as usize), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .game()
        .history_labels()
        .into_iter()
        .enumerate()
        .map(|(step, label)| ListItem::new(format!("{}. {}", step + 1, label)))
        .collect();

    let list = List::new(items)
        .block(pane_block("Game History", *app.focus() == Focus::History))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(*app.history_selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hint = match app.focus() {
        Focus::Board => "arrows/hjkl move  enter place  1-9 place  tab history  q quit",
        Focus::History => "up/down select  enter go to move  tab board  q quit",
    };
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
