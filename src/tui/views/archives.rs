//! Archives view
//!
//! Every record, newest first, as a scrollable table.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{category_initial, truncate};
use crate::tui::app::App;

use super::scribe::amount_style;

/// Render the archives view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" 账本 ({}) ", app.transactions.len()));

    if app.transactions.is_empty() {
        frame.render_widget(Paragraph::new("账本是空的。").block(block), area);
        return;
    }

    let widths = [
        Constraint::Length(3),  // Initial
        Constraint::Length(6),  // Date
        Constraint::Length(22), // Summary
        Constraint::Min(20),    // Original input
        Constraint::Length(14), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("日期").style(bold),
        Cell::from("摘要").style(bold),
        Cell::from("原文").style(bold),
        Cell::from("金额").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = app
        .transactions
        .iter()
        .map(|txn| {
            Row::new(vec![
                Cell::from(category_initial(&txn.category)).style(Style::default().fg(Color::Cyan)),
                Cell::from(
                    txn.date
                        .with_timezone(&chrono::Local)
                        .format("%m-%d")
                        .to_string(),
                ),
                Cell::from(truncate(&txn.summary, 20)),
                Cell::from(truncate(&txn.original_input, 40))
                    .style(Style::default().fg(Color::DarkGray)),
                Cell::from(format!(
                    "{}{}",
                    txn.kind.sign(),
                    txn.amount.format_with_symbol(symbol)
                ))
                .style(amount_style(txn.is_income())),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.archive_index));

    frame.render_stateful_widget(table, area, &mut state);
}
