//! Scribe view
//!
//! Entry box, feedback line and the recent-records preview.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::display::truncate;
use crate::tui::app::App;
use crate::tui::layout::ScribeLayout;

/// Render the scribe view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = ScribeLayout::new(area);

    let border_color = if app.interpreting {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let title = if app.interpreting {
        " 正在记录... "
    } else {
        " 说说今天的收支 (Enter) "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(layout.input);
    frame.render_widget(block, layout.input);

    let input = app.entry_input.clone().focused(!app.interpreting);
    frame.render_widget(input, inner);

    render_feedback(frame, app, layout.feedback);
    render_recent(frame, app, layout.recent);
}

fn render_feedback(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = &app.settings.currency_symbol;

    let lines = if let Some((message, detail)) = app.entry_feedback() {
        vec![
            Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                detail.to_string(),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else if let Some(txn) = &app.last_saved {
        vec![Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::raw(format!("{} · {} · ", txn.category, txn.summary)),
            Span::styled(
                format!("{}{}", txn.kind.sign(), txn.amount.format_with_symbol(symbol)),
                amount_style(txn.is_income()),
            ),
        ])]
    } else {
        vec![]
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_recent(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = &app.settings.currency_symbol;
    let block = Block::default().borders(Borders::ALL).title(" 最近记录 ");

    let items: Vec<ListItem> = app
        .recent()
        .iter()
        .map(|txn| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<8}", truncate(&txn.category, 6)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!("{:<24}", truncate(&txn.summary, 20))),
                Span::styled(
                    format!("{}{}", txn.kind.sign(), txn.amount.format_with_symbol(symbol)),
                    amount_style(txn.is_income()),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        let text = Paragraph::new("还没有记录。").block(block);
        frame.render_widget(text, area);
    } else {
        frame.render_widget(List::new(items).block(block), area);
    }
}

/// Green for income, red for expense
pub fn amount_style(is_income: bool) -> Style {
    if is_income {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}
