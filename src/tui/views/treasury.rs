//! Treasury view
//!
//! Totals, the category breakdown as gauges, and the narrative report.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::display::plain_report;
use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::TreasuryLayout;

/// Category gauge colours, reused in order
pub const CATEGORY_PALETTE: [Color; 7] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::LightRed,
    Color::LightCyan,
];

/// Palette colour for the `index`-th category
pub fn category_color(index: usize) -> Color {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

/// Render the treasury view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = TreasuryLayout::new(area);
    let summary = app.summary();
    let symbol = app.settings.currency_symbol.as_str();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(layout.totals);

    render_card(frame, cards[0], "支出", summary.expense, symbol, Color::Red);
    render_card(frame, cards[1], "收入", summary.income, symbol, Color::Green);
    let balance_color = if summary.balance.is_negative() {
        Color::Red
    } else {
        Color::Cyan
    };
    render_card(frame, cards[2], "结余", summary.balance, symbol, balance_color);

    // Categories
    let block = Block::default().borders(Borders::ALL).title(" 支出构成 ");
    let inner = block.inner(layout.categories);
    frame.render_widget(block, layout.categories);

    match summary.category_shares() {
        None => {
            frame.render_widget(Paragraph::new("暂无支出。"), inner);
        }
        Some(shares) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(
                    shares
                        .iter()
                        .map(|_| Constraint::Length(1))
                        .chain(std::iter::once(Constraint::Min(0)))
                        .collect::<Vec<_>>(),
                )
                .split(inner);

            for (i, (category, share)) in shares.iter().enumerate() {
                let gauge = Gauge::default()
                    .gauge_style(Style::default().fg(category_color(i)).bg(Color::Black))
                    .ratio((share / 100.0).clamp(0.0, 1.0))
                    .label(format!(
                        "{} {} ({:.1}%)",
                        category.category,
                        category.total.format_with_symbol(symbol),
                        share
                    ));
                frame.render_widget(gauge, rows[i]);
            }
        }
    }

    // Report
    let title = if app.report_pending {
        " 财务简报 (生成中...) "
    } else {
        " 财务简报 "
    };
    let text = match &app.report {
        Some(report) => plain_report(report),
        None if app.report_pending => "正在分析...".to_string(),
        None => "记几笔账后再来看看。".to_string(),
    };
    let report = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(report, layout.report);
}

fn render_card(frame: &mut Frame, area: Rect, label: &str, amount: Money, symbol: &str, color: Color) {
    let lines = vec![Line::from(Span::styled(
        amount.format_with_symbol(symbol),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", label)),
    );
    frame.render_widget(card, area);
}
