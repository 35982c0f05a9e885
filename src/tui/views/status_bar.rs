//! Status bar view
//!
//! Shows the record count, balance, the current status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = app.summary();
    let symbol = app.settings.currency_symbol.as_str();

    let mut spans = vec![Span::styled(
        format!(" {} 条 ", summary.transaction_count),
        Style::default().fg(Color::White),
    )];

    spans.push(Span::raw("│ "));
    let balance_color = if summary.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };
    spans.push(Span::styled(
        summary.balance.format_with_symbol(symbol),
        Style::default()
            .fg(balance_color)
            .add_modifier(Modifier::BOLD),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.active_view {
        ActiveView::Scribe => " Enter:Record  Tab:Next  Esc:Quit ",
        ActiveView::Treasury => " 1/2/3:Tabs  Tab:Next  q:Quit ",
        ActiveView::Archives => " j/k:Scroll  1/2/3:Tabs  q:Quit ",
    };

    let left_width: usize = spans.iter().map(|s| s.width()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_width)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
