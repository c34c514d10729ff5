use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent};
use crate::view::{self, Tier};

pub(crate) fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled("◀ H  ", theme::dim_style()),
        Span::styled(app.store.period().to_string(), theme::header_style()),
        Span::styled("  L ▶", theme::dim_style()),
    ]);
    let header = Paragraph::new(line)
        .centered()
        .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(header, area);
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let overview = view::overview(app.store.list());
    let tier = Tier::from_percentage(overview.percentage);
    let color = theme::tier_color(tier);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let remaining = overview.remaining();
    let remaining_style = if remaining < Decimal::ZERO {
        Style::default().fg(theme::RED)
    } else {
        Style::default().fg(theme::GREEN)
    };

    let totals = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Spent   ", theme::dim_style()),
            Span::styled(
                format_amount(overview.total_spent),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Budget  ", theme::dim_style()),
            Span::styled(format_amount(overview.total_budget), theme::normal_style()),
        ]),
        Line::from(vec![
            Span::styled("Left    ", theme::dim_style()),
            Span::styled(format_amount(remaining), remaining_style),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Overview ", theme::title_style())),
    );
    f.render_widget(totals, chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(" Total Spent ", theme::title_style())),
        )
        .gauge_style(Style::default().fg(color).bg(theme::SURFACE))
        .ratio(overview.bar_ratio())
        .label(Span::styled(
            format_percent(overview.percentage),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, chunks[1]);
}
