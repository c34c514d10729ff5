use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{parse_amount, Category};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar};

const SLIDER_WIDTH: usize = 30;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(editor) = app.editor.as_ref() else {
        return;
    };
    let Some(cat) = Category::find_by_id(app.store.list(), &editor.category_id) else {
        return;
    };

    // Slider mirrors the typed value; unparsable input shows as empty
    let slider_ratio = match parse_amount(&editor.input) {
        Ok(amount) if editor.range_max > Decimal::ZERO => {
            (amount / editor.range_max).to_f64().unwrap_or(0.0)
        }
        _ => 0.0,
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Spent this month  ", theme::dim_style()),
            Span::styled(format_amount(cat.spent), theme::normal_style()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Budget  $", theme::dim_style()),
            Span::styled(
                format!("{}_", editor.input),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(progress_bar(slider_ratio, SLIDER_WIDTH), Style::default().fg(theme::ACCENT)),
            Span::styled(format!(" {}", format_amount(editor.range_max)), theme::dim_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  +/- adjust · Enter save · Esc cancel",
            theme::dim_style(),
        )),
    ];

    let popup_height = (lines.len() as u16 + 2).min(area.height);
    let popup_width = 48.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG))
            .title(Span::styled(
                format!(" {} Edit {} Budget ", cat.icon, cat.name),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(popup, popup_area);
}
