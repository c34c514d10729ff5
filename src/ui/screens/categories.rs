use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, progress_bar, truncate};
use crate::view;

/// Terminal rows used by one category card.
pub(crate) const CARD_HEIGHT: usize = 2;

const BAR_WIDTH: usize = 24;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let categories = app.store.list();
    if categories.is_empty() {
        render_empty(f, area);
        return;
    }

    let page = (area.height.saturating_sub(2) as usize / CARD_HEIGHT).max(1);
    let items: Vec<ListItem> = categories
        .iter()
        .enumerate()
        .skip(app.category_scroll)
        .take(page)
        .map(|(i, cat)| {
            let progress = view::category_progress(cat);
            let color = theme::tier_color(progress.tier);

            let name_style = if i == app.category_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let header = Line::from(vec![
                Span::styled(format!(" {} {:<16}", cat.icon, truncate(&cat.name, 16)), name_style),
                Span::styled(
                    format!(" Spent {}", format_amount(cat.spent)),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!("  Budget {}", format_amount(cat.budget)),
                    theme::dim_style(),
                ),
            ]);
            let bar = Line::from(vec![
                Span::raw("    "),
                Span::styled(progress_bar(progress.bar_ratio(), BAR_WIDTH), Style::default().fg(color)),
                Span::styled(
                    format!(" {}", format_percent(progress.percentage)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]);

            ListItem::new(Text::from(vec![header, bar]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .title(Span::styled(
                format!(" Categories ({}) ", categories.len()),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No categories to show", theme::dim_style())),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Categories ", theme::title_style())),
    );
    f.render_widget(msg, area);
}
