use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Category;
use crate::store::{FixedTargets, Rebalance};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    if app.suggestion_dismissed {
        lines.push(Line::from(Span::styled(
            "No suggestions right now",
            theme::dim_style(),
        )));
    } else {
        let categories = app.store.list();
        let changes: Vec<(&Category, rust_decimal::Decimal)> = FixedTargets::suggested()
            .propose(categories)
            .into_iter()
            .filter_map(|alloc| {
                Category::find_by_id(categories, &alloc.id)
                    .filter(|c| c.budget != alloc.budget)
                    .map(|c| (c, alloc.budget))
            })
            .collect();

        if changes.is_empty() {
            lines.push(Line::from(Span::styled(
                "Budgets match the suggestion",
                theme::dim_style(),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Suggested rebalance",
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            )));
            for (cat, target) in changes {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {:<10}", truncate(&cat.name, 10)), theme::normal_style()),
                    Span::styled(format_amount(cat.budget), theme::dim_style()),
                    Span::styled(" → ", theme::dim_style()),
                    Span::styled(format_amount(target), Style::default().fg(theme::ACCENT)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " b apply · w by spend · i ignore",
                theme::dim_style(),
            )));
        }
    }

    lines.push(Line::from(""));
    let (label, style) = if app.auto_adjust {
        ("ON", Style::default().fg(theme::GREEN).add_modifier(Modifier::BOLD))
    } else {
        ("OFF", theme::dim_style())
    };
    lines.push(Line::from(vec![
        Span::styled("Auto-adjust next month (a): ", theme::normal_style()),
        Span::styled(label, style),
    ]));

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::MAUVE))
            .title(Span::styled(
                " AI Suggestions ",
                Style::default()
                    .fg(theme::MAUVE)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(panel, area);
}
