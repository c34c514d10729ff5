use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::App;
use crate::models::{parse_amount, Category, Direction, Period};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit BudgetRing", cmd_quit, r);
    register_command!("quit", "Quit BudgetRing", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "budget",
        "Set budget (e.g. :budget food 300)",
        cmd_budget,
        r
    );
    register_command!("b", "Set budget (e.g. :b food 300)", cmd_budget, r);
    register_command!("reset", "Reset every budget to $0.00", cmd_reset, r);
    register_command!(
        "rebalance",
        "Apply the suggested reallocation",
        cmd_rebalance,
        r
    );
    register_command!(
        "rebalance-weighted",
        "Reallocate the total budget by share of spend",
        cmd_rebalance_weighted,
        r
    );
    register_command!("next", "Go to next month", cmd_next, r);
    register_command!("prev", "Go to previous month", cmd_prev, r);
    register_command!(
        "period",
        "Jump to a month (e.g. :period March 2026)",
        cmd_period,
        r
    );
    register_command!("p", "Jump to a month (e.g. :p March 2026)", cmd_period, r);
    register_command!("save", "Save all changes", cmd_save, r);
    register_command!("w", "Save all changes", cmd_save, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.notify(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App) -> anyhow::Result<()> {
    // The amount is the last word so names with spaces still work
    let Some((key, amount_str)) = args.rsplit_once(' ') else {
        app.notify("Usage: :budget <category> <amount>");
        return Ok(());
    };

    let Some(id) = Category::find_by_key(app.store.list(), key.trim()).map(|c| c.id.clone())
    else {
        app.notify(format!("Category not found: {}", key.trim()));
        return Ok(());
    };

    let result = parse_amount(amount_str).and_then(|amount| app.store.set_budget(&id, amount));
    match result {
        Ok(()) => app.notify("Budget updated successfully!"),
        Err(e) => app.notify(e.to_string()),
    }
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.request_reset();
    Ok(())
}

fn cmd_rebalance(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.rebalance_suggested();
    Ok(())
}

fn cmd_rebalance_weighted(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.rebalance_weighted();
    Ok(())
}

fn cmd_next(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.change_period(Direction::Next);
    Ok(())
}

fn cmd_prev(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.change_period(Direction::Prev);
    Ok(())
}

fn cmd_period(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.notify(format!("Current period: {}", app.store.period()));
        return Ok(());
    }

    let target = match args.parse::<Period>() {
        Ok(p) => p,
        Err(_) => {
            app.notify("Invalid period. Use <Month> <Year> (e.g. March 2026)");
            return Ok(());
        }
    };

    let delta = app.store.period().months_until(target);
    if delta.unsigned_abs() > MAX_PERIOD_JUMP {
        app.notify(format!("Too far from {}: {target}", app.store.period()));
        return Ok(());
    }

    let direction = if delta > 0 {
        Direction::Next
    } else {
        Direction::Prev
    };
    for _ in 0..delta.unsigned_abs() {
        app.store.advance_period(direction);
    }
    app.notify(format!("Switched to {target}"));
    Ok(())
}

/// Furthest `:period` will move in one go (a century either way).
const MAX_PERIOD_JUMP: u64 = 1200;

fn cmd_save(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.save_changes();
    Ok(())
}
