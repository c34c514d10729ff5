use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::models::Direction;
use crate::store::BudgetStore;
use crate::ui::app::{App, InputMode};
use crate::ui::commands;
use crate::ui::render::CHROME_HEIGHT;
use crate::ui::screens::categories::CARD_HEIGHT;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

/// Input poll interval; bounds how late an expired notification disappears.
const TICK: Duration = Duration::from_millis(250);

pub(crate) fn as_tui(store: BudgetStore) -> Result<()> {
    let mut app = App::new(store);
    tracing::info!(period = %app.store.period(), "starting tui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = ?e, "tui exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        app.expire_notification(Instant::now());

        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(CHROME_HEIGHT) as usize;
            app.visible_rows = (content_height / CARD_HEIGHT).max(1);
            crate::ui::render::render(f, app);
        })?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
                InputMode::Editing => handle_editing_input(key, app),
                InputMode::Confirm => handle_confirm_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
            app.running = false;
        }
        KeyCode::Char('s') if ctrl => app.save_changes(),
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.store.list().len();
            scroll_down(&mut app.category_index, &mut app.category_scroll, len, app.visible_rows);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.category_index, &mut app.category_scroll);
        }
        KeyCode::Char('g') => scroll_to_top(&mut app.category_index, &mut app.category_scroll),
        KeyCode::Char('G') => {
            let len = app.store.list().len();
            scroll_to_bottom(&mut app.category_index, &mut app.category_scroll, len, app.visible_rows);
        }
        KeyCode::Enter | KeyCode::Char('e') => app.open_editor(),
        KeyCode::Char('H') | KeyCode::Left => app.change_period(Direction::Prev),
        KeyCode::Char('L') | KeyCode::Right => app.change_period(Direction::Next),
        KeyCode::Char('R') => app.request_reset(),
        KeyCode::Char('b') => app.rebalance_suggested(),
        KeyCode::Char('w') => app.rebalance_weighted(),
        KeyCode::Char('i') => app.dismiss_suggestion(),
        KeyCode::Char('a') => app.toggle_auto_adjust(),
        KeyCode::Char('s') => app.save_changes(),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.notification = None;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.save_edit(),
        KeyCode::Esc => app.close_editor(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => app.nudge_edit(1),
        KeyCode::Char('-') | KeyCode::Down => app.nudge_edit(-1),
        KeyCode::Backspace => {
            if let Some(editor) = app.editor.as_mut() {
                editor.input.pop();
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == ',' => {
            if let Some(editor) = app.editor.as_mut() {
                editor.input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) {
    let accepted = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
    app.resolve_confirm(accepted);
}
