use rust_decimal::Decimal;
use std::time::{Duration, Instant};

use crate::models::{parse_amount, Category, Direction};
use crate::store::{BudgetStore, FixedTargets, Rebalance, SpendWeighted};
use crate::view;

/// How long a notification stays in the command bar.
pub(crate) const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Step applied by `+`/`-` in the budget editor.
pub(crate) const EDIT_STEP: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    ResetAll,
}

#[derive(Debug, Clone)]
pub(crate) struct Notification {
    pub(crate) message: String,
    pub(crate) shown_at: Instant,
}

impl Notification {
    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTIFICATION_TTL
    }
}

/// State of the budget edit modal.
#[derive(Debug, Clone)]
pub(crate) struct Editor {
    pub(crate) category_id: String,
    pub(crate) input: String,
    /// Upper bound for `+`, fixed when the editor opens.
    pub(crate) range_max: Decimal,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) show_help: bool,

    pub(crate) store: BudgetStore,
    pub(crate) category_index: usize,
    pub(crate) category_scroll: usize,

    pub(crate) editor: Option<Editor>,

    // AI panel
    pub(crate) suggestion_dismissed: bool,
    pub(crate) auto_adjust: bool,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    pub(crate) notification: Option<Notification>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(store: BudgetStore) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            show_help: false,

            store,
            category_index: 0,
            category_scroll: 0,

            editor: None,

            suggestion_dismissed: false,
            auto_adjust: false,

            pending_action: None,
            confirm_message: String::new(),

            notification: None,

            visible_rows: 10,
        }
    }

    pub(crate) fn selected(&self) -> Option<&Category> {
        self.store.list().get(self.category_index)
    }

    pub(crate) fn notify(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification {
            message: msg.into(),
            shown_at: Instant::now(),
        });
    }

    /// Drop the notification once it has been visible long enough.
    pub(crate) fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.notification = None;
        }
    }

    // ── Editor ───────────────────────────────────────────────

    pub(crate) fn open_editor(&mut self) {
        let Some(cat) = self.selected() else {
            return;
        };
        self.editor = Some(Editor {
            category_id: cat.id.clone(),
            input: cat.budget.to_string(),
            range_max: view::edit_range_max(cat.budget),
        });
        self.input_mode = InputMode::Editing;
    }

    /// Move the editor value by `steps` increments, staying inside the range.
    pub(crate) fn nudge_edit(&mut self, steps: i64) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        let fallback = Category::find_by_id(self.store.list(), &editor.category_id)
            .map(|c| c.budget)
            .unwrap_or(Decimal::ZERO);
        let current = parse_amount(&editor.input).unwrap_or(fallback);
        let next = (current + EDIT_STEP * Decimal::from(steps))
            .max(Decimal::ZERO)
            .min(editor.range_max);
        editor.input = next.to_string();
    }

    /// Validate and apply the editor value. Invalid input keeps the editor
    /// open so it can be corrected.
    pub(crate) fn save_edit(&mut self) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };
        let result = parse_amount(&editor.input)
            .and_then(|amount| self.store.set_budget(&editor.category_id, amount));
        match result {
            Ok(()) => {
                self.close_editor();
                self.notify("Budget updated successfully!");
            }
            Err(e) => {
                tracing::debug!(error = %e, "budget edit rejected");
                self.notify("Please enter a valid budget amount");
            }
        }
    }

    pub(crate) fn close_editor(&mut self) {
        self.editor = None;
        self.input_mode = InputMode::Normal;
    }

    // ── Store actions ────────────────────────────────────────

    pub(crate) fn change_period(&mut self, direction: Direction) {
        let period = self.store.advance_period(direction);
        self.notify(format!("Switched to {period}"));
    }

    pub(crate) fn request_reset(&mut self) {
        self.pending_action = Some(PendingAction::ResetAll);
        self.confirm_message = "Reset all budgets? This sets every budget to $0.00.".into();
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn resolve_confirm(&mut self, accepted: bool) {
        let action = self.pending_action.take();
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();

        if !accepted {
            self.notify("Cancelled");
            return;
        }
        if let Some(PendingAction::ResetAll) = action {
            self.store.reset_all();
            self.notify("All budgets have been reset");
        }
    }

    pub(crate) fn rebalance_suggested(&mut self) {
        self.apply_rebalance(&FixedTargets::suggested());
    }

    pub(crate) fn rebalance_weighted(&mut self) {
        self.apply_rebalance(&SpendWeighted::default());
    }

    fn apply_rebalance(&mut self, policy: &dyn Rebalance) {
        match self.store.rebalance(policy) {
            Ok(0) => self.notify("Budgets already balanced"),
            Ok(_) => self.notify("Budgets rebalanced successfully!"),
            Err(e) => self.notify(format!("Rebalance failed: {e}")),
        }
    }

    pub(crate) fn dismiss_suggestion(&mut self) {
        self.suggestion_dismissed = true;
        self.notify("AI suggestion dismissed");
    }

    pub(crate) fn toggle_auto_adjust(&mut self) {
        self.auto_adjust = !self.auto_adjust;
        if self.auto_adjust {
            self.notify("Auto-adjust enabled for next month");
        } else {
            self.notify("Auto-adjust disabled");
        }
    }

    /// Nothing is persisted; this only acknowledges the request.
    pub(crate) fn save_changes(&mut self) {
        tracing::info!(period = %self.store.period(), "save requested");
        self.notify("All changes saved successfully!");
    }
}
