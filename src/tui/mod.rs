//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard/mouse events into navigator operations.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! navigator is owned exclusively by the event loop and every operation runs
//! to completion before the next event is taken, so the core sees a strictly
//! sequential stream of instructions.
//!
//! ## Input modes
//!
//! - **Input**: keystrokes edit the command bar; Enter submits the line.
//! - **Cursor**: arrow keys move the result list selection, Enter drills
//!   down into the selected module/type, Backspace (or clicking a selection
//!   badge) drills back up. Esc toggles between the modes and typing
//!   auto-switches back to Input.
//!
//! ## Redraw strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms in `poll` and only
//! redraws after an event arrived.

mod component;
mod components;
mod event;
mod palette;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::Arc;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::catalog::{Catalog, Introspect};
use crate::core::config::ResolvedConfig;
use crate::core::navigator::{ActiveCollection, Item, Level, NavError, Navigator};
use crate::tui::component::EventHandler;
use crate::tui::components::{BadgeBarState, CommandBar, CommandEvent, ResultListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigate the result list with arrow keys. Typing auto-switches to Input.
    Cursor,
    /// Text editing in the command bar. Esc switches to Cursor.
    Input,
}

/// TUI-specific presentation state (not part of the core navigator)
pub struct TuiState {
    pub command_bar: CommandBar,
    pub result_list: ResultListState,
    pub badge_bar: BadgeBarState,
    pub input_mode: InputMode,
    /// Shown in the title bar: the last outcome summary or diagnostic.
    pub status: String,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            command_bar: CommandBar::new(),
            result_list: ResultListState::new(),
            badge_bar: BadgeBarState::new(),
            input_mode: InputMode::Input, // User expects to type immediately
            status: String::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            Show,                        // Show cursor for command editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (mouse capture, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Hide);
    }
}

/// Build an introspection provider from the resolved config.
pub fn build_provider(config: &ResolvedConfig) -> std::io::Result<Arc<dyn Introspect>> {
    match &config.catalog_path {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => Ok(Arc::new(catalog)),
            Err(e) => Err(std::io::Error::other(format!(
                "cannot load catalog {}: {e}",
                path.display()
            ))),
        },
        None => {
            info!("No catalog configured, using the built-in sample");
            Ok(Arc::new(Catalog::sample()))
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config)?;
    let mut nav = Navigator::new(provider);
    let mut tui = TuiState::new();

    if config.list_modules_on_start {
        let outcome = nav.execute_line("modules");
        apply_outcome(&mut tui, &nav, outcome);
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &nav, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // Mouse clicks hit badges and result rows, active in both modes
            if let TuiEvent::MouseClick(col, row) = event {
                let frame_area = terminal.get_frame().area();

                if let Some(level) = ui::hit_test_badge(col, row, frame_area, &tui.badge_bar) {
                    drill_up(&mut nav, &mut tui, level);
                    continue;
                }

                if let Some(index) = ui::hit_test_row(row, frame_area, tui.result_list.first_visible())
                    && index < nav.count()
                {
                    tui.result_list.select(index);
                    drill_down(&mut nav, &mut tui, index);
                }
                continue;
            }

            // Scroll wheel moves the list selection in both modes
            if matches!(event, TuiEvent::ScrollUp) {
                tui.result_list.move_up();
                continue;
            }
            if matches!(event, TuiEvent::ScrollDown) {
                tui.result_list.move_down();
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Input => {
                    // Esc → switch to Cursor mode for list navigation
                    if matches!(event, TuiEvent::Escape) {
                        tui.input_mode = InputMode::Cursor;
                        continue;
                    }

                    // CommandBar handles everything else
                    if let Some(CommandEvent::Submit(line)) = tui.command_bar.handle_event(&event) {
                        info!("Executing command: '{}'", line);
                        let outcome = nav.execute_line(&line);
                        apply_outcome(&mut tui, &nav, outcome);
                    }
                }
                InputMode::Cursor => match event {
                    TuiEvent::Escape => {
                        tui.input_mode = InputMode::Input;
                    }
                    TuiEvent::InputChar('q') => {
                        should_quit = true;
                    }
                    // Typing auto-switches to Input mode and forwards the key
                    TuiEvent::InputChar(_) => {
                        tui.input_mode = InputMode::Input;
                        tui.command_bar.handle_event(&event);
                    }
                    TuiEvent::CursorUp => tui.result_list.move_up(),
                    TuiEvent::CursorDown => tui.result_list.move_down(),
                    TuiEvent::PageUp => tui.result_list.page_up(),
                    TuiEvent::PageDown => tui.result_list.page_down(),
                    TuiEvent::Submit => {
                        if let Some(index) = tui.result_list.selected() {
                            drill_down(&mut nav, &mut tui, index);
                        }
                    }
                    TuiEvent::Backspace => {
                        if let Some(level) = drill_up_level(&nav) {
                            drill_up(&mut nav, &mut tui, level);
                        }
                    }
                    _ => {}
                },
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Record a command outcome: refresh the list selection on success, surface
/// the diagnostic on failure.
fn apply_outcome(tui: &mut TuiState, nav: &Navigator, outcome: Result<(), NavError>) {
    match outcome {
        Ok(()) => {
            tui.result_list.reset(nav.count());
            tui.status = describe(nav);
        }
        Err(e) => {
            warn!("Command rejected: {}", e);
            tui.status = e.to_string();
        }
    }
}

/// Narrow into the selected row: a module expands to its types, a type to
/// its members. Member rows are leaves.
fn drill_down(nav: &mut Navigator, tui: &mut TuiState, index: usize) {
    enum Target {
        Module(String),
        Type(String),
    }

    let target = match nav.item_at(index) {
        Some(Item::Module(m)) => Target::Module(m.name.clone()),
        Some(Item::Type(t)) => Target::Type(t.full_name.clone()),
        _ => return,
    };

    let outcome = match target {
        Target::Module(name) => nav.select_module(&name),
        Target::Type(name) => nav.select_type(&name),
    };
    apply_outcome(tui, nav, outcome);
}

/// The drill-up starting level for the current view, if there is one.
fn drill_up_level(nav: &Navigator) -> Option<Level> {
    match nav.active_collection().level() {
        Some(Level::Modules) | None => None, // already at the top
        Some(level) => Some(level),
    }
}

/// Re-expand one level up and restore the list selection to the previously
/// selected item.
fn drill_up(nav: &mut Navigator, tui: &mut TuiState, from: Level) {
    let restored = nav.drill_up(from);
    tui.result_list.reset(nav.count());
    if let Some(index) = restored {
        tui.result_list.select(index);
    }
    tui.status = describe(nav);
}

/// One-line summary of the active collection for the title bar.
fn describe(nav: &Navigator) -> String {
    match nav.active_collection() {
        ActiveCollection::Empty => "nothing to display".to_string(),
        ActiveCollection::Modules => format!("{} modules", nav.count()),
        ActiveCollection::Types => format!(
            "{} types in {}",
            nav.count(),
            nav.selected_module().map(|m| m.name.as_str()).unwrap_or("?")
        ),
        ActiveCollection::Members => format!(
            "{} members on {}",
            nav.count(),
            nav.selected_type().map(|t| t.full_name.as_str()).unwrap_or("?")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_navigator;

    #[test]
    fn test_describe_per_level() {
        let mut nav = test_navigator();
        assert_eq!(describe(&nav), "nothing to display");

        nav.execute_line("modules").unwrap();
        assert_eq!(describe(&nav), "2 modules");

        nav.execute_line("types -a Beta").unwrap();
        assert_eq!(describe(&nav), "2 types in Beta");

        nav.execute_line("members -t Beta.X").unwrap();
        assert_eq!(describe(&nav), "4 members on Beta.X");
    }

    #[test]
    fn test_apply_outcome_success_resets_selection() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();

        let outcome = nav.execute_line("modules");
        apply_outcome(&mut tui, &nav, outcome);

        assert_eq!(tui.result_list.selected(), Some(0));
        assert_eq!(tui.status, "2 modules");
    }

    #[test]
    fn test_apply_outcome_failure_keeps_selection_and_reports() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();

        let outcome = nav.execute_line("modules");
        apply_outcome(&mut tui, &nav, outcome);

        let outcome = nav.execute_line("bogus");
        apply_outcome(&mut tui, &nav, outcome);

        assert_eq!(tui.result_list.selected(), Some(0));
        assert!(tui.status.contains("unknown command 'bogus'"));
    }

    #[test]
    fn test_drill_down_and_up_restores_selection() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();

        let outcome = nav.execute_line("modules");
        apply_outcome(&mut tui, &nav, outcome);

        // Drill into Beta (index 1)
        tui.result_list.select(1);
        drill_down(&mut nav, &mut tui, 1);
        assert_eq!(nav.active_collection(), ActiveCollection::Types);
        assert_eq!(tui.result_list.selected(), Some(0));

        // Back up: Beta should be re-selected in the module list
        let level = drill_up_level(&nav).expect("types level drills up");
        drill_up(&mut nav, &mut tui, level);
        assert_eq!(nav.active_collection(), ActiveCollection::Modules);
        assert_eq!(tui.result_list.selected(), Some(1));
    }

    #[test]
    fn test_drill_up_level_stops_at_modules() {
        let mut nav = test_navigator();
        assert_eq!(drill_up_level(&nav), None);
        nav.execute_line("modules").unwrap();
        assert_eq!(drill_up_level(&nav), None);
        nav.execute_line("types -a Alpha").unwrap();
        assert_eq!(drill_up_level(&nav), Some(Level::Types));
    }
}
