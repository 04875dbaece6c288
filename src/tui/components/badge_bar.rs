//! # BadgeBar Component
//!
//! One-row bar of "major badges" naming the current selection: the selected
//! module, then the selected type. Activating a badge drills back up to the
//! corresponding level.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BadgeBarState` lives in `TuiState` and caches the badge hit spans
//! - `BadgeBar` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::navigator::Level;
use crate::tui::palette;

/// Persistent state: clickable spans recorded during the last render.
/// Each span is `(start_col, end_col, drill-up level)` relative to the bar.
#[derive(Default)]
pub struct BadgeBarState {
    hit_spans: Vec<(u16, u16, Level)>,
}

impl BadgeBarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The drill-up level of the badge under column `x`, if any.
    pub fn hit_test(&self, x: u16) -> Option<Level> {
        self.hit_spans
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&x))
            .map(|(_, _, level)| *level)
    }
}

/// Transient render wrapper for the badge bar.
pub struct BadgeBar<'a> {
    selected_module: Option<&'a str>,
    selected_type: Option<&'a str>,
    state: &'a mut BadgeBarState,
}

impl<'a> BadgeBar<'a> {
    pub fn new(
        selected_module: Option<&'a str>,
        selected_type: Option<&'a str>,
        state: &'a mut BadgeBarState,
    ) -> Self {
        Self {
            selected_module,
            selected_type,
            state,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.hit_spans.clear();

        let mut spans: Vec<Span> = Vec::new();
        let mut col: u16 = 0;

        // Module badge collapses back to the module list, the type badge
        // back to the type list
        let badges = [
            (self.selected_module, palette::module_badge(), Level::Types),
            (self.selected_type, palette::type_badge(), Level::Members),
        ];

        for (text, color, level) in badges {
            let Some(text) = text else {
                continue;
            };
            let label = format!(" {} ", text);
            let width = label.width() as u16;
            if col + width > area.width {
                break;
            }

            self.state.hit_spans.push((col, col + width, level));
            spans.push(Span::styled(
                label,
                Style::default().fg(Color::White).bg(color),
            ));
            spans.push(Span::raw(" "));
            col += width + 1;
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(module: Option<&str>, ty: Option<&str>) -> (BadgeBarState, String) {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = BadgeBarState::new();

        terminal
            .draw(|f| {
                BadgeBar::new(module, ty, &mut state).render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (state, text)
    }

    #[test]
    fn test_no_selection_renders_nothing() {
        let (state, text) = render(None, None);
        assert!(text.trim().is_empty());
        assert_eq!(state.hit_test(0), None);
    }

    #[test]
    fn test_module_badge_only() {
        let (state, text) = render(Some("Core"), None);
        assert!(text.contains("Core"));
        assert_eq!(state.hit_test(1), Some(Level::Types));
        // Past the badge there is nothing to hit
        assert_eq!(state.hit_test(20), None);
    }

    #[test]
    fn test_both_badges_hit_spans() {
        let (state, text) = render(Some("Core"), Some("Core.Widget"));
        assert!(text.contains("Core"));
        assert!(text.contains("Core.Widget"));

        // " Core " occupies columns 0..6, then a gap, then the type badge
        assert_eq!(state.hit_test(0), Some(Level::Types));
        assert_eq!(state.hit_test(5), Some(Level::Types));
        assert_eq!(state.hit_test(6), None);
        assert_eq!(state.hit_test(7), Some(Level::Members));
    }
}
