use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;

use crate::core::navigator::{Level, Navigator};
use crate::tui::components::{BadgeBar, BadgeBarState, ResultList};
use crate::tui::{InputMode, TuiState};
use crate::tui::component::Component;

/// Screen layout: title bar / badge bar / result list / command bar.
fn areas(frame_area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(1), Min(0), Length(3)]).areas(frame_area)
}

pub fn draw_ui(frame: &mut Frame, nav: &Navigator, tui: &mut TuiState) {
    let [title_area, badge_area, main_area, input_area] = areas(frame.area());

    // Title bar
    let title_text = if tui.status.is_empty() {
        "Prism Inspector".to_string()
    } else {
        format!("Prism Inspector | {}", tui.status)
    };
    frame.render_widget(Span::raw(title_text), title_area);

    // Selection badges
    BadgeBar::new(
        nav.selected_module().map(|m| m.name.as_str()),
        nav.selected_type().map(|t| t.full_name.as_str()),
        &mut tui.badge_bar,
    )
    .render(frame, badge_area);

    // Active collection
    let list_focused = matches!(tui.input_mode, InputMode::Cursor);
    ResultList::new(nav, &mut tui.result_list, list_focused).render(frame, main_area);

    // Command entry
    tui.command_bar.dimmed = !matches!(tui.input_mode, InputMode::Input);
    tui.command_bar.render(frame, input_area);
}

/// Hit test against the badge bar: which drill-up level was clicked, if any.
pub fn hit_test_badge(
    col: u16,
    row: u16,
    frame_area: Rect,
    badge_state: &BadgeBarState,
) -> Option<Level> {
    let [_, badge_area, _, _] = areas(frame_area);
    if row != badge_area.y || col < badge_area.x {
        return None;
    }
    badge_state.hit_test(col - badge_area.x)
}

/// Hit test against the result list: which row index was clicked, if any.
/// `first_visible` is the list's scroll offset from the last render.
pub fn hit_test_row(row: u16, frame_area: Rect, first_visible: usize) -> Option<usize> {
    let [_, _, main_area, _] = areas(frame_area);

    // Inside the block borders
    let inner_top = main_area.y + 1;
    let inner_bottom = main_area.y + main_area.height.saturating_sub(1);
    if row < inner_top || row >= inner_bottom {
        return None;
    }

    Some(first_visible + (row - inner_top) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_navigator;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_ui_smoke() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut nav = test_navigator();
        nav.execute_line("types -a Beta").unwrap();
        let mut tui = TuiState::new();
        tui.result_list.reset(nav.count());
        tui.status = "2 types in Beta".to_string();

        terminal
            .draw(|f| {
                draw_ui(f, &nav, &mut tui);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Prism Inspector | 2 types in Beta"));
        assert!(text.contains("Beta.X"));
        assert!(text.contains("Beta.Y"));
        assert!(text.contains("Command"));
    }

    #[test]
    fn test_hit_test_row_maps_screen_to_index() {
        let frame_area = Rect::new(0, 0, 80, 24);
        // List occupies rows 2..21; its first content row is 3
        assert_eq!(hit_test_row(3, frame_area, 0), Some(0));
        assert_eq!(hit_test_row(5, frame_area, 0), Some(2));
        assert_eq!(hit_test_row(5, frame_area, 7), Some(9));
        // Title, badge bar, list border, and command bar rows miss
        assert_eq!(hit_test_row(0, frame_area, 0), None);
        assert_eq!(hit_test_row(1, frame_area, 0), None);
        assert_eq!(hit_test_row(2, frame_area, 0), None);
        assert_eq!(hit_test_row(23, frame_area, 0), None);
    }

    #[test]
    fn test_hit_test_badge_requires_badge_row() {
        let frame_area = Rect::new(0, 0, 80, 24);
        let state = BadgeBarState::new();
        assert_eq!(hit_test_badge(0, 0, frame_area, &state), None);
        assert_eq!(hit_test_badge(0, 1, frame_area, &state), None); // empty bar
    }
}
