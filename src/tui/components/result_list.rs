//! # ResultList Component
//!
//! Scrollable view of whichever collection is currently active: modules,
//! types, or members. Member rows carry minor badges for access level,
//! static flag, and member kind.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResultListState` lives in `TuiState`
//! - `ResultList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::catalog::MemberInfo;
use crate::core::navigator::{ActiveCollection, Item, Navigator};
use crate::tui::palette;

/// How many rows PageUp/PageDown jump.
const PAGE_JUMP: usize = 10;

/// Persistent selection/scroll state for the result list.
#[derive(Default)]
pub struct ResultListState {
    pub list_state: ListState,
    len: usize,
}

impl ResultListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// First visible row recorded during the last render, for click hit tests.
    pub fn first_visible(&self) -> usize {
        self.list_state.offset()
    }

    /// Reset for a fresh collection of `len` items.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.list_state = ListState::default();
        if len > 0 {
            self.list_state.select(Some(0));
        }
    }

    /// Move the selection to `index`, clamped to the collection.
    pub fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.list_state.select(Some(index.min(self.len - 1)));
        }
    }

    pub fn move_up(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            self.list_state.select(Some(selected.saturating_sub(1)));
        } else if self.len > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn move_down(&mut self) {
        match self.list_state.selected() {
            Some(selected) if self.len > 0 => {
                self.list_state.select(Some((selected + 1).min(self.len - 1)));
            }
            None if self.len > 0 => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    pub fn page_up(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            self.list_state.select(Some(selected.saturating_sub(PAGE_JUMP)));
        }
    }

    pub fn page_down(&mut self) {
        if let Some(selected) = self.list_state.selected()
            && self.len > 0
        {
            self.list_state.select(Some((selected + PAGE_JUMP).min(self.len - 1)));
        }
    }
}

/// Transient render wrapper over the navigator's active collection.
pub struct ResultList<'a> {
    nav: &'a Navigator,
    state: &'a mut ResultListState,
    focused: bool,
}

impl<'a> ResultList<'a> {
    pub fn new(nav: &'a Navigator, state: &'a mut ResultListState, focused: bool) -> Self {
        Self { nav, state, focused }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.len = self.nav.count();

        let title = match self.nav.active_collection() {
            ActiveCollection::Empty => " Results ".to_string(),
            ActiveCollection::Modules => format!(" Modules ({}) ", self.nav.count()),
            ActiveCollection::Types => format!(" Types ({}) ", self.nav.count()),
            ActiveCollection::Members => format!(" Members ({}) ", self.nav.count()),
        };

        let border_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered().title(title).border_style(border_style);

        if self.nav.count() == 0 {
            let empty = Paragraph::new("Nothing to display. Try `modules`.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = (0..self.nav.count())
            .filter_map(|i| self.nav.item_at(i))
            .map(|item| {
                ListItem::new(match item {
                    Item::Module(m) => Line::raw(m.name.clone()),
                    Item::Type(t) => Line::raw(t.full_name.clone()),
                    Item::Member(m) => member_line(m),
                })
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// A member row: padded name followed by its minor badges.
fn member_line(member: &MemberInfo) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{:<28}", member.name))];

    // Properties with split accessors show one badge per accessor
    match (member.get_access, member.set_access) {
        (Some(get), Some(set)) => {
            spans.push(minor_badge(format!("get {}", get.label()), palette::access_badge(get)));
            spans.push(Span::raw(" "));
            spans.push(minor_badge(format!("set {}", set.label()), palette::access_badge(set)));
        }
        _ => {
            spans.push(minor_badge(
                member.access.label().to_string(),
                palette::access_badge(member.access),
            ));
        }
    }

    if member.is_static {
        spans.push(Span::raw(" "));
        spans.push(minor_badge("static".to_string(), palette::static_badge()));
    }

    spans.push(Span::raw(" "));
    spans.push(minor_badge(member.kind.label().to_string(), palette::kind_badge()));

    Line::from(spans)
}

fn minor_badge(text: String, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default().fg(Color::White).bg(color),
    )
}
