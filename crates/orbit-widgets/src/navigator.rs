#![forbid(unsafe_code)]

//! The drill-down navigator ("ecosystem diagram").
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ ‹ Back  Me › Work                            │  breadcrumb row
//! │ Me          ·  ( Apps )  ·                   │  parent ghost + orbit
//! │          ( Web )( WORK )( Talks )            │
//! │             ·  ( Docs )  ·                   │
//! │──────────────────────────────────────────────│
//! │ Work                                         │  description panel
//! │ Client and side projects.                    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The active node is drawn as the center bubble; its children sit on the
//! orbit ring, sized by [`ChildSize`]. Rendering depends only on the tree,
//! the locale, and the [`NavigatorState`].
//!
//! # Input
//!
//! Rendered with a [`HitId`], the widget registers:
//! - child bubbles: [`HitRegion::Content`], data = child index
//! - back control and parent ghost: [`HitRegion::Button`]
//! - breadcrumbs: [`HitRegion::Link`], data = depth
//!
//! [`NavigatorState::handle_mouse`] and [`NavigatorState::handle_key`] map
//! input to navigation transitions.

use orbit_core::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use orbit_core::geometry::Rect;
use orbit_render::drawing::{draw_text_span, ellipse_points};
use orbit_render::{Frame, HitData, HitId, HitRegion, PackedRgba, Style, StyleFlags};
use orbit_tree::{
    CENTER_DIAMETER, ChildSize, NavSnapshot, NavigationState, ORBIT_RADIUS, OrbitLayout,
    Transition, Tree, breadcrumbs, find_node, resolve_child_color, resolve_color,
};

use crate::breadcrumb_bar::{BreadcrumbBar, DEFAULT_BACK_LABEL};
use crate::bubble::{Viewport, draw_bubble, to_rgba};
use crate::description::DescriptionPanel;
use crate::{StatefulWidget, Widget};

/// Largest number of rows given to the description panel.
const MAX_DESCRIPTION_ROWS: u16 = 6;

/// Result of feeding an input event to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavResult {
    /// A navigation transition happened.
    Navigated(Transition),
    /// Keyboard focus moved to this child index.
    FocusMoved(usize),
    /// The event did not apply.
    Ignored,
}

impl From<Transition> for NavResult {
    fn from(t: Transition) -> Self {
        match t {
            Transition::Ignored => Self::Ignored,
            other => Self::Navigated(other),
        }
    }
}

/// Mutable state of a [`Navigator`].
#[derive(Debug, Clone, Default)]
pub struct NavigatorState {
    nav: NavigationState,
    focus: usize,
    viewport: Rect,
}

impl NavigatorState {
    /// Root active, first child focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing navigation state.
    #[must_use]
    pub fn from_navigation(nav: NavigationState) -> Self {
        Self {
            nav,
            ..Self::default()
        }
    }

    /// Start from a snapshot, validated against `tree`.
    #[must_use]
    pub fn restore(tree: &Tree, snapshot: &NavSnapshot) -> Self {
        Self::from_navigation(NavigationState::restore(tree, snapshot))
    }

    /// Current navigation state.
    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    /// Index of the keyboard-focused child.
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Orbit viewport from the last render.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Drill into (or toggle) the child `child_id` of the active node.
    pub fn drill_down(&mut self, tree: &Tree, child_id: &str) -> Transition {
        let t = self.nav.drill_down(tree, child_id);
        self.after(&t);
        t
    }

    /// Activate the child at `index`.
    pub fn activate(&mut self, tree: &Tree, index: usize) -> Transition {
        let t = self.nav.activate_child(tree, index);
        if matches!(t, Transition::LeafSelected { .. } | Transition::LeafCleared { .. }) {
            self.focus = index;
        }
        self.after(&t);
        t
    }

    /// Climb one level.
    pub fn go_back(&mut self) -> Transition {
        let t = self.nav.go_back();
        self.after(&t);
        t
    }

    /// Jump to a breadcrumb depth.
    pub fn jump_to(&mut self, depth: usize) -> Transition {
        let t = self.nav.jump_to(depth);
        self.after(&t);
        t
    }

    fn after(&mut self, t: &Transition) {
        if t.changed_path() {
            self.focus = 0;
        }
    }

    fn child_count(&self, tree: &Tree) -> usize {
        self.nav.active_node(tree).map_or(0, |n| n.children().len())
    }

    /// Handle a mouse event.
    ///
    /// # Arguments
    ///
    /// * `tree`: the tree this state navigates
    /// * `event`: the mouse event from the terminal
    /// * `hit`: result of `frame.hit_test(event.x, event.y)`, if available
    /// * `expected_id`: the `HitId` the navigator was rendered with
    ///
    /// Without a hit, a left click inside the last orbit viewport falls
    /// back to the nearest child bubble under the pointer.
    pub fn handle_mouse(
        &mut self,
        tree: &Tree,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
        expected_id: HitId,
    ) -> NavResult {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return NavResult::Ignored;
        }
        let result = match hit {
            Some((id, region, data)) if id == expected_id => match region {
                HitRegion::Content => self.activate(tree, data as usize).into(),
                HitRegion::Button => self.go_back().into(),
                HitRegion::Link => self.jump_to(data as usize).into(),
                HitRegion::None => NavResult::Ignored,
            },
            Some(_) => NavResult::Ignored,
            None => match self.child_at(tree, event.x, event.y) {
                Some(index) => self.activate(tree, index).into(),
                None => NavResult::Ignored,
            },
        };
        orbit_core::trace!(?result, x = event.x, y = event.y, "navigator mouse");
        result
    }

    /// Child bubble under cell `(x, y)` of the last rendered viewport.
    fn child_at(&self, tree: &Tree, x: u16, y: u16) -> Option<usize> {
        if !self.viewport.contains(x, y) {
            return None;
        }
        let layout = OrbitLayout::compute(self.child_count(tree))?;
        let (px, py) = Viewport::new(self.viewport).to_percent(x, y);
        let index = layout.nearest(px, py)?;
        let pos = layout.positions()[index];
        let reach = layout.size().diameter() / 2.0;
        let dist = ((pos.x - px).powi(2) + (pos.y - py).powi(2)).sqrt();
        (dist <= reach).then_some(index)
    }

    /// Handle a key press.
    ///
    /// | Key                          | Action                    |
    /// |------------------------------|---------------------------|
    /// | `Left` `Up` `BackTab`        | focus previous child      |
    /// | `Right` `Down` `Tab`         | focus next child          |
    /// | `Enter` `Space`              | activate focused child    |
    /// | `Backspace` `Esc`            | back                      |
    /// | `Home`                       | jump to root              |
    /// | `0`-`9`                      | jump to breadcrumb depth  |
    pub fn handle_key(&mut self, tree: &Tree, key: &KeyEvent) -> NavResult {
        if key.kind == KeyEventKind::Release {
            return NavResult::Ignored;
        }
        let n = self.child_count(tree);
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab if n > 0 => {
                self.focus = (self.focus.min(n - 1) + n - 1) % n;
                NavResult::FocusMoved(self.focus)
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Tab if n > 0 => {
                self.focus = (self.focus.min(n - 1) + 1) % n;
                NavResult::FocusMoved(self.focus)
            }
            KeyCode::Enter | KeyCode::Char(' ') if n > 0 => {
                let index = self.focus.min(n - 1);
                self.activate(tree, index).into()
            }
            KeyCode::Backspace | KeyCode::Escape => self.go_back().into(),
            KeyCode::Home => self.jump_to(0).into(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let depth = c.to_digit(10).unwrap_or(0) as usize;
                self.jump_to(depth).into()
            }
            _ => NavResult::Ignored,
        }
    }
}

/// The navigator widget. Borrows the tree; all mutable state lives in
/// [`NavigatorState`].
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    tree: &'a Tree,
    locale: &'a str,
    back_label: &'a str,
    hit_id: Option<HitId>,
    show_description: bool,
}

impl<'a> Navigator<'a> {
    /// Navigator over `tree` with English labels.
    #[must_use]
    pub fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            locale: orbit_core::locale::DEFAULT_LOCALE,
            back_label: DEFAULT_BACK_LABEL,
            hit_id: None,
            show_description: true,
        }
    }

    /// Locale used for labels and descriptions.
    #[must_use]
    pub fn locale(mut self, locale: &'a str) -> Self {
        self.locale = locale;
        self
    }

    /// Text of the back control.
    #[must_use]
    pub fn back_label(mut self, label: &'a str) -> Self {
        self.back_label = label;
        self
    }

    /// Register hit regions under this id.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Show or hide the description panel.
    #[must_use]
    pub fn show_description(mut self, show: bool) -> Self {
        self.show_description = show;
        self
    }

    fn render_parent_ghost(&self, viewport: Rect, frame: &mut Frame, nav: &NavigationState) {
        let path = nav.path();
        let Some((_, parent_path)) = path.split_last() else {
            return;
        };
        let Some(parent) = find_node(self.tree, parent_path) else {
            return;
        };
        let color = to_rgba(resolve_color(self.tree, parent_path));
        let label = parent.label().get(self.locale);
        let style = Style::new().fg(color).dim();
        let end = draw_text_span(
            &mut frame.buffer,
            viewport.x,
            viewport.y,
            label,
            style,
            viewport.right(),
        );
        if let Some(id) = self.hit_id
            && end > viewport.x
        {
            frame.register_hit(
                Rect::new(viewport.x, viewport.y, end - viewport.x, 1),
                id,
                HitRegion::Button,
                0,
            );
        }
    }

    fn render_orbit(&self, viewport: Rect, frame: &mut Frame, state: &NavigatorState) {
        let nav = &state.nav;
        let Some(active) = nav.active_node(self.tree) else {
            return;
        };
        let vp = Viewport::new(viewport);
        let center = vp.to_cells(50.0, 50.0);
        let center_color = to_rgba(resolve_color(self.tree, nav.path()));

        draw_bubble(
            &mut frame.buffer,
            center,
            vp.radii(CENTER_DIAMETER / 2.0),
            viewport,
            center_color,
            active.label().get(self.locale),
            Style::new().bold(),
        );

        let Some(layout) = OrbitLayout::compute(active.children().len()) else {
            return;
        };

        let (rx, ry) = vp.radii(ORBIT_RADIUS);
        let ring = Style::new().fg(center_color.mix(PackedRgba::WHITE, 0.5));
        for (x, y) in ellipse_points(center.0, center.1, rx, ry, viewport) {
            draw_text_span(&mut frame.buffer, x, y, "·", ring, x + 1);
        }

        let radii = vp.radii(ChildSize::diameter(layout.size()) / 2.0);
        let focus = state.focus.min(layout.len() - 1);
        for pos in layout.positions() {
            let Some(child) = active.children().get(pos.index) else {
                continue;
            };
            let mut bg = to_rgba(resolve_child_color(self.tree, nav.path(), child.id()));
            let mut attrs = StyleFlags::empty();
            if nav.selected_leaf() == Some(child.id()) {
                bg = bg.mix(PackedRgba::WHITE, 0.35);
                attrs |= StyleFlags::BOLD;
            }
            if pos.index == focus {
                attrs |= StyleFlags::UNDERLINE;
            }
            let rect = draw_bubble(
                &mut frame.buffer,
                vp.to_cells(pos.x, pos.y),
                radii,
                viewport,
                bg,
                child.label().get(self.locale),
                Style::new().attrs(attrs),
            );
            if let Some(id) = self.hit_id {
                frame.register_hit(rect, id, HitRegion::Content, pos.index as u64);
            }
        }
    }

    fn render_description(&self, area: Rect, frame: &mut Frame, nav: &NavigationState) {
        let (node, color) = match nav.selected_leaf_node(self.tree) {
            Some(leaf) => (
                leaf,
                resolve_child_color(self.tree, nav.path(), leaf.id()),
            ),
            None => match nav.active_node(self.tree) {
                Some(active) => (active, resolve_color(self.tree, nav.path())),
                None => return,
            },
        };
        DescriptionPanel::new(
            node.label().get(self.locale),
            node.description().map(|d| d.get(self.locale)),
        )
        .accent(to_rgba(color))
        .render(area, frame);
    }
}

impl StatefulWidget for Navigator<'_> {
    type State = NavigatorState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Navigator",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }

        let nav = &state.nav;
        let crumbs = breadcrumbs(self.tree, nav.path(), self.locale);
        let accent = to_rgba(resolve_color(self.tree, nav.path()));
        let (top, rest) = area.split_top(1);
        let mut bar = BreadcrumbBar::new(&crumbs)
            .back_label((!nav.is_root()).then_some(self.back_label))
            .accent(accent);
        if let Some(id) = self.hit_id {
            bar = bar.hit_id(id);
        }
        bar.render(top, frame);

        if nav.active_node(self.tree).is_none() {
            orbit_core::warn!(path = ?nav.path(), "navigator path does not resolve");
            state.viewport = Rect::default();
            return;
        }

        let desc_rows = if self.show_description {
            let rows = (rest.height / 3).min(MAX_DESCRIPTION_ROWS);
            if rows >= 2 { rows } else { 0 }
        } else {
            0
        };
        let (middle, bottom) = rest.split_bottom(desc_rows);
        let viewport = middle.centered_square();

        let n = state.child_count(self.tree);
        if n > 0 && state.focus >= n {
            state.focus = 0;
        }
        state.viewport = viewport;

        self.render_orbit(viewport, frame, state);
        self.render_parent_ghost(viewport, frame, &state.nav);
        if !bottom.is_empty() {
            self.render_description(bottom, frame, &state.nav);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_tree::{Color, TreeNode};

    fn tree() -> Tree {
        Tree::new(
            TreeNode::new("me", "Me")
                .with_color(Color::rgb(0x20, 0x20, 0x60))
                .child(
                    TreeNode::new("work", "Work")
                        .with_color(Color::rgb(0xc0, 0x40, 0x20))
                        .child(TreeNode::new("atlas", "Atlas").with_description("Maps."))
                        .child(TreeNode::new("web", "Web")),
                )
                .child(TreeNode::new("about", "About")),
        )
        .unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    #[test]
    fn transition_into_result() {
        assert_eq!(NavResult::from(Transition::Ignored), NavResult::Ignored);
        assert_eq!(
            NavResult::from(Transition::Jumped { depth: 0 }),
            NavResult::Navigated(Transition::Jumped { depth: 0 })
        );
    }

    #[test]
    fn focus_wraps_both_ways() {
        let tree = tree();
        let mut state = NavigatorState::new();
        assert_eq!(state.handle_key(&tree, &key(KeyCode::Left)), NavResult::FocusMoved(1));
        assert_eq!(state.handle_key(&tree, &key(KeyCode::Tab)), NavResult::FocusMoved(0));
        assert_eq!(state.handle_key(&tree, &key(KeyCode::Down)), NavResult::FocusMoved(1));
    }

    #[test]
    fn enter_activates_focused_child_and_resets_focus() {
        let tree = tree();
        let mut state = NavigatorState::new();
        state.handle_key(&tree, &key(KeyCode::Right));
        state.handle_key(&tree, &key(KeyCode::Right));
        assert_eq!(state.focus(), 0);
        assert_eq!(
            state.handle_key(&tree, &key(KeyCode::Enter)),
            NavResult::Navigated(Transition::Descended { id: "work".into() })
        );
        state.handle_key(&tree, &key(KeyCode::Right));
        assert_eq!(state.focus(), 1);
        state.handle_key(&tree, &key(KeyCode::Char(' ')));
        assert_eq!(state.navigation().selected_leaf(), Some("web"));
        assert_eq!(state.focus(), 1);
        state.handle_key(&tree, &key(KeyCode::Backspace));
        assert_eq!(state.focus(), 0);
        assert!(state.navigation().is_root());
    }

    #[test]
    fn digits_and_home_jump() {
        let tree = tree();
        let mut state = NavigatorState::new();
        state.drill_down(&tree, "work");
        state.drill_down(&tree, "atlas");
        assert_eq!(
            state.handle_key(&tree, &key(KeyCode::Char('1'))),
            NavResult::Navigated(Transition::LeafCleared { id: "atlas".into() })
        );
        assert_eq!(
            state.handle_key(&tree, &key(KeyCode::Home)),
            NavResult::Navigated(Transition::Jumped { depth: 0 })
        );
        assert_eq!(state.handle_key(&tree, &key(KeyCode::Escape)), NavResult::Ignored);
    }

    #[test]
    fn release_events_are_ignored() {
        let tree = tree();
        let mut state = NavigatorState::new();
        let release = key(KeyCode::Enter).with_kind(KeyEventKind::Release);
        assert_eq!(state.handle_key(&tree, &release), NavResult::Ignored);
        assert!(state.navigation().is_root());
    }

    #[test]
    fn mouse_dispatches_by_region() {
        let tree = tree();
        let id = HitId::new(1);
        let click = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 0, 0);
        let mut state = NavigatorState::new();

        let r = state.handle_mouse(&tree, &click, Some((id, HitRegion::Content, 0)), id);
        assert_eq!(r, NavResult::Navigated(Transition::Descended { id: "work".into() }));

        let r = state.handle_mouse(&tree, &click, Some((HitId::new(9), HitRegion::Button, 0)), id);
        assert_eq!(r, NavResult::Ignored);

        let r = state.handle_mouse(&tree, &click, Some((id, HitRegion::Link, 0)), id);
        assert_eq!(r, NavResult::Navigated(Transition::Jumped { depth: 0 }));

        let r = state.handle_mouse(&tree, &click, Some((id, HitRegion::Button, 0)), id);
        assert_eq!(r, NavResult::Ignored);
    }

    #[test]
    fn non_left_clicks_are_ignored() {
        let tree = tree();
        let id = HitId::new(1);
        let mut state = NavigatorState::new();
        let right = MouseEvent::new(MouseEventKind::Down(MouseButton::Right), 0, 0);
        let r = state.handle_mouse(&tree, &right, Some((id, HitRegion::Content, 0)), id);
        assert_eq!(r, NavResult::Ignored);
        assert!(state.navigation().is_root());
    }

    #[test]
    fn render_without_hit_grid_uses_geometric_fallback() {
        let tree = tree();
        let mut state = NavigatorState::new();
        let mut frame = Frame::new(60, 24);
        Navigator::new(&tree).render(frame.bounds(), &mut frame, &mut state);
        let vp = state.viewport();
        assert!(!vp.is_empty());

        // First child sits straight above the center.
        let (x, y) = Viewport::new(vp).to_cells(50.0, 30.0);
        let click = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x as u16, y as u16);
        let r = state.handle_mouse(&tree, &click, None, HitId::new(1));
        assert_eq!(r, NavResult::Navigated(Transition::Descended { id: "work".into() }));

        // The center is not a child.
        let (x, y) = Viewport::new(vp).to_cells(50.0, 50.0);
        let click = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x as u16, y as u16);
        assert_eq!(state.handle_mouse(&tree, &click, None, HitId::new(1)), NavResult::Ignored);
    }
}
