#![forbid(unsafe_code)]

//! Demo application state and terminal event loop.

use std::cell::Cell;
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use orbit::core::locale::{Subscription, primary_language};
use orbit::render::drawing::draw_text_span;
use orbit::widgets::breadcrumb_bar::DEFAULT_BACK_LABEL;
use orbit::{
    DEFAULT_LOCALE, Error, Event, Frame, HitId, KeyCode, KeyEventKind, Locale, LocaleContext,
    NavResult, NavSnapshot, Navigator, NavigatorState, Presenter, SessionOptions, StatefulWidget,
    Style, TerminalSession, Tree,
};

/// Bundled portfolio tree used when no `--tree` is given.
pub const ECOSYSTEM_JSON: &str = include_str!("../data/ecosystem.json");

/// Hit id the navigator registers its regions under.
pub const NAVIGATOR_ID: HitId = HitId::new(1);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Load the tree from `path`, or the bundled ecosystem.
pub fn load_tree(path: Option<&Path>) -> orbit::Result<Tree> {
    let tree = match path {
        Some(path) => Tree::from_path(path)?,
        None => Tree::from_json_str(ECOSYSTEM_JSON)?,
    };
    tracing::info!(
        nodes = tree.walk().count(),
        locales = ?tree.locales(),
        source = %path.map_or("bundled".into(), |p| p.display().to_string()),
        "tree loaded"
    );
    Ok(tree)
}

/// Read a saved navigation snapshot.
///
/// A missing file is not an error. An unreadable or malformed one is
/// logged and ignored, so the demo starts at the root.
pub fn load_snapshot(path: &Path) -> Option<NavSnapshot> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot read state file");
            return None;
        }
    };
    match serde_json::from_str(&json) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed state file");
            None
        }
    }
}

/// Write `snapshot` to `path` as JSON.
pub fn save_snapshot(path: &Path, snapshot: &NavSnapshot) -> orbit::Result<()> {
    let json = serde_json::to_string_pretty(snapshot).map_err(io::Error::other)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "state saved");
    Ok(())
}

/// Back control text for a locale.
pub fn back_label(locale: &str) -> &'static str {
    match primary_language(locale) {
        "de" => "‹ Zurück",
        "fr" => "‹ Retour",
        "es" => "‹ Atrás",
        _ => DEFAULT_BACK_LABEL,
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Demo state: the tree, the navigator state, and the locale.
pub struct App {
    tree: Tree,
    locales: Vec<Locale>,
    locale: LocaleContext,
    state: NavigatorState,
    dirty: Rc<Cell<bool>>,
    _locale_changes: Subscription,
}

impl App {
    pub fn new(tree: Tree, locale: LocaleContext) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let subscription = locale.subscribe(move |_| flag.set(true));
        let mut locales = tree.locales();
        if locales.is_empty() {
            locales.push(DEFAULT_LOCALE.to_string());
        }
        Self {
            tree,
            locales,
            locale,
            state: NavigatorState::new(),
            dirty,
            _locale_changes: subscription,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    /// Jump to a saved position. Parts that no longer exist in the tree are
    /// dropped.
    pub fn restore(&mut self, snapshot: &NavSnapshot) {
        self.state = NavigatorState::restore(&self.tree, snapshot);
        self.mark_dirty();
    }

    /// Current position, for saving.
    pub fn snapshot(&self) -> NavSnapshot {
        self.state.navigation().snapshot()
    }

    /// Locale currently used for display.
    pub fn locale(&self) -> Locale {
        self.locale.current_locale()
    }

    /// True when state changed since the last render.
    pub fn needs_redraw(&self) -> bool {
        self.dirty.get()
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Draw the navigator and the status line into `frame`.
    pub fn render(&mut self, frame: &mut Frame) {
        frame.clear();
        let (main, status) = frame.bounds().split_bottom(1);
        let locale = self.locale();

        Navigator::new(&self.tree)
            .locale(&locale)
            .back_label(back_label(&locale))
            .hit_id(NAVIGATOR_ID)
            .render(main, frame, &mut self.state);

        if !status.is_empty() {
            let hint = format!(
                " q quit  l locale [{locale}]  \u{2190}\u{2192} focus  enter open  esc back"
            );
            draw_text_span(
                &mut frame.buffer,
                status.x,
                status.y,
                &hint,
                Style::new().dim(),
                status.right(),
            );
        }
        self.dirty.set(false);
    }

    /// Apply one input event. `frame` is the last rendered frame, used for
    /// hit testing.
    pub fn handle_event(&mut self, event: &Event, frame: &Frame) -> Action {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if key.is_char('q') || (key.ctrl() && key.is_char('c')) {
                    return Action::Quit;
                }
                if key.code == KeyCode::Char('l') {
                    self.cycle_locale();
                    return Action::Continue;
                }
                let result = self.state.handle_key(&self.tree, key);
                self.note(result);
            }
            Event::Mouse(mouse) => {
                let hit = frame.hit_test(mouse.x, mouse.y);
                let result = self
                    .state
                    .handle_mouse(&self.tree, mouse, hit, NAVIGATOR_ID);
                self.note(result);
            }
            Event::Resize { .. } => self.mark_dirty(),
            Event::Key(_) | Event::Focus(_) => {}
        }
        Action::Continue
    }

    /// Switch to the next locale found in the tree.
    pub fn cycle_locale(&mut self) {
        let current = self.locale.current_locale();
        let position = self
            .locales
            .iter()
            .position(|l| *l == current)
            .or_else(|| {
                let primary = primary_language(&current);
                self.locales.iter().position(|l| l == primary)
            });
        let next = match position {
            Some(i) => &self.locales[(i + 1) % self.locales.len()],
            None => &self.locales[0],
        };
        tracing::info!(from = %current, to = %next, "locale switched");
        self.locale.set_locale(next.clone());
    }

    fn note(&mut self, result: NavResult) {
        if result != NavResult::Ignored {
            tracing::trace!(?result, "input handled");
            self.mark_dirty();
        }
    }
}

/// Run the demo until the user quits or `exit_after` elapses.
pub fn run(app: &mut App, mouse: bool, exit_after: Option<Duration>) -> orbit::Result<()> {
    let session = TerminalSession::new(SessionOptions {
        alternate_screen: true,
        mouse_capture: mouse,
    })?;
    let (width, height) = session.size()?;
    if width == 0 || height == 0 {
        return Err(Error::Terminal(format!(
            "terminal reports an empty size ({width}x{height})"
        )));
    }
    tracing::info!(width, height, mouse, "demo started");

    let mut frame = Frame::with_hit_grid(width, height);
    let mut presenter = Presenter::new();
    let mut out = io::stdout().lock();
    let started = Instant::now();
    app.mark_dirty();

    loop {
        if app.needs_redraw() {
            app.render(&mut frame);
            presenter.present(&frame.buffer, &mut out)?;
        }
        if exit_after.is_some_and(|limit| started.elapsed() >= limit) {
            tracing::info!("exit timer elapsed");
            break;
        }
        if !session.poll_event(POLL_INTERVAL)? {
            continue;
        }
        let Some(event) = session.read_event()? else {
            continue;
        };
        if let Event::Resize { width, height } = event {
            frame = Frame::with_hit_grid(width, height);
            presenter.invalidate();
        }
        if app.handle_event(&event, &frame) == Action::Quit {
            break;
        }
    }

    tracing::info!(path = ?app.state().navigation().path(), "demo finished");
    Ok(())
}
