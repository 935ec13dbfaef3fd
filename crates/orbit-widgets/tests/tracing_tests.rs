#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Spans and events enabled:
//!   cargo test -p orbit-widgets --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p orbit-widgets --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use orbit_render::Frame;
use orbit_tree::{Color, Tree, TreeNode};
use orbit_widgets::{Navigator, NavigatorState, StatefulWidget};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedEvent {
    level: tracing::Level,
    fields: HashMap<String, String>,
}

#[derive(Default)]
struct Captured {
    spans: Vec<CapturedSpan>,
    events: Vec<CapturedEvent>,
}

/// A tracing Layer that records span metadata and events.
struct Capture(Arc<Mutex<Captured>>);

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.0.lock().unwrap().spans.push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.0.lock().unwrap().events.push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_capture<F: FnOnce()>(f: F) -> Captured {
    let store = Arc::new(Mutex::new(Captured::default()));
    let subscriber = tracing_subscriber::registry().with(Capture(store.clone()));
    tracing::subscriber::with_default(subscriber, f);
    let mut captured = store.lock().unwrap();
    std::mem::take(&mut *captured)
}

fn tree() -> Tree {
    Tree::new(
        TreeNode::new("me", "Me")
            .with_color(Color::rgb(0x22, 0x44, 0x88))
            .child(TreeNode::new("work", "Work").child(TreeNode::new("atlas", "Atlas")))
            .child(TreeNode::new("about", "About")),
    )
    .unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn render_emits_widget_span_with_area() {
    let tree = tree();
    let captured = with_capture(|| {
        let mut frame = Frame::new(40, 16);
        let mut state = NavigatorState::new();
        Navigator::new(&tree).render(frame.bounds(), &mut frame, &mut state);
    });

    let span = captured
        .spans
        .iter()
        .find(|s| s.name == "widget_render")
        .expect("widget_render span");
    assert_eq!(span.fields.get("widget").map(String::as_str), Some("Navigator"));
    assert_eq!(span.fields.get("w").map(String::as_str), Some("40"));
    assert_eq!(span.fields.get("h").map(String::as_str), Some("16"));
}

#[test]
#[cfg(feature = "tracing")]
fn transitions_are_logged_at_debug() {
    let tree = tree();
    let captured = with_capture(|| {
        let mut state = NavigatorState::new();
        state.drill_down(&tree, "work");
        state.drill_down(&tree, "atlas");
        state.go_back();
    });

    let nav_events: Vec<&CapturedEvent> = captured
        .events
        .iter()
        .filter(|e| e.fields.get("message").map(String::as_str) == Some("navigation"))
        .collect();
    assert_eq!(nav_events.len(), 3);
    assert!(nav_events.iter().all(|e| e.level == tracing::Level::DEBUG));
    assert!(nav_events[0].fields["transition"].contains("Descended"));
    assert!(nav_events[1].fields["transition"].contains("LeafSelected"));
    assert!(nav_events[2].fields["transition"].contains("Ascended"));
}

#[test]
#[cfg(feature = "tracing")]
fn stale_path_warns_once_per_render() {
    let tree = tree();
    let other = Tree::new(
        TreeNode::new("x", "X")
            .with_color(Color::rgb(0, 0, 0))
            .child(TreeNode::new("deep", "Deep").child(TreeNode::new("leaf", "Leaf"))),
    )
    .unwrap();
    let captured = with_capture(|| {
        let mut state = NavigatorState::new();
        state.drill_down(&other, "deep");
        let mut frame = Frame::new(30, 10);
        Navigator::new(&tree).render(frame.bounds(), &mut frame, &mut state);
    });
    let warnings = captured
        .events
        .iter()
        .filter(|e| e.level == tracing::Level::WARN)
        .count();
    assert_eq!(warnings, 1);
}

#[test]
#[cfg(not(feature = "tracing"))]
fn zero_overhead_when_disabled() {
    let tree = tree();
    let captured = with_capture(|| {
        let mut frame = Frame::new(40, 16);
        let mut state = NavigatorState::new();
        Navigator::new(&tree).render(frame.bounds(), &mut frame, &mut state);
        state.drill_down(&tree, "work");
    });
    assert!(captured.spans.is_empty());
    assert!(captured.events.is_empty());
}
