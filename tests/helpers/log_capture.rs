//! Capture warnings emitted through `tracing`

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Layer collecting the message of every WARN event
#[derive(Clone, Default)]
pub struct WarningCollector {
    messages: Arc<Mutex<Vec<String>>>,
}

impl WarningCollector {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for WarningCollector {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            self.messages.lock().unwrap().push(visitor.0);
        }
    }
}

/// Run `f` with a subscriber that records warnings; returns its output and the warnings
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let collector = WarningCollector::default();
    let subscriber = tracing_subscriber::registry().with(collector.clone());
    let output = tracing::subscriber::with_default(subscriber, f);
    (output, collector.messages())
}
