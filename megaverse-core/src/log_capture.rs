//! Records the level of every tracing event emitted on the current thread.

use std::sync::{Arc, Mutex};

use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Clone, Default)]
pub(crate) struct CapturedLevels(Arc<Mutex<Vec<Level>>>);

impl CapturedLevels {
    /// Installs a capturing subscriber until the guard is dropped.
    pub(crate) fn install() -> (Self, DefaultGuard) {
        let captured = Self::default();
        let subscriber = Registry::default().with(captured.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (captured, guard)
    }

    pub(crate) fn count(&self, level: Level) -> usize {
        self.0.lock().unwrap().iter().filter(|l| **l == level).count()
    }

    pub(crate) fn total(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl<S: Subscriber> Layer<S> for CapturedLevels {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}
