//! Scoped capture of the `tracing` channel.

use std::fmt;

use playground_types::LogEntry;
use tracing::field::{Field, Visit};
use tracing::subscriber::{DefaultGuard, Interest};
use tracing::{Dispatch, Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::sink::{LogBook, DIAGNOSTIC_TARGET};

/// `tracing` layer that appends events to a [`LogBook`] as `info` entries.
///
/// Only events at `INFO` or above are captured, and events forwarded by a
/// `LogBook` itself are skipped so nothing is recorded twice. When built
/// with an original dispatcher, every event that dispatcher is interested in
/// is handed to it unchanged.
pub struct CaptureLayer {
    book: LogBook,
    original: Option<Dispatch>,
}

impl CaptureLayer {
    /// Capture only; for composing into a subscriber that already has its
    /// own output layers.
    pub fn new(book: LogBook) -> Self {
        Self {
            book,
            original: None,
        }
    }

    /// Capture and forward to `original`.
    pub fn forwarding(book: LogBook, original: Dispatch) -> Self {
        Self {
            book,
            original: Some(original),
        }
    }

    fn captures(metadata: &Metadata<'_>) -> bool {
        metadata.target() != DIAGNOSTIC_TARGET && *metadata.level() <= Level::INFO
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        match &self.original {
            Some(original) => Self::captures(metadata) || original.enabled(metadata),
            // Never filter a stack we do not own.
            None => true,
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if let Some(original) = &self.original {
            if original.enabled(event.metadata()) {
                original.event(event);
            }
        }
        if Self::captures(event.metadata()) {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            self.book.capture(LogEntry::info(visitor.finish()));
        }
    }
}

/// Joins the event message and its remaining fields with single spaces.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn finish(self) -> String {
        let mut parts = Vec::with_capacity(self.fields.len() + 1);
        parts.extend(self.message);
        parts.extend(self.fields);
        parts.join(" ")
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }
}

/// Installs a [`CaptureLayer`] as the current thread's default subscriber.
pub struct LogInterceptor;

impl LogInterceptor {
    /// Start capturing into `book`.
    ///
    /// The subscriber that was the default before this call keeps receiving
    /// every event it is interested in. Dropping the returned guard restores
    /// it as the default.
    pub fn acquire(book: &LogBook) -> InterceptorGuard {
        let original = tracing::dispatcher::get_default(|current| current.clone());
        let subscriber = tracing_subscriber::registry()
            .with(CaptureLayer::forwarding(book.clone(), original));
        InterceptorGuard {
            _default: tracing::subscriber::set_default(subscriber),
        }
    }
}

/// Releases the interceptor when dropped.
#[must_use = "capture stops as soon as the guard is dropped"]
pub struct InterceptorGuard {
    _default: DefaultGuard,
}

impl fmt::Debug for InterceptorGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorGuard").finish_non_exhaustive()
    }
}
