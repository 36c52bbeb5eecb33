//! Injected diagnostic sinks.

use parking_lot::RwLock;
use playground_types::{LogEntry, LogKind};
use std::sync::Arc;

/// `tracing` target used when a [`LogBook`] forwards its entries.
pub const DIAGNOSTIC_TARGET: &str = "playground::diagnostics";

/// Destination for pipeline diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Append one entry.
    fn record(&self, entry: LogEntry);

    fn info(&self, message: &str) {
        self.record(LogEntry::info(message));
    }

    fn error(&self, message: &str) {
        self.record(LogEntry::error(message));
    }

    fn success(&self, message: &str) {
        self.record(LogEntry::success(message));
    }
}

/// Sink shared between the pipeline and host functions.
pub type SharedSink = Arc<dyn DiagnosticSink>;

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn record(&self, entry: LogEntry) {
        (**self).record(entry)
    }
}

/// Ordered, append-only diagnostic log.
///
/// Cloning yields another handle to the same log.
#[derive(Clone, Debug, Default)]
pub struct LogBook {
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl LogBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries in emission order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries.read().iter().map(|e| e.message.clone()).collect()
    }

    pub fn last(&self) -> Option<LogEntry> {
        self.entries.read().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Number of entries of the given kind.
    pub fn count(&self, kind: LogKind) -> usize {
        self.entries.read().iter().filter(|e| e.kind == kind).count()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Append without forwarding. Used for entries that already came from
    /// the `tracing` channel.
    pub(crate) fn capture(&self, entry: LogEntry) {
        self.entries.write().push(entry);
    }
}

impl DiagnosticSink for LogBook {
    fn record(&self, entry: LogEntry) {
        forward(&entry);
        self.entries.write().push(entry);
    }
}

fn forward(entry: &LogEntry) {
    match entry.kind {
        LogKind::Info => tracing::info!(target: DIAGNOSTIC_TARGET, "{}", entry.message),
        LogKind::Success => {
            tracing::info!(target: DIAGNOSTIC_TARGET, outcome = "success", "{}", entry.message)
        }
        LogKind::Error => tracing::error!(target: DIAGNOSTIC_TARGET, "{}", entry.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_emission_order() {
        let book = LogBook::new();
        book.info("first");
        book.error("second");
        book.success("third");
        assert_eq!(book.messages(), vec!["first", "second", "third"]);
        assert_eq!(book.count(LogKind::Error), 1);
        assert_eq!(book.last().unwrap().kind, LogKind::Success);
    }

    #[test]
    fn clones_share_storage() {
        let book = LogBook::new();
        let other = book.clone();
        other.info("from clone");
        assert_eq!(book.len(), 1);
        book.clear();
        assert!(other.is_empty());
    }

    #[test]
    fn shared_sink_records_through_arc() {
        let book = LogBook::new();
        let sink: SharedSink = Arc::new(book.clone());
        sink.info("WASM log: 7");
        assert_eq!(book.entries(), vec![LogEntry::info("WASM log: 7")]);
    }

    #[test]
    fn writes_from_other_threads_are_visible() {
        let book = LogBook::new();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let b = book.clone();
                std::thread::spawn(move || b.info(&format!("thread {i}")))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(book.len(), 4);
    }
}
