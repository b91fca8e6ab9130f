use crate::library::logger::interface::{join_namespace, Logger};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: log::Level,
    pub namespace: Option<String>,
    pub message: String,
}

/// Keeps every message in memory so tests can assert on what was logged.
#[derive(Debug, Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn count(&self, level: log::Level) -> usize {
        self.entries()
            .iter()
            .filter(|entry| entry.level == level)
            .count()
    }
}

impl Logger for LoggerFake {
    fn log(&self, level: log::Level, message: &str) {
        self.entries.lock().unwrap().push(LogEntry {
            level,
            namespace: self.namespace.clone(),
            message: message.to_string(),
        });
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerFake {
            namespace: Some(join_namespace(self.namespace.as_deref(), namespace)),
            entries: self.entries.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_namespaces_share_entries() {
        let logger = LoggerFake::new();
        let child = logger.with_namespace("viewer").with_namespace("poll");

        child.warn("frame dropped");
        logger.info("started");

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].namespace.as_deref(), Some("viewer:poll"));
        assert_eq!(entries[0].level, log::Level::Warn);
        assert_eq!(entries[1].namespace, None);
        assert_eq!(logger.count(log::Level::Warn), 1);
    }
}
