use std::sync::Arc;

pub trait Logger: Send + Sync {
    fn log(&self, level: log::Level, message: &str);
    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync>;

    fn debug(&self, message: &str) {
        self.log(log::Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(log::Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(log::Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(log::Level::Error, message);
    }
}

pub fn join_namespace(current: Option<&str>, namespace: &str) -> String {
    match current {
        Some(current) => format!("{}:{}", current, namespace),
        None => namespace.to_string(),
    }
}
