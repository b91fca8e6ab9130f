use crate::config::Config;
use crate::error::AppError;
use crate::library::logger::interface::{join_namespace, Logger};
use chrono::Utc;
use std::io::Write;
use std::sync::Arc;

const ROOT_TARGET: &str = "webcam_classifier";

/// Forwards namespaced messages to the `log` facade. The namespace becomes the record target.
#[derive(Debug, Clone, Default)]
pub struct LoggerConsole {
    namespace: Option<String>,
}

impl LoggerConsole {
    pub fn new() -> Self {
        Self { namespace: None }
    }

    /// Installs `env_logger` as the global backend with timestamps in the configured timezone.
    pub fn install(config: &Config) -> Result<Self, AppError> {
        let timezone = config.logger_timezone;

        env_logger::Builder::new()
            .filter_level(config.log_level)
            .format(move |buf, record| {
                let local_time = Utc::now().with_timezone(&timezone);
                writeln!(
                    buf,
                    "[{}] {:<5} {}: {}",
                    local_time.format("%Y-%m-%d %I:%M:%S%.3f %p"),
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .try_init()
            .map_err(|e| AppError::Logger(e.to_string()))?;

        Ok(Self::new())
    }
}

impl Logger for LoggerConsole {
    fn log(&self, level: log::Level, message: &str) {
        let target = self.namespace.as_deref().unwrap_or(ROOT_TARGET);
        log::log!(target: target, level, "{}", message);
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole {
            namespace: Some(join_namespace(self.namespace.as_deref(), namespace)),
        })
    }
}
