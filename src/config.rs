use chrono::Offset;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Baseline origin of each text line, in frame pixels.
    pub line_origins: [(f32, f32); 2],
    pub color: [u8; 3],
    pub font_scale: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub title_prefix: String,
    pub position: (f32, f32),
    pub size: (f32, f32),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub poll_interval: Duration,
    pub camera_device_index: i32,
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    pub window: WindowConfig,
    pub overlay: OverlayConfig,
    pub log_level: log::LevelFilter,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            camera_device_index: 0,
            model_path: PathBuf::from("keras_Model.onnx"),
            labels_path: PathBuf::from("labels.txt"),
            window: WindowConfig {
                title: "Webcam Viewer with Prediction".to_string(),
                title_prefix: "Webcam Viewer".to_string(),
                position: (100.0, 100.0),
                size: (640.0, 480.0),
            },
            overlay: OverlayConfig {
                line_origins: [(10.0, 30.0), (10.0, 70.0)],
                color: [0, 255, 0],
                font_scale: 1.0,
            },
            log_level: log::LevelFilter::Info,
            logger_timezone: chrono::Utc.fix(),
        }
    }
}
