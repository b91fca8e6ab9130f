use config::Config;
use error::{AppError, FrameSourceError};
use frame_source::interface::FrameSource;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;
use webcam_viewer::dispatcher::Dispatcher;
use webcam_viewer::listeners::EventListeners;
use webcam_viewer::run_effect::RunEffect;

mod config;
mod error;
mod frame;
mod frame_source;
mod image_classifier;
mod library;
mod overlay;
mod preprocessor;
mod webcam_viewer;

fn main() -> Result<(), AppError> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::install(&config)?);

    let dispatcher = match build_dispatcher(&config, logger.clone()) {
        Ok(dispatcher) => dispatcher,
        Err(err) => {
            logger.error(&format!("Startup failed: {}", err));
            webcam_viewer::gui::show_startup_error(&config, &err.to_string())?;
            return Err(err);
        }
    };

    logger.info("Webcam viewer ready");

    webcam_viewer::gui::run_viewer(&config, dispatcher, logger.clone())?;

    logger.info("Webcam viewer closed");

    Ok(())
}

fn build_dispatcher(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Dispatcher, AppError> {
    let image_classifier =
        ImageClassifierTractOnnx::load(&config.model_path, &config.labels_path, logger.clone())?;

    let frame_source = open_frame_source(config, logger.clone())?;

    let run_effect = RunEffect::new(
        config.clone(),
        logger.clone(),
        frame_source,
        Box::new(image_classifier),
    );

    Ok(Dispatcher::new(
        config.clone(),
        logger,
        EventListeners::default(),
        run_effect,
    ))
}

#[cfg(feature = "opencv")]
fn open_frame_source(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Box<dyn FrameSource>, FrameSourceError> {
    use frame_source::impl_opencv::FrameSourceOpenCv;

    let camera = FrameSourceOpenCv::open(config.camera_device_index, logger)?;
    Ok(Box::new(camera))
}

#[cfg(not(feature = "opencv"))]
fn open_frame_source(
    config: &Config,
    _logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Box<dyn FrameSource>, FrameSourceError> {
    Err(FrameSourceError::DeviceUnavailable {
        index: config.camera_device_index,
        reason: "built without a capture backend, rebuild with `--features opencv`".to_string(),
    })
}
