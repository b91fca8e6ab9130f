use crate::error::{CaptureFailure, FrameSourceError};
use crate::frame::{ChannelOrder, Frame};
use crate::frame_source::interface::FrameSource;
use crate::library::logger::interface::Logger;
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};
use std::sync::Arc;

pub struct FrameSourceOpenCv {
    capture: VideoCapture,
    device_index: i32,
    released: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FrameSourceOpenCv {
    pub fn open(
        device_index: i32,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, FrameSourceError> {
        let logger = logger.with_namespace("frame_source").with_namespace("opencv");
        let unavailable = |reason: String| FrameSourceError::DeviceUnavailable {
            index: device_index,
            reason,
        };

        let capture = VideoCapture::new(device_index, videoio::CAP_ANY)
            .map_err(|e| unavailable(e.to_string()))?;

        if !capture.is_opened().map_err(|e| unavailable(e.to_string()))? {
            return Err(unavailable("device could not be opened".to_string()));
        }

        logger.info(&format!("Opened camera device {}", device_index));

        Ok(Self {
            capture,
            device_index,
            released: false,
            logger,
        })
    }
}

impl FrameSource for FrameSourceOpenCv {
    fn read(&mut self) -> Result<Frame, CaptureFailure> {
        if self.released {
            return Err(CaptureFailure::new("camera already released"));
        }

        let mut mat = Mat::default();
        match self.capture.read(&mut mat) {
            Ok(true) => {}
            Ok(false) => return Err(CaptureFailure::new("camera returned no frame")),
            Err(e) => return Err(CaptureFailure::new(e.to_string())),
        }

        if mat.empty() {
            return Err(CaptureFailure::new("camera returned an empty frame"));
        }
        if mat.channels() != 3 {
            return Err(CaptureFailure::new(format!(
                "expected 3 channels, got {}",
                mat.channels()
            )));
        }

        let size = mat.size().map_err(|e| CaptureFailure::new(e.to_string()))?;
        let bytes = mat
            .data_bytes()
            .map_err(|e| CaptureFailure::new(e.to_string()))?
            .to_vec();

        Frame::new(size.width as u32, size.height as u32, ChannelOrder::Bgr, bytes)
            .ok_or_else(|| CaptureFailure::new("frame buffer does not match its dimensions"))
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        match self.capture.release() {
            Ok(()) => self
                .logger
                .info(&format!("Released camera device {}", self.device_index)),
            Err(e) => self.logger.error(&format!(
                "Failed to release camera device {}: {}",
                self.device_index, e
            )),
        }
    }
}

impl Drop for FrameSourceOpenCv {
    fn drop(&mut self) {
        self.release();
    }
}
