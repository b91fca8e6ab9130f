use crate::error::CaptureFailure;
use crate::frame::{ChannelOrder, Frame};
use crate::frame_source::interface::FrameSource;
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Synthetic camera: a scrolling colour gradient with a little sensor noise.
/// Scripted reads, if any, are served first.
pub struct FrameSourceFake {
    width: u32,
    height: u32,
    frame_count: u32,
    script: VecDeque<Result<Frame, CaptureFailure>>,
    released: Arc<AtomicBool>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FrameSourceFake {
    pub fn new(size: (u32, u32), logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let logger = logger.with_namespace("frame_source").with_namespace("fake");
        logger.info(&format!("Opened synthetic camera {}x{}", size.0, size.1));

        Self {
            width: size.0.max(1),
            height: size.1.max(1),
            frame_count: 0,
            script: VecDeque::new(),
            released: Arc::new(AtomicBool::new(false)),
            logger,
        }
    }

    pub fn with_script(mut self, script: Vec<Result<Frame, CaptureFailure>>) -> Self {
        self.script = script.into();
        self
    }

    pub fn released_flag(&self) -> Arc<AtomicBool> {
        self.released.clone()
    }

    fn synthesize(&mut self) -> Frame {
        let (width, height) = (self.width, self.height);
        let shift = self.frame_count.wrapping_mul(4) % width;
        let mut rng = rand::rng();

        Frame::from_fn(width, height, ChannelOrder::Bgr, |x, y| {
            let noise: u8 = rng.random_range(0..8);
            let b = ((x + shift) % width * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            let r = 255u8.wrapping_sub(b);
            [
                b.saturating_add(noise),
                g.saturating_add(noise),
                r.saturating_add(noise),
            ]
        })
    }
}

impl FrameSource for FrameSourceFake {
    fn read(&mut self) -> Result<Frame, CaptureFailure> {
        if self.released.load(Ordering::SeqCst) {
            return Err(CaptureFailure::new("camera already released"));
        }

        self.frame_count = self.frame_count.wrapping_add(1);

        match self.script.pop_front() {
            Some(scripted) => scripted,
            None => Ok(self.synthesize()),
        }
    }

    fn release(&mut self) {
        if !self.released.swap(true, Ordering::SeqCst) {
            self.logger.info("Released synthetic camera");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;

    #[test]
    fn test_synthetic_frames_have_configured_size() {
        let mut source = FrameSourceFake::new((64, 48), Arc::new(LoggerFake::new()));

        let frame = source.read().unwrap();

        assert_eq!((frame.width(), frame.height()), (64, 48));
        assert_eq!(frame.order(), ChannelOrder::Bgr);
        assert_eq!(frame.data().len(), 64 * 48 * 3);
    }

    #[test]
    fn test_script_is_served_before_synthetic_frames() {
        let mut source = FrameSourceFake::new((8, 8), Arc::new(LoggerFake::new()))
            .with_script(vec![Err(CaptureFailure::new("unplugged"))]);

        assert_eq!(source.read(), Err(CaptureFailure::new("unplugged")));
        assert!(source.read().is_ok());
    }

    #[test]
    fn test_release_is_idempotent_and_stops_reads() {
        let logger = LoggerFake::new();
        let mut source = FrameSourceFake::new((8, 8), Arc::new(logger.clone()));
        let released = source.released_flag();

        source.release();
        source.release();

        assert!(released.load(Ordering::SeqCst));
        assert!(source.read().is_err());
        let releases = logger
            .entries()
            .iter()
            .filter(|entry| entry.message == "Released synthetic camera")
            .count();
        assert_eq!(releases, 1);
    }
}
