use crate::error::CaptureFailure;
use crate::frame::Frame;

/// A camera that hands out one frame per call and holds the device until released.
pub trait FrameSource {
    fn read(&mut self) -> Result<Frame, CaptureFailure>;

    /// Releases the device handle. Calling it more than once is a no-op.
    fn release(&mut self);
}
