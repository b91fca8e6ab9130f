use image::{ImageBuffer, Rgb, RgbImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Bgr,
    Rgb,
}

/// One captured image: 3 interleaved 8-bit channels in `order`.
///
/// The pixels live in an `RgbImage` whatever the order; for BGR frames the
/// first channel of each pixel is blue.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    order: ChannelOrder,
    image: RgbImage,
}

impl Frame {
    pub const CHANNELS: usize = 3;

    /// Returns `None` when `data` does not hold exactly `width * height * 3` bytes.
    #[cfg(any(test, feature = "opencv"))]
    pub fn new(width: u32, height: u32, order: ChannelOrder, data: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * Self::CHANNELS;
        if width == 0 || height == 0 || data.len() != expected {
            return None;
        }

        let image = ImageBuffer::from_raw(width, height, data)?;
        Some(Self { order, image })
    }

    pub fn from_fn(
        width: u32,
        height: u32,
        order: ChannelOrder,
        mut pixel: impl FnMut(u32, u32) -> [u8; 3],
    ) -> Self {
        let image = ImageBuffer::from_fn(width, height, |x, y| Rgb(pixel(x, y)));
        Self { order, image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    pub fn data(&self) -> &[u8] {
        self.image.as_raw()
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.image.into_raw()
    }

    pub fn to_rgb(&self) -> Frame {
        let mut image = self.image.clone();
        if self.order == ChannelOrder::Bgr {
            for pixel in image.pixels_mut() {
                pixel.0.swap(0, 2);
            }
        }

        Frame {
            order: ChannelOrder::Rgb,
            image,
        }
    }
}
