use crate::error::PreprocessError;
use crate::frame::Frame;
use fast_image_resize as fr;
use tract_onnx::prelude::tract_ndarray::{Array3, Array4, Axis};

/// Side length of the square image the model was trained on.
pub const MODEL_INPUT_SIZE: usize = 224;

/// A resized, normalized RGB copy of a frame in HWC layout, values in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: Array3<f32>,
}

impl ImageTensor {
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    #[cfg(test)]
    pub fn get(&self, y: usize, x: usize, channel: usize) -> f32 {
        self.data[[y, x, channel]]
    }

    #[cfg(test)]
    pub fn values(&self) -> impl Iterator<Item = &f32> {
        self.data.iter()
    }

    /// Adds the leading batch axis, giving NHWC `[1, 224, 224, 3]`.
    pub fn into_batch(self) -> Array4<f32> {
        self.data.insert_axis(Axis(0))
    }
}

/// Converts BGR to RGB, resizes to 224x224 and scales to `[0, 1]`.
///
/// Shrinking averages each output pixel's footprint. Enlarging, on either axis, interpolates
/// bilinearly.
pub fn preprocess(frame: &Frame) -> Result<ImageTensor, PreprocessError> {
    let rgb = frame.to_rgb();
    let (width, height) = (rgb.width(), rgb.height());
    let size = MODEL_INPUT_SIZE as u32;

    let src = fr::images::Image::from_vec_u8(width, height, rgb.into_raw(), fr::PixelType::U8x3)
        .map_err(|e| PreprocessError::Resize(e.to_string()))?;
    let mut dst = fr::images::Image::new(size, size, fr::PixelType::U8x3);

    let options = fr::ResizeOptions::new().resize_alg(resize_alg(width, height));
    fr::Resizer::new()
        .resize(&src, &mut dst, &options)
        .map_err(|e| PreprocessError::Resize(e.to_string()))?;

    let values: Vec<f32> = dst.buffer().iter().map(|v| *v as f32 / 255.0).collect();
    let shape = (MODEL_INPUT_SIZE, MODEL_INPUT_SIZE, Frame::CHANNELS);
    let data = Array3::from_shape_vec(shape, values)
        .map_err(|e| PreprocessError::Layout(e.to_string()))?;

    Ok(ImageTensor { data })
}

fn resize_alg(width: u32, height: u32) -> fr::ResizeAlg {
    let size = MODEL_INPUT_SIZE as u32;
    if width >= size && height >= size {
        fr::ResizeAlg::Convolution(fr::FilterType::Box)
    } else {
        fr::ResizeAlg::Convolution(fr::FilterType::Bilinear)
    }
}
