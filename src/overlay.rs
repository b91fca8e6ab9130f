use crate::config::OverlayConfig;
use crate::frame::Frame;
use crate::image_classifier::interface::Classification;

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayText {
    pub text: String,
    /// Baseline origin in frame pixels.
    pub origin: (f32, f32),
    pub color: [u8; 3],
    pub font_scale: f32,
}

/// An RGB copy of a captured frame plus the text burned over it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedFrame {
    pub frame: Frame,
    pub lines: Vec<OverlayText>,
}

impl AnnotatedFrame {
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lays out the classification text over an RGB copy of `frame`.
///
/// The pixels are left untouched. The text lines carry their frame-pixel origin, colour and
/// scale, and the video view paints them over the frame when it draws it.
pub fn render(
    frame: &Frame,
    classification: &Classification,
    config: &OverlayConfig,
) -> AnnotatedFrame {
    let texts = [
        format!("Class: {}", classification.label),
        format!("Confidence: {:.2}", classification.confidence),
    ];

    let lines = texts
        .into_iter()
        .zip(config.line_origins)
        .map(|(text, origin)| OverlayText {
            text,
            origin,
            color: config.color,
            font_scale: config.font_scale,
        })
        .collect();

    AnnotatedFrame {
        frame: frame.to_rgb(),
        lines,
    }
}
