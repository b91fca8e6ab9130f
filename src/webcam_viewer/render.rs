use crate::webcam_viewer::core::Model;

/// Pixel height of one overlay line at font scale 1.0, in frame pixels.
const LINE_HEIGHT: f32 = 30.0;

/// The video area: the latest annotated frame scaled to fit, with its overlay text on top.
#[derive(Default)]
pub struct VideoView {
    texture: Option<egui::TextureHandle>,
    shown_cycle: u64,
}

impl VideoView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, model: &Model) {
        let Some(annotated) = &model.display else {
            ui.centered_and_justified(|ui| {
                ui.label("Camera idle");
            });
            return;
        };

        let frame = &annotated.frame;
        if self.texture.is_none() || self.shown_cycle != model.stats.cycles_rendered {
            let image = egui::ColorImage::from_rgb(
                [frame.width() as usize, frame.height() as usize],
                frame.data(),
            );
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.texture =
                        Some(ui.ctx().load_texture("video", image, egui::TextureOptions::LINEAR))
                }
            }
            self.shown_cycle = model.stats.cycles_rendered;
        }

        let Some(texture) = &self.texture else {
            return;
        };

        let frame_size = egui::vec2(frame.width() as f32, frame.height() as f32);
        let scale = fit_scale(frame_size, ui.available_size());
        let (rect, _) = ui.allocate_exact_size(frame_size * scale, egui::Sense::hover());
        let painter = ui.painter_at(rect);

        painter.image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        for line in &annotated.lines {
            let [r, g, b] = line.color;
            painter.text(
                rect.min + egui::vec2(line.origin.0, line.origin.1) * scale,
                egui::Align2::LEFT_BOTTOM,
                &line.text,
                egui::FontId::proportional(LINE_HEIGHT * line.font_scale * scale),
                egui::Color32::from_rgb(r, g, b),
            );
        }
    }
}

/// Largest uniform scale that fits `content` inside `available`.
pub fn fit_scale(content: egui::Vec2, available: egui::Vec2) -> f32 {
    if content.x <= 0.0 || content.y <= 0.0 {
        return 1.0;
    }
    let scale = (available.x / content.x).min(available.y / content.y);
    if scale.is_finite() {
        scale.max(0.0)
    } else {
        1.0
    }
}
