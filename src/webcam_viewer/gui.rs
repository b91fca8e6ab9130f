use crate::config::Config;
use crate::error::{AppError, InferenceError};
use crate::library::logger::interface::Logger;
use crate::webcam_viewer::dispatcher::Dispatcher;
use crate::webcam_viewer::listeners::UiSignal;
use crate::webcam_viewer::render::VideoView;
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

struct ViewerWindow {
    dispatcher: Dispatcher,
    video: VideoView,
    shown_title: String,
    failure: Rc<RefCell<Option<InferenceError>>>,
    failed: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ViewerWindow {
    fn fail(&mut self, ctx: &egui::Context, error: InferenceError) {
        self.logger.error(&format!("Inference invariant violated: {}", error));
        *self.failure.borrow_mut() = Some(error);
        self.failed = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = &self.dispatcher.model().title;
        if *title != self.shown_title {
            self.shown_title = title.clone();
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
        }
    }
}

impl eframe::App for ViewerWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.failed {
            return;
        }

        let now = Instant::now();
        if let Err(e) = self.dispatcher.poll_timer(now) {
            self.fail(ctx, e);
            return;
        }

        let mut toggle_clicked = false;
        let model = self.dispatcher.model();
        let video = &mut self.video;

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if ui.button(model.run_state.button_label()).clicked() {
                    toggle_clicked = true;
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| video.show(ui, model));

        if toggle_clicked {
            if let Err(e) = self.dispatcher.emit(UiSignal::ToggleClicked, now) {
                self.fail(ctx, e);
                return;
            }
            ctx.request_repaint();
        }

        self.sync_title(ctx);

        if let Some(wait) = self.dispatcher.time_until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.dispatcher.emit(UiSignal::WindowClosing, Instant::now()) {
            self.logger.error(&format!("Shutdown failed: {}", e));
        }

        let stats = &self.dispatcher.model().stats;
        self.logger.info(&format!(
            "Session ended: {} frames rendered, {} captures failed, {} ticks skipped",
            stats.cycles_rendered, stats.capture_failures, stats.ticks_skipped
        ));
    }
}

fn native_options(config: &Config) -> eframe::NativeOptions {
    let window = &config.window;
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_position([window.position.0, window.position.1])
            .with_inner_size([window.size.0, window.size.1]),
        ..Default::default()
    }
}

/// Blocks on the window's event loop until it closes.
pub fn run_viewer(
    config: &Config,
    dispatcher: Dispatcher,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<(), AppError> {
    let failure = Rc::new(RefCell::new(None));
    let window = ViewerWindow {
        dispatcher,
        video: VideoView::new(),
        shown_title: config.window.title.clone(),
        failure: failure.clone(),
        failed: false,
        logger: logger.with_namespace("gui"),
    };

    eframe::run_native(
        &config.window.title,
        native_options(config),
        Box::new(|_cc| Box::new(window)),
    )
    .map_err(|e| AppError::Gui(e.to_string()))?;

    let failure = failure.borrow_mut().take();
    match failure {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

struct StartupErrorWindow {
    message: String,
}

impl eframe::App for StartupErrorWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Unable to start");
                ui.add_space(8.0);
                ui.label(self.message.as_str());
                ui.add_space(8.0);
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }
}

/// Shows a startup failure to the user and waits for the window to close.
pub fn show_startup_error(config: &Config, message: &str) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([420.0, 160.0])
            .with_resizable(false),
        ..Default::default()
    };
    let window = StartupErrorWindow {
        message: message.to_string(),
    };

    eframe::run_native(
        &config.window.title,
        options,
        Box::new(|_cc| Box::new(window)),
    )
    .map_err(|e| AppError::Gui(e.to_string()))
}
