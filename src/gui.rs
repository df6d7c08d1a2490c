// PicSeek - gui.rs
//
// Top-level eframe::App implementation and interaction controller.
// Each frame: poll upload progress through the sequence-number gate,
// service the command flags set by panels (file picker, pending upload),
// then render menu bar, status bar, and the sliding viewport.

use crate::app::search::SearchManager;
use crate::app::state::SessionState;
use crate::core::model::{LayoutMode, SearchProgress};
use crate::core::transport::SearchClient;
use crate::ui;
use crate::util::constants;

/// The PicSeek application.
pub struct PicSeekApp {
    pub state: SessionState,
    pub search_manager: SearchManager,

    /// One GPU texture per result, in result order. Rebuilt whenever the
    /// result set changes; never the source of truth.
    textures: Vec<egui::TextureHandle>,

    /// Result-set revision the texture cache was last built from.
    textures_revision: u64,

    /// Configured compact-mode thumbnail height.
    thumb_height: f32,
}

impl PicSeekApp {
    /// Create a new application instance.
    pub fn new(state: SessionState, client: SearchClient, thumb_height: f32) -> Self {
        let textures_revision = state.results_revision();
        Self {
            state,
            search_manager: SearchManager::new(client),
            textures: Vec::new(),
            textures_revision,
            thumb_height,
        }
    }

    /// Re-upload the result images as GPU textures.
    fn rebuild_textures(&mut self, ctx: &egui::Context) {
        self.textures_revision = self.state.results_revision();
        self.textures = self
            .state
            .results
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let pixels = egui::ColorImage::from_rgba_unmultiplied(
                    [r.width, r.height],
                    &r.rgba,
                );
                ctx.load_texture(format!("result_{i}"), pixels, egui::TextureOptions::LINEAR)
            })
            .collect();
    }
}

impl eframe::App for PicSeekApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll upload progress. Completions pass through the session
        // state's sequence gate; stale ones mutate nothing.
        let messages = self.search_manager.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                SearchProgress::Started { seq } => {
                    tracing::debug!(seq, "Upload in flight");
                }
                SearchProgress::Completed { seq, results } => {
                    if self.state.apply_search_outcome(seq, Ok(results)) {
                        self.state.status_message =
                            format!("{} matching image(s).", self.state.results.len());
                    }
                }
                SearchProgress::Failed { seq, error } => {
                    if self.state.apply_search_outcome(seq, Err(error)) {
                        self.state.status_message = "Search failed.".to_string();
                    }
                }
            }
        }
        if had_messages || self.state.search_in_progress {
            ctx.request_repaint();
        }

        // Keep the texture cache in lockstep with the result set. The
        // revision counter catches every mutation, including a replacing
        // search whose payload has the same count as the previous one and
        // a reset performed inside a panel.
        if self.textures_revision != self.state.results_revision() {
            self.rebuild_textures(ctx);
        }

        // ---- Command flags set by panels ----
        // request_pick: the query affordance (or File menu) asked for the
        // native file picker. A cancelled dialog is not an error.
        if self.state.request_pick {
            self.state.request_pick = false;
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "webp"])
                .pick_file()
            {
                self.state.pending_upload = Some(path);
            }
        }

        // pending_upload: a file was chosen (picker or CLI); issue the
        // upload and record its sequence number before the next poll.
        if let Some(path) = self.state.pending_upload.take() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            self.state.status_message = format!("Searching with '{name}'\u{2026}");
            let seq = self.search_manager.start_search(path);
            self.state.begin_search(seq);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Search Image\u{2026}").clicked() {
                        self.state.request_pick = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let mut expanded = self.state.mode == LayoutMode::Expanded;
                    if ui.checkbox(&mut expanded, "Expanded layout").clicked() {
                        self.state.mode = if expanded {
                            LayoutMode::Expanded
                        } else {
                            LayoutMode::Compact
                        };
                        ui.close_menu();
                    }
                    let has_results = !self.state.results.is_empty();
                    ui.add_enabled_ui(has_results, |ui| {
                        if ui.button("Clear Results").clicked() {
                            self.state.clear_results();
                            ui.close_menu();
                        }
                    });
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.search_in_progress {
                    ui.spinner();
                    ui.colored_label(ui::theme::BUSY_TEXT, &self.state.status_message);
                } else {
                    ui.label(&self.state.status_message);
                }
                if let Some(ref error) = self.state.last_error {
                    ui.separator();
                    ui.colored_label(ui::theme::ERROR_TEXT, error);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} v{}",
                        constants::APP_NAME,
                        constants::APP_VERSION
                    ));
                });
            });
        });

        // Central sliding viewport (query pane <-> results pane)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::viewport::render(ui, &mut self.state, &self.textures, self.thumb_height);
        });
    }
}
