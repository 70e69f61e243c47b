// NoteBoard - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels and applies the actions they raise.

use crate::app::state::{AppState, NoteAction};
use crate::core::model::Theme;
use crate::ui;

/// The NoteBoard application.
pub struct NoteBoardApp {
    pub state: AppState,
    /// Theme whose visuals are currently installed in the egui context.
    applied_theme: Option<Theme>,
}

impl NoteBoardApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            applied_theme: None,
        }
    }
}

impl eframe::App for NoteBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_theme != Some(self.state.theme) {
            ctx.set_visuals(ui::theme::visuals(self.state.theme));
            self.applied_theme = Some(self.state.theme);
        }

        let mut actions: Vec<NoteAction> = Vec::new();

        // Search bar and theme switch
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::panels::toolbar::render(ui, &mut self.state, &mut actions);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.store.len();
                    let visible = self.state.visible_indices.len();
                    if visible == total {
                        ui.label(format!("{total} notes"));
                    } else {
                        ui.label(format!("{visible}/{total} notes"));
                    }
                });
            });
        });

        // Central panel (note grid)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::board::render(ui, &mut self.state, &mut actions);
        });

        if !actions.is_empty() {
            self.state.handle_all(actions);
            // Show the result of the actions without waiting for more input.
            ctx.request_repaint();
        }
    }
}
