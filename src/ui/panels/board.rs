// NoteBoard - ui/panels/board.rs
//
// The note grid: one card per visible note followed by the new-note card,
// laid out GRID_COLUMNS per row.
//
// Cards only read the store. Delete and Save clicks are pushed as actions
// and applied after the frame, so no note is removed while the grid still
// borrows the note list.

use crate::app::state::{AppState, NoteAction};
use crate::core::model::{self, Note};
use crate::ui::theme::{self, Palette};
use crate::util::constants::{DRAFT_HINT, GRID_COLUMNS};

enum Card<'a> {
    Note(&'a Note),
    Draft,
}

/// Render the board (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<NoteAction>) {
    let palette = theme::palette(state.theme);
    let notes = state.store.notes();
    let mut cards: Vec<Card<'_>> = state
        .visible_indices
        .iter()
        .filter_map(|&idx| notes.get(idx))
        .map(Card::Note)
        .collect();
    cards.push(Card::Draft);

    let draft = &mut state.draft;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let width = ui.available_width().min(theme::MAX_BOARD_WIDTH);
            ui.vertical_centered(|ui| {
                ui.set_max_width(width);
                for row in cards.chunks(GRID_COLUMNS) {
                    ui.columns(GRID_COLUMNS, |columns| {
                        for (column, card) in columns.iter_mut().zip(row) {
                            match card {
                                Card::Note(note) => note_card(column, note, &palette, actions),
                                Card::Draft => draft_card(column, draft, &palette, actions),
                            }
                        }
                    });
                    ui.add_space(theme::CARD_GAP);
                }
            });
        });
}

fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::default()
        .fill(palette.card)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .corner_radius(theme::CARD_RADIUS)
        .inner_margin(theme::CARD_PADDING)
}

fn note_card(ui: &mut egui::Ui, note: &Note, palette: &Palette, actions: &mut Vec<NoteAction>) {
    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.set_height(theme::CARD_HEIGHT);

        egui::ScrollArea::vertical()
            .id_salt(("note_text", note.id.as_str()))
            .max_height(theme::CARD_HEIGHT - theme::CARD_FOOTER_HEIGHT)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                // Labels keep the text's own line breaks.
                ui.add(
                    egui::Label::new(egui::RichText::new(&note.text).color(palette.text)).wrap(),
                );
            });

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&note.date).small().color(palette.muted));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let delete = egui::Button::new(
                        egui::RichText::new("\u{1f5d1}").color(palette.muted),
                    )
                    .frame(false);
                    if ui.add(delete).on_hover_text("Delete note").clicked() {
                        actions.push(NoteAction::Delete(note.id.clone()));
                    }
                });
            });
        });
    });
}

fn draft_card(
    ui: &mut egui::Ui,
    draft: &mut String,
    palette: &Palette,
    actions: &mut Vec<NoteAction>,
) {
    card_frame(palette)
        .stroke(egui::Stroke::new(2.0, palette.accent))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_height(theme::CARD_HEIGHT);

            ui.add(
                egui::TextEdit::multiline(draft)
                    .hint_text(DRAFT_HINT)
                    .desired_width(f32::INFINITY)
                    .desired_rows(theme::DRAFT_ROWS)
                    .frame(false),
            );

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(model::today())
                            .small()
                            .color(palette.muted),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let save = egui::Button::new(
                            egui::RichText::new("Save").small().color(egui::Color32::WHITE),
                        )
                        .fill(palette.accent);
                        if ui.add(save).clicked() {
                            actions.push(NoteAction::SaveDraft);
                        }
                    });
                });
            });
        });
}
