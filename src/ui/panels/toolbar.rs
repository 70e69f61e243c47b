// NoteBoard - ui/panels/toolbar.rs
//
// Top bar: centred search box and the light/dark switch on the right.

use crate::app::state::{AppState, NoteAction};
use crate::ui::theme;
use crate::util::constants::SEARCH_HINT;

/// Render the top bar. Edits are reported through `actions`.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<NoteAction>) {
    ui.add_space(theme::CARD_GAP / 2.0);
    ui.horizontal(|ui| {
        let spare = (ui.available_width() - theme::SEARCH_WIDTH) / 2.0;
        ui.add_space(spare.max(0.0));

        let response = ui.add(
            egui::TextEdit::singleline(&mut state.search.query)
                .hint_text(SEARCH_HINT)
                .desired_width(theme::SEARCH_WIDTH),
        );
        if response.changed() {
            actions.push(NoteAction::SearchChanged);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let switch = egui::Button::new(theme::toggle_icon(state.theme))
                .min_size(egui::vec2(theme::TOGGLE_SIZE, theme::TOGGLE_SIZE));
            let hover = format!("Switch to {} theme", state.theme.toggled());
            if ui.add(switch).on_hover_text(hover).clicked() {
                actions.push(NoteAction::ToggleTheme);
            }
        });
    });
    ui.add_space(theme::CARD_GAP / 2.0);
}
