use eframe::egui;

use crate::ui::state::AppState;

/// Dropdown over the configured organizations. Returns the id of a newly
/// selected organization; re-picking the current one returns nothing.
pub fn render(ui: &mut egui::Ui, state: &AppState) -> Option<String> {
    let mut selected = None;

    egui::ComboBox::from_id_salt("org_selector")
        .selected_text(state.selected_org_label().to_string())
        .show_ui(ui, |ui| {
            for org in &state.organizations {
                let is_current = org.id == state.selected_org;
                if ui.selectable_label(is_current, &org.label).clicked() && !is_current {
                    selected = Some(org.id.clone());
                }
            }
        });

    selected
}
