use eframe::egui;

/// Preset question buttons shown in a fresh transcript. A click submits the
/// question as if the user had typed it. Disabled while a reply is awaited,
/// like the send button, so a click cannot be silently dropped.
pub fn render(ui: &mut egui::Ui, questions: &[String], enabled: bool) -> Option<String> {
    let mut picked = None;

    ui.add_space(4.0);
    ui.label(egui::RichText::new("Tez-tez verilən suallar:").weak());
    ui.horizontal_wrapped(|ui| {
        for question in questions {
            if ui.add_enabled(enabled, egui::Button::new(question)).clicked() {
                picked = Some(question.clone());
            }
        }
    });

    picked
}
