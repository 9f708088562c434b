use eframe::egui;

/// Single-line input with a send button. Returns the trimmed text once the
/// user submits it; whitespace-only input is a no-op and keeps its content.
/// Sending is disabled while a request is awaiting its reply.
pub fn render(ui: &mut egui::Ui, input_text: &mut String, can_send: bool) -> Option<String> {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Sualınızı yazın...")
                .desired_width(ui.available_width() - 80.0),
        );
        if ui
            .add_enabled(can_send, egui::Button::new("Göndər"))
            .clicked()
        {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    if send && can_send {
        let message = input_text.trim().to_string();
        if !message.is_empty() {
            input_text.clear();
            return Some(message);
        }
    }

    None
}
