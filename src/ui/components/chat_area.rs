use eframe::egui;

use crate::common::{ChatMessage, Sender};
use crate::ui::state::AppState;

use super::quick_actions;

/// Intents collected from the transcript during one frame.
#[derive(Default)]
pub struct ChatAreaActions {
    /// (message id, rating) for a clicked feedback button on a bot message.
    pub rating: Option<(String, i32)>,
    pub quick_question: Option<String>,
}

pub fn render(ui: &mut egui::Ui, state: &AppState) -> ChatAreaActions {
    let mut actions = ChatAreaActions::default();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in &state.messages {
                render_message(ui, message, &mut actions);
            }

            if state.quick_actions_visible && !state.quick_questions.is_empty() {
                actions.quick_question = quick_actions::render(
                    ui,
                    &state.quick_questions,
                    !state.is_awaiting_reply(),
                );
            }

            if state.is_awaiting_reply() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new("Yazır...").weak());
                });
            }
        });

    actions
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage, actions: &mut ChatAreaActions) {
    let (tag, tag_color, align) = match message.sender {
        Sender::User => ("Siz", egui::Color32::LIGHT_BLUE, egui::Align::Max),
        Sender::Bot => ("ASAN AI", egui::Color32::LIGHT_GREEN, egui::Align::Min),
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(tag_color, tag);
                ui.label(egui::RichText::new(&message.timestamp).weak().small());
            });
            // Plain labels: newlines become line breaks, markup is never
            // interpreted, for either sender.
            ui.label(&message.text);

            if message.sender == Sender::Bot {
                ui.horizontal(|ui| {
                    if ui.small_button("👍").clicked() {
                        actions.rating = Some((message.id.clone(), 5));
                    }
                    if ui.small_button("👎").clicked() {
                        actions.rating = Some((message.id.clone(), 1));
                    }
                });
            }
        });
    });
    ui.add_space(4.0);
}
