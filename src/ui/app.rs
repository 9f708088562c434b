use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};
use crate::config::AppConfig;

use super::components::{chat_area, input_bar, org_selector};
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<ApiCommand>,
    event_receiver: mpsc::Receiver<ApiEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        command_sender: mpsc::Sender<ApiCommand>,
        event_receiver: mpsc::Receiver<ApiEvent>,
    ) -> Self {
        Self {
            state: AppState::new(
                config.organizations,
                config.default_org,
                config.quick_questions,
            ),
            command_sender,
            event_receiver,
        }
    }

    fn handle_api_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                ApiEvent::AnswerReceived { request_id, answer } => {
                    if !self.state.apply_answer(request_id, &answer) {
                        log::debug!("Ignoring reply for superseded request {request_id}");
                    }
                }
                ApiEvent::RequestFailed { request_id } => {
                    if !self.state.apply_failure(request_id) {
                        log::debug!("Ignoring failure for superseded request {request_id}");
                    }
                }
            }
        }
    }

    /// One exchange: render the user message immediately, then dispatch the
    /// request. The state refuses whitespace-only input and sends while a
    /// previous request is still awaited.
    fn submit_message(&mut self, message: &str) {
        let Some((request_id, message)) = self.state.try_begin_send(message) else {
            return;
        };

        let command = ApiCommand::SendChat {
            request_id,
            message,
            org_id: self.state.selected_org.clone(),
        };
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to API worker: {err}");
            self.state.apply_failure(request_id);
        }
    }

    fn submit_rating(&mut self, message_id: String, rating: i32) {
        let command = ApiCommand::SendFeedback { message_id, rating };
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send feedback to API worker: {err}");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_api_events();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("ASAN AI Köməkçisi");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Söhbəti təmizlə").clicked() {
                        self.state.reset_transcript();
                    }
                    if let Some(org_id) = org_selector::render(ui, &self.state) {
                        self.state.select_org(&org_id);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            let can_send = !self.state.is_awaiting_reply();
            if let Some(content) = input_bar::render(ui, &mut self.state.input_text, can_send) {
                self.submit_message(&content);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let actions = chat_area::render(ui, &self.state);
            if let Some((message_id, rating)) = actions.rating {
                self.submit_rating(message_id, rating);
            }
            if let Some(question) = actions.quick_question {
                self.submit_message(&question);
            }
        });

        ctx.request_repaint();
    }
}
