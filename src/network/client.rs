use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    org_id: &'a str,
}

/// The backend also returns `timestamp` and `org`; only the answer is used.
/// A body without `answer` fails deserialization and takes the error path.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    answer: String,
}

#[derive(Debug, Serialize)]
struct FeedbackRequest<'a> {
    message_id: &'a str,
    rating: i32,
}

/// Worker that owns the HTTP client and bridges UI commands to the backend.
pub struct ApiClient {
    http: Client,
    api_url: String,
    event_sender: mpsc::Sender<ApiEvent>,
    command_receiver: mpsc::Receiver<ApiCommand>,
}

impl ApiClient {
    pub fn new(
        api_url: String,
        event_sender: mpsc::Sender<ApiEvent>,
        command_receiver: mpsc::Receiver<ApiCommand>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_url,
            event_sender,
            command_receiver,
        }
    }

    pub async fn run(mut self) {
        log::info!("API worker started for {}", self.api_url);

        while let Some(command) = self.command_receiver.recv().await {
            match command {
                ApiCommand::SendChat {
                    request_id,
                    message,
                    org_id,
                } => {
                    // Spawned so a slow backend never blocks later commands.
                    let http = self.http.clone();
                    let url = format!("{}/api/chat", self.api_url);
                    let events = self.event_sender.clone();
                    tokio::spawn(async move {
                        let event = match post_chat(&http, &url, &message, &org_id).await {
                            Ok(answer) => ApiEvent::AnswerReceived { request_id, answer },
                            Err(err) => {
                                log::error!("Chat request {request_id} failed: {err}");
                                ApiEvent::RequestFailed { request_id }
                            }
                        };
                        if let Err(err) = events.send(event).await {
                            log::warn!("Failed to notify UI about request {request_id}: {err}");
                        }
                    });
                }
                ApiCommand::SendFeedback { message_id, rating } => {
                    let http = self.http.clone();
                    let url = format!("{}/api/feedback", self.api_url);
                    tokio::spawn(async move {
                        let body = FeedbackRequest {
                            message_id: &message_id,
                            rating,
                        };
                        // Fire-and-forget; the response body is ignored.
                        if let Err(err) = http.post(&url).json(&body).send().await {
                            log::warn!("Feedback for message {message_id} not delivered: {err}");
                        }
                    });
                }
            }
        }

        log::info!("Command channel closed; API worker stopping");
    }
}

async fn post_chat(
    http: &Client,
    url: &str,
    message: &str,
    org_id: &str,
) -> Result<String, reqwest::Error> {
    let response = http
        .post(url)
        .json(&ChatRequest { message, org_id })
        .send()
        .await?
        .error_for_status()?;

    let body: ChatResponse = response.json().await?;
    Ok(body.answer)
}
