/// Events the API worker sends up to the UI.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    AnswerReceived { request_id: u64, answer: String },
    /// Network error, non-2xx status or unparseable body; all collapse into
    /// the same fallback on the UI side.
    RequestFailed { request_id: u64 },
}
