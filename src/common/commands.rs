/// Commands the UI sends down to the API worker.
#[derive(Debug, Clone)]
pub enum ApiCommand {
    SendChat {
        /// Monotonic id allocated by the UI; replies carry it back so stale
        /// answers can be told apart from the one currently awaited.
        request_id: u64,
        message: String,
        org_id: String,
    },
    /// Fire-and-forget rating for a bot answer; no reply is expected.
    SendFeedback { message_id: String, rating: i32 },
}
