use crate::common::{ChatMessage, Organization, Sender};

pub const GREETING: &str = "Salam! Mən ASAN AI köməkçisiyəm. Sizə necə kömək edə bilərəm?";
pub const ERROR_REPLY: &str = "Xəta baş verdi. Zəhmət olmasa yenidən cəhd edin.";

/// Local UI state. Everything here is transient; nothing survives a restart.
pub struct AppState {
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    pub organizations: Vec<Organization>,
    pub selected_org: String,
    pub quick_questions: Vec<String>,
    /// The quick-action block is shown in a fresh transcript and hidden once
    /// the user has asked something; clearing the chat brings it back.
    pub quick_actions_visible: bool,
    /// Request id currently awaiting a reply; doubles as the typing
    /// indicator. One request in flight at a time.
    pending: Option<u64>,
    next_request_id: u64,
}

impl AppState {
    pub fn new(
        organizations: Vec<Organization>,
        selected_org: String,
        quick_questions: Vec<String>,
    ) -> Self {
        let mut state = Self {
            messages: Vec::new(),
            input_text: String::new(),
            organizations,
            selected_org,
            quick_questions,
            quick_actions_visible: true,
            pending: None,
            next_request_id: 0,
        };
        state.push_bot_message(GREETING);
        state
    }

    fn push_user_message(&mut self, text: &str) -> String {
        self.push_message(ChatMessage::new(text, Sender::User))
    }

    fn push_bot_message(&mut self, text: &str) -> String {
        self.push_message(ChatMessage::new(text, Sender::Bot))
    }

    fn push_message(&mut self, message: ChatMessage) -> String {
        let id = message.id.clone();
        self.messages.push(message);
        id
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.pending.is_some()
    }

    /// Begins one exchange: trims the input, refuses whitespace-only text
    /// and refuses while a reply is still awaited. On success the user
    /// message is rendered, quick actions are hidden, and the allocated
    /// request id plus the trimmed text to send are returned.
    pub fn try_begin_send(&mut self, text: &str) -> Option<(u64, String)> {
        let message = text.trim();
        if message.is_empty() || self.is_awaiting_reply() {
            return None;
        }
        self.push_user_message(message);
        self.quick_actions_visible = false;
        Some((self.begin_request(), message.to_string()))
    }

    /// Allocates the next monotonic request id and marks it awaited.
    fn begin_request(&mut self) -> u64 {
        self.next_request_id += 1;
        self.pending = Some(self.next_request_id);
        self.next_request_id
    }

    /// Renders the answer for the awaited request. Replies for anything else
    /// are refused so a straggler cannot overwrite a newer exchange.
    pub fn apply_answer(&mut self, request_id: u64, answer: &str) -> bool {
        if !self.resolve_request(request_id) {
            return false;
        }
        self.push_bot_message(answer);
        true
    }

    /// Renders the fixed fallback for a failed awaited request.
    pub fn apply_failure(&mut self, request_id: u64) -> bool {
        if !self.resolve_request(request_id) {
            return false;
        }
        self.push_bot_message(ERROR_REPLY);
        true
    }

    fn resolve_request(&mut self, request_id: u64) -> bool {
        if self.pending == Some(request_id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Wipes the transcript back to the greeting and restores quick actions.
    /// An in-flight request stays pending; its reply arrives into the fresh
    /// transcript.
    pub fn reset_transcript(&mut self) {
        self.messages.clear();
        self.quick_actions_visible = true;
        self.push_bot_message(GREETING);
    }

    /// Switches the answer domain and announces it in the transcript.
    /// Re-selecting the current organization is not a change.
    pub fn select_org(&mut self, org_id: &str) {
        if self.selected_org == org_id {
            return;
        }
        self.selected_org = org_id.to_string();
        let label = self.selected_org_label().to_string();
        self.push_bot_message(&format!("Siz {label} üçün sorğu verə bilərsiniz."));
    }

    pub fn selected_org_label(&self) -> &str {
        self.organizations
            .iter()
            .find(|org| org.id == self.selected_org)
            .map(|org| org.label.as_str())
            .unwrap_or(self.selected_org.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(
            vec![
                Organization {
                    id: "asan_xidmet".to_string(),
                    label: "ASAN Xidmət".to_string(),
                },
                Organization {
                    id: "dost_merkezi".to_string(),
                    label: "DOST Mərkəzi".to_string(),
                },
            ],
            "asan_xidmet".to_string(),
            vec!["ASAN xidmətin iş saatları necədir?".to_string()],
        )
    }

    #[test]
    fn fresh_state_holds_only_the_greeting() {
        let state = test_state();
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].text, GREETING);
        assert_eq!(state.messages[0].sender, Sender::Bot);
        assert!(state.quick_actions_visible);
        assert!(!state.is_awaiting_reply());
    }

    #[test]
    fn send_then_answer_renders_user_before_bot() {
        let mut state = test_state();
        state.push_user_message("salam");
        let request_id = state.begin_request();
        assert!(state.is_awaiting_reply());

        assert!(state.apply_answer(request_id, "Hello"));
        assert!(!state.is_awaiting_reply());

        let texts: Vec<_> = state.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec![GREETING, "salam", "Hello"]);
        assert_eq!(state.messages[1].sender, Sender::User);
        assert_eq!(state.messages[2].sender, Sender::Bot);
    }

    #[test]
    fn whitespace_only_input_is_a_no_op() {
        let mut state = test_state();
        assert!(state.try_begin_send("   \n\t").is_none());
        assert_eq!(state.messages.len(), 1);
        assert!(!state.is_awaiting_reply());
        assert!(state.quick_actions_visible);
    }

    #[test]
    fn sends_are_refused_while_awaiting_a_reply() {
        let mut state = test_state();
        let (first, _) = state.try_begin_send("birinci").unwrap();

        assert!(state.try_begin_send("ikinci").is_none());
        // Greeting plus the first user message; the refused send left no trace.
        assert_eq!(state.messages.len(), 2);

        assert!(state.apply_answer(first, "cavab"));
        assert!(state.try_begin_send("ikinci").is_some());
    }

    #[test]
    fn successful_send_trims_and_renders_the_user_text() {
        let mut state = test_state();
        let (_, message) = state.try_begin_send("  salam  ").unwrap();

        assert_eq!(message, "salam");
        assert_eq!(state.messages.last().unwrap().text, "salam");
        assert!(state.is_awaiting_reply());
        assert!(!state.quick_actions_visible);
    }

    #[test]
    fn failure_renders_the_fixed_fallback() {
        let mut state = test_state();
        state.push_user_message("salam");
        let request_id = state.begin_request();

        assert!(state.apply_failure(request_id));
        assert_eq!(state.messages.last().unwrap().text, ERROR_REPLY);
        assert!(!state.is_awaiting_reply());
    }

    #[test]
    fn stale_replies_are_refused() {
        let mut state = test_state();
        state.push_user_message("birinci");
        let first = state.begin_request();
        state.apply_failure(first);

        state.push_user_message("ikinci");
        let second = state.begin_request();

        // A straggler for the already-resolved request must not render.
        assert!(!state.apply_answer(first, "köhnə cavab"));
        assert!(state.is_awaiting_reply());

        assert!(state.apply_answer(second, "təzə cavab"));
        assert_eq!(state.messages.last().unwrap().text, "təzə cavab");
    }

    #[test]
    fn request_ids_are_monotonic() {
        let mut state = test_state();
        let first = state.begin_request();
        state.apply_failure(first);
        let second = state.begin_request();
        assert!(second > first);
    }

    #[test]
    fn reset_leaves_exactly_one_greeting() {
        let mut state = test_state();
        state.push_user_message("salam");
        let request_id = state.begin_request();
        state.apply_answer(request_id, "Hello");
        state.quick_actions_visible = false;

        state.reset_transcript();
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].text, GREETING);
        assert!(state.quick_actions_visible);
    }

    #[test]
    fn org_change_announces_the_new_label() {
        let mut state = test_state();
        state.select_org("dost_merkezi");

        assert_eq!(state.selected_org, "dost_merkezi");
        assert_eq!(
            state.messages.last().unwrap().text,
            "Siz DOST Mərkəzi üçün sorğu verə bilərsiniz."
        );
    }

    #[test]
    fn reselecting_the_same_org_adds_nothing() {
        let mut state = test_state();
        let before = state.messages.len();
        state.select_org("asan_xidmet");
        assert_eq!(state.messages.len(), before);
    }

    #[test]
    fn unknown_org_falls_back_to_its_id() {
        let mut state = test_state();
        state.select_org("vergi");
        assert_eq!(state.selected_org_label(), "vergi");
    }
}
