//! Chat Transcript
//!
//! Append-only conversation state with the send lifecycle
//! `idle -> awaiting_response -> idle`. There is no streaming state; the
//! assistant reply lands as one complete payload. A failed send keeps the
//! already-appended user turn in place so the transcript shows the
//! unanswered question and the user can retry.

use crate::api::types::{ChatMessage, ChatRole, ChatSource, ChatTurn};

/// Number of prior turns forwarded to the chat endpoint as context.
pub const CHAT_HISTORY_TURNS: usize = 6;

/// Ordered chat transcript plus the in-flight flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True while a send is awaiting the assistant reply.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Replace the transcript with the server-persisted copy.
    pub fn load(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    /// Drop everything, e.g. on sign-out.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.pending = false;
    }

    /// Accept an outgoing message: append the user turn, mark the send
    /// in flight, and hand back the trimmed message plus the context turns
    /// to forward. Returns `None` (a no-op) while a send is pending or
    /// when the input trims to empty.
    pub fn begin_send(&mut self, input: &str) -> Option<(String, Vec<ChatTurn>)> {
        let message = input.trim();
        if message.is_empty() || self.pending {
            return None;
        }

        // Context is the transcript before this turn, capped to the most
        // recent turns.
        let history = self.recent_turns();

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: message.to_string(),
            sources: vec![],
        });
        self.pending = true;

        Some((message.to_string(), history))
    }

    fn recent_turns(&self) -> Vec<ChatTurn> {
        let skip = self.messages.len().saturating_sub(CHAT_HISTORY_TURNS);
        self.messages[skip..]
            .iter()
            .map(|m| ChatTurn {
                role: m.role,
                content: m.content.clone(),
            })
            .collect()
    }

    /// Append the assistant reply and return to idle.
    pub fn complete(&mut self, answer: String, sources: Vec<ChatSource>) {
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: answer,
            sources,
        });
        self.pending = false;
    }

    /// Return to idle after a failed send. The user turn stays in the
    /// transcript; no rollback.
    pub fn fail(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(transcript: &mut Transcript, text: &str) {
        transcript.begin_send(text).expect("send accepted");
        transcript.complete(format!("re: {}", text), vec![]);
    }

    #[test]
    fn test_send_appends_user_turn_and_marks_pending() {
        let mut transcript = Transcript::default();
        let (message, history) = transcript.begin_send("  Which VCs fit?  ").unwrap();

        assert_eq!(message, "Which VCs fit?");
        assert!(history.is_empty());
        assert!(transcript.is_pending());
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].role, ChatRole::User);
        assert_eq!(transcript.messages()[0].content, "Which VCs fit?");
    }

    #[test]
    fn test_send_while_pending_is_noop() {
        let mut transcript = Transcript::default();
        transcript.begin_send("first").unwrap();

        assert!(transcript.begin_send("second").is_none());
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn test_whitespace_only_send_is_noop() {
        let mut transcript = Transcript::default();
        assert!(transcript.begin_send("   \n\t ").is_none());
        assert!(transcript.is_empty());
        assert!(!transcript.is_pending());
    }

    #[test]
    fn test_failed_send_keeps_user_turn_and_resets_pending() {
        let mut transcript = Transcript::default();
        transcript.begin_send("will fail").unwrap();
        transcript.fail();

        assert!(!transcript.is_pending());
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].role, ChatRole::User);

        // Retry is possible after a failure.
        assert!(transcript.begin_send("retry").is_some());
    }

    #[test]
    fn test_complete_appends_assistant_reply() {
        let mut transcript = Transcript::default();
        transcript.begin_send("question").unwrap();
        transcript.complete(
            "answer".to_string(),
            vec![ChatSource {
                title: "Funding report".to_string(),
                url: None,
                source_name: "ET".to_string(),
            }],
        );

        assert!(!transcript.is_pending());
        assert_eq!(transcript.messages().len(), 2);
        assert_eq!(transcript.messages()[1].role, ChatRole::Assistant);
        assert_eq!(transcript.messages()[1].sources.len(), 1);
    }

    #[test]
    fn test_history_is_capped_to_last_turns() {
        let mut transcript = Transcript::default();
        for i in 0..5 {
            send(&mut transcript, &format!("q{}", i));
        }
        assert_eq!(transcript.messages().len(), 10);

        let (_, history) = transcript.begin_send("latest").unwrap();
        assert_eq!(history.len(), CHAT_HISTORY_TURNS);
        // Oldest turns fall off; the newest prior turn is last.
        assert_eq!(history[0].content, "q2");
        assert_eq!(history.last().unwrap().content, "re: q4");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut transcript = Transcript::default();
        transcript.begin_send("hello").unwrap();
        transcript.clear();

        assert!(transcript.is_empty());
        assert!(!transcript.is_pending());
    }
}
