use rand::Rng;

use crate::content::CHAT_REPLIES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Sheep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// Chat history for one study view. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the message and a canned reply. Blank input is ignored.
    pub fn send<R: Rng + ?Sized>(&mut self, text: &str, rng: &mut R) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let reply = CHAT_REPLIES[rng.gen_range(0..CHAT_REPLIES.len())];
        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: text.to_string(),
        });
        self.messages.push(ChatMessage {
            speaker: Speaker::Sheep,
            text: reply.to_string(),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_send_appends_pair() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut chat = ChatSession::new();
        assert!(chat.send("What does this mean?", &mut rng));
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[0].speaker, Speaker::User);
        assert_eq!(chat.messages()[1].speaker, Speaker::Sheep);
        assert!(CHAT_REPLIES.contains(&chat.messages()[1].text.as_str()));
    }

    #[test]
    fn test_blank_ignored() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut chat = ChatSession::new();
        assert!(!chat.send("   ", &mut rng));
        assert!(chat.messages().is_empty());
    }

    #[test]
    fn test_replies_cover_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut chat = ChatSession::new();
        for _ in 0..200 {
            chat.send("?", &mut rng);
        }
        for reply in CHAT_REPLIES {
            assert!(chat.messages().iter().any(|m| m.text == reply));
        }
    }
}
