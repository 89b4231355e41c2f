//! State for the AI advisor chat page.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAuthor {
    Student,
    Advisor,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub author: ChatAuthor,
    /// Markdown source for advisor messages, plain text for student ones.
    pub content: String,
}

/// Chat page state: history plus whether a reply is pending.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

impl ChatState {
    /// Append the student's message and mark a reply as pending.
    pub fn push_student(&mut self, id: String, content: String) {
        self.messages.push(ChatMessage { id, author: ChatAuthor::Student, content });
        self.pending = true;
    }

    /// Append the advisor's reply and clear the pending flag.
    pub fn push_advisor(&mut self, id: String, content: String) {
        self.messages.push(ChatMessage { id, author: ChatAuthor::Advisor, content });
        self.pending = false;
    }
}
