use serde::{Deserialize, Serialize};

/// Display and voting state for one chat or Q&A message.
///
/// All fields are public and may be reassigned freely after construction.
/// `text_id` and `vote_score` are opaque text: an id such as `"007"` or a
/// score such as `"12%"` is kept exactly as given.
///
/// The JSON shape uses camelCase keys: `textId`, `author`, `avatarImage`,
/// `content`, `isQuestion`, `voted`, `voteScore`. An unset `avatarImage` is
/// omitted on output.
///
/// # Example
///
/// ```rust
/// use compere::message::MessageRecord;
///
/// let msg = MessageRecord::new("Alice", "What time is it?", true, "3", "msg-42", false);
/// assert_eq!(msg.author, "Alice");
/// assert!(msg.avatar_image.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub text_id: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_image: Option<String>,
    pub content: String,
    pub is_question: bool,
    pub voted: bool,
    pub vote_score: String,
}

impl MessageRecord {
    /// Creates a record from the six core fields. The avatar is left unset.
    ///
    /// Arguments are stored as-is; empty strings are accepted.
    pub fn new(
        author: impl Into<String>,
        content: impl Into<String>,
        is_question: bool,
        vote_score: impl Into<String>,
        text_id: impl Into<String>,
        voted: bool,
    ) -> Self {
        Self {
            text_id: text_id.into(),
            author: author.into(),
            avatar_image: None,
            content: content.into(),
            is_question,
            voted,
            vote_score: vote_score.into(),
        }
    }

    /// Assigns the avatar image reference and returns the record.
    pub fn with_avatar_image(mut self, image: impl Into<String>) -> Self {
        self.avatar_image = Some(image.into());
        self
    }
}
