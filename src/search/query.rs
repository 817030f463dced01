//! Search tags and live input
//!
//! The search box holds two things: the text being typed right now, and the
//! terms that were committed with Enter. Committed tags are AND-combined by the
//! filter; the live input narrows the result further without being committed.

/// Committed search tags plus the uncommitted input text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagQuery {
    current_input: String,
    tags: Vec<String>,
}

impl TagQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a set of tags (e.g. from the command line)
    ///
    /// Tags go through [`TagQuery::add_tag`], so blanks and duplicates are dropped.
    #[must_use]
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut query = Self::new();
        for tag in tags {
            query.add_tag(tag.as_ref());
        }
        query
    }

    /// Text typed but not yet committed
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Committed tags in insertion order
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether neither tags nor input restrict the listing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.current_input.trim().is_empty()
    }

    /// Commit a search term
    ///
    /// The text is trimmed. Empty text and terms already present are ignored.
    /// On success the live input is cleared. Returns whether a tag was added.
    pub fn add_tag(&mut self, text: &str) -> bool {
        let tag = text.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        self.current_input.clear();
        true
    }

    /// Commit whatever is in the live input
    pub fn commit_input(&mut self) -> bool {
        let input = std::mem::take(&mut self.current_input);
        let added = self.add_tag(&input);
        if !added {
            self.current_input = input;
        }
        added
    }

    /// Remove a tag by exact text; remaining tags keep their order
    pub fn remove_tag(&mut self, text: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != text);
        self.tags.len() != before
    }

    /// Remove the most recently committed tag
    pub fn pop_tag(&mut self) -> Option<String> {
        self.tags.pop()
    }

    /// Drop all tags and the live input
    pub fn clear_all(&mut self) {
        self.tags.clear();
        self.current_input.clear();
    }

    /// Escape-key behaviour of the search box
    ///
    /// Clears only the live input when it holds text, otherwise everything.
    pub fn clear(&mut self) {
        if self.current_input.trim().is_empty() {
            self.clear_all();
        } else {
            self.current_input.clear();
        }
    }

    /// Replace the live input verbatim
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.current_input = text.into();
    }

    /// Append a typed character to the live input
    pub fn push_char(&mut self, c: char) {
        self.current_input.push(c);
    }

    /// Delete the last character of the live input
    pub fn backspace(&mut self) -> bool {
        self.current_input.pop().is_some()
    }
}
