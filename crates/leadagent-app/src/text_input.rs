//! Editable text fields (product description, subject, body template)

/// A single edit applied to a [`TextField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Newline,
    Backspace,
    Clear,
}

/// Append-only text buffer with a cursor pinned at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    multiline: bool,
}

impl TextField {
    pub fn single_line() -> Self {
        Self {
            value: String::new(),
            multiline: false,
        }
    }

    pub fn multi_line() -> Self {
        Self {
            value: String::new(),
            multiline: true,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set(value);
        self
    }

    pub fn apply(&mut self, edit: TextEdit) {
        match edit {
            TextEdit::Insert(c) if c == '\n' => self.apply(TextEdit::Newline),
            TextEdit::Insert(c) => self.value.push(c),
            TextEdit::Newline => {
                if self.multiline {
                    self.value.push('\n');
                }
            }
            TextEdit::Backspace => {
                self.value.pop();
            }
            TextEdit::Clear => self.value.clear(),
        }
    }

    /// Replace the content; newlines are dropped from single-line fields.
    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.value = if self.multiline {
            value
        } else {
            value.replace(['\n', '\r'], " ")
        };
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// True when the content is empty after trimming whitespace
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }
}
