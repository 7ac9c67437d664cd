//! Editable text fields and keyboard editing.

use crossterm::event::{KeyCode, KeyModifiers};

/// A text input; single-line fields drop newlines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    multiline: bool,
}

impl TextField {
    pub fn single_line(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            multiline: false,
        }
    }

    pub fn multi_line(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            multiline: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Replace the whole content
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if !self.multiline {
            self.value = flatten(&self.value);
        }
    }

    /// Append pasted or typed text at the end
    pub fn insert_str(&mut self, text: &str) {
        if self.multiline {
            // Terminals paste CRLF on some platforms
            self.value.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
        } else {
            self.value.push_str(&flatten(text));
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

fn flatten(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

/// Apply a key event to the focused field
///
/// Returns true if the key edited the field, false if it is not an editing
/// key for this field and should be handled elsewhere.
pub fn edit_field(field: &mut TextField, key_code: KeyCode, modifiers: KeyModifiers) -> bool {
    match key_code {
        KeyCode::Char(c) => {
            if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                return false;
            }
            field.value.push(c);
            true
        }
        KeyCode::Enter if field.multiline => {
            field.value.push('\n');
            true
        }
        KeyCode::Backspace => {
            if modifiers.contains(KeyModifiers::ALT) {
                // Alt+Backspace deletes the last word
                let end = field.value.trim_end().len();
                field.value.truncate(end);
                let keep = field.value.trim_end_matches(|c: char| !c.is_whitespace()).len();
                field.value.truncate(keep);
            } else {
                field.value.pop();
            }
            true
        }
        _ => false,
    }
}
