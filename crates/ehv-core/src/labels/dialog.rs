//! "New label" text-entry dialog and its validation.

/// Why a new label text was refused. Shown inline on the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    #[error("Label text is empty")]
    Empty,
    #[error("Label text is invalid")]
    Invalid,
    #[error("Label already exists")]
    Exists,
}

/// Local checks, in order: empty text, then the reserved default label name.
/// The duplicate check needs the label collection and is done by the scene.
pub fn validate_new_label(text: &str, default_label_name: &str) -> Result<(), LabelError> {
    if text.is_empty() {
        return Err(LabelError::Empty);
    }
    if text == default_label_name {
        return Err(LabelError::Invalid);
    }
    Ok(())
}

/// State of the modal dialog while it is open. Validation only runs when the
/// user confirms; the scene drops the dialog once a confirm succeeds.
#[derive(Debug, Clone, Default)]
pub struct NewLabelDialog {
    text: String,
    error: Option<LabelError>,
}

impl NewLabelDialog {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Editing does not clear a shown error; only the next confirm does.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn error(&self) -> Option<LabelError> {
        self.error
    }

    pub(crate) fn set_error(&mut self, error: Option<LabelError>) {
        self.error = error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_checked_first() {
        assert_eq!(validate_new_label("", ""), Err(LabelError::Empty));
        assert_eq!(validate_new_label("", "Default"), Err(LabelError::Empty));
    }

    #[test]
    fn reserved_name_is_invalid() {
        assert_eq!(validate_new_label("Default", "Default"), Err(LabelError::Invalid));
        assert_eq!(validate_new_label("default", "Default"), Ok(()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(LabelError::Empty.to_string(), "Label text is empty");
        assert_eq!(LabelError::Exists.to_string(), "Label already exists");
    }
}
