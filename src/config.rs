use crate::store::ChangeCallback;
use crate::theme::InputTheme;

/// Construction options for [`crate::EmailsInput`].
///
/// All options are optional; `EmailsInputConfig::new()` alone yields an empty
/// control with default styling and no change callback.
#[derive(Default)]
pub struct EmailsInputConfig {
    /// Comma-separated addresses processed as one batch when the control is
    /// attached.
    pub initial_value: String,
    /// Placeholder text shown while the text field is empty.
    pub placeholder: String,
    /// Per-surface style overrides.
    pub theme: InputTheme,
    /// Invoked with the full current address list after every mutation.
    /// No-op when absent.
    pub on_change: Option<ChangeCallback>,
}

impl EmailsInputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn theme(mut self, theme: InputTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(&[String]) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }
}
