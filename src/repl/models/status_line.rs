//! # Status Line Model
//!
//! Encapsulates all state related to the status line display,
//! providing a clean interface for status bar rendering.

/// Status line model containing all status bar display state
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Temporary status message to display
    status_message: Option<String>,

    /// Active profile name
    profile_name: String,

    /// Catalog service the list is loaded from
    base_url: String,
}

impl StatusLine {
    /// Create a new StatusLine with default values
    pub fn new() -> Self {
        Self {
            status_message: None,
            profile_name: "default".to_string(),
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
        }
    }

    // === Status Message Methods ===

    /// Set a temporary status message
    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Get the current status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    // === Profile Methods ===

    pub fn set_profile(&mut self, name: String) {
        self.profile_name = name;
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.to_string();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Text of the left side of the status bar
    ///
    /// `loading` comes from the page state; it outranks any message.
    pub fn left_text(&self, loading: bool) -> String {
        match (loading, self.status_message()) {
            (true, _) => "Loading...".to_string(),
            (false, Some(message)) => message.to_string(),
            (false, None) => format!("{} @ {}", self.profile_name, self.base_url),
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}
