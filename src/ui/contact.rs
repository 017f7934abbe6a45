//! Contact-form submission outcome
//!
//! The submit handler maps the network result onto one of two fixed status
//! lines. The strings are the site's user-facing copy.

/// Result of one form submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx response: message delivered, form cleared
    Sent,
    /// Non-2xx response or any network/request failure
    Failed,
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Sent => "Message sent successfully!",
            SubmitOutcome::Failed => "Oops, terjadi kesalahan. \u{274c}",
        }
    }

    /// Inline status color
    pub fn color(&self) -> &'static str {
        match self {
            SubmitOutcome::Sent => "green",
            SubmitOutcome::Failed => "red",
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(SubmitOutcome::Sent.message(), "Message sent successfully!");
        assert!(SubmitOutcome::Failed.message().starts_with("Oops"));
    }

    #[test]
    fn test_colors() {
        assert_eq!(SubmitOutcome::Sent.color(), "green");
        assert_eq!(SubmitOutcome::Failed.color(), "red");
    }

    #[test]
    fn test_is_sent() {
        assert!(SubmitOutcome::Sent.is_sent());
        assert!(!SubmitOutcome::Failed.is_sent());
    }
}
