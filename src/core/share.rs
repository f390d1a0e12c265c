//! Sharing a promotion: Web Share payload and clipboard fallback text

use serde::Serialize;

pub const SITE_NAME: &str = "Epic Adventures by Jen";
pub const LINK_COPIED_MESSAGE: &str = "Link copied to clipboard!";
pub const SHARE_FAILED_MESSAGE: &str = "Sharing is not available in this browser";

/// Data handed to `navigator.share`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn promotion(title: &str, url: &str) -> Self {
        Self {
            title: format!("{title} - {SITE_NAME}"),
            text: format!("Check out this amazing travel deal: {title}"),
            url: url.to_string(),
        }
    }

    /// Text copied when the browser cannot share natively
    pub fn clipboard_text(&self) -> String {
        format!("{} - {}", self.text, self.url)
    }
}

/// How a share attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the system share sheet
    Shared,
    /// The visitor closed the share sheet
    Cancelled,
    /// Fallback text written to the clipboard
    Copied,
    Unavailable,
}

impl ShareOutcome {
    /// Toast to show, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ShareOutcome::Copied => Some(LINK_COPIED_MESSAGE),
            ShareOutcome::Unavailable => Some(SHARE_FAILED_MESSAGE),
            ShareOutcome::Shared | ShareOutcome::Cancelled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_payload() {
        let payload = SharePayload::promotion("Caribbean Cruise Sale", "https://example.com/promotions");

        assert_eq!(payload.title, "Caribbean Cruise Sale - Epic Adventures by Jen");
        assert_eq!(payload.text, "Check out this amazing travel deal: Caribbean Cruise Sale");
        assert_eq!(
            payload.clipboard_text(),
            "Check out this amazing travel deal: Caribbean Cruise Sale - https://example.com/promotions"
        );
    }

    #[test]
    fn test_payload_serializes_for_web_share() {
        let json = serde_json::to_value(SharePayload::promotion("Safari", "/p")).unwrap();
        assert_eq!(json["url"], "/p");
        assert_eq!(json.as_object().map(|o| o.len()), Some(3));
    }

    #[test]
    fn test_only_copy_and_failure_toast() {
        assert_eq!(ShareOutcome::Copied.message(), Some(LINK_COPIED_MESSAGE));
        assert_eq!(ShareOutcome::Unavailable.message(), Some(SHARE_FAILED_MESSAGE));
        assert_eq!(ShareOutcome::Shared.message(), None);
        assert_eq!(ShareOutcome::Cancelled.message(), None);
    }
}
