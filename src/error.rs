use thiserror::Error;

/// Reasons a WhatsApp handoff could not open its new browsing context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandoffError {
    #[error("no browser window available")]
    NoWindow,
    #[error("new window was blocked by the browser")]
    Blocked,
    #[error("window.open failed: {0}")]
    Open(String),
}
