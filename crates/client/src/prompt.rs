use async_trait::async_trait;

/// User-facing notifications and confirmations raised by the view.
///
/// `confirm` blocks the calling flow until the user picks cancel or
/// confirm.
#[async_trait]
pub trait Prompt: Send + Sync {
    /// Show a message the user has to acknowledge.
    async fn alert(&self, title: &str, message: &str);

    /// Ask a yes/no question. `true` means the user confirmed.
    async fn confirm(&self, title: &str, message: &str) -> bool;
}
