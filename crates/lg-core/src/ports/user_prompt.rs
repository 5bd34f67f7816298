use async_trait::async_trait;

/// Blocking modal prompts owned by the desktop shell.
#[async_trait]
pub trait UserPromptPort: Send + Sync {
    /// Binary yes/no confirmation. `true` means "yes".
    async fn confirm(&self, title: &str, message: &str) -> bool;

    /// Blocking error notification.
    async fn notify_error(&self, title: &str, message: &str);
}
