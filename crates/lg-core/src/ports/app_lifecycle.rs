/// Process lifecycle control.
pub trait AppLifecyclePort: Send + Sync {
    /// Ask the process to exit so the installer can replace it.
    ///
    /// The exit happens once the in-flight launch sequence has unwound.
    fn request_exit(&self, code: i32);
}
