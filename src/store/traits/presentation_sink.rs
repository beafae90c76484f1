/// Receiver of presentation messages. Implementations must not block.
pub trait PresentationSink: Send + Sync {
    fn publish_snapshot(&self, message: String);

    fn publish_update(&self, table: &str, fingerprint: &str, message: String);

    /// Skips building messages nobody would receive.
    fn has_listeners(&self) -> bool {
        true
    }
}
