/// Logging port used by the cart use cases.
///
/// Messages are plain text; adapters decide level filtering and format.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
