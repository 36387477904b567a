/// Platform URL-opening facility. Fire-and-forget: failures are the
/// implementation's to log, nothing is reported back.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str);
}
