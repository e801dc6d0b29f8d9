/// Where per-segment diagnostics go. The extractor reports every fragment it
/// skips here and keeps going; it never aborts the whole call.
pub trait DiagnosticSink {
    fn report(&self, message: &str, fragment: &str);
}

impl<'a, D: DiagnosticSink + ?Sized> DiagnosticSink for &'a D {
    fn report(&self, message: &str, fragment: &str) {
        (**self).report(message, fragment)
    }
}

/// Default sink, forwards to the `log` facade. The embedding application owns
/// log configuration and output.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, message: &str, fragment: &str) {
        log::debug!("{}, fragment: {:?}", message, fragment);
    }
}
