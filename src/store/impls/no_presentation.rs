use crate::store::structs::no_presentation::NoPresentation;
use crate::store::traits::presentation_sink::PresentationSink;

impl PresentationSink for NoPresentation {
    fn publish_snapshot(&self, _message: String) {}

    fn publish_update(&self, _table: &str, _fingerprint: &str, _message: String) {}

    fn has_listeners(&self) -> bool {
        false
    }
}
