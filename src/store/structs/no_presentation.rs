/// Sink used when the presentation server is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPresentation;
