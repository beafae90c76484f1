/// What an update of the user table means for its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Admission flag went from 0 (or unseen) to 1.
    Admitted,
    /// Already admitted session reported again.
    Refreshed,
    /// First sighting of a session that is not admitted yet.
    Queued,
    Unchanged,
}
