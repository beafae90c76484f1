use crate::store::enums::admission::Admission;

impl Admission {
    /// `previous` is the stored admission flag, `None` for an unseen session.
    pub fn classify(previous: Option<u64>, admitted: bool) -> Admission {
        match (previous, admitted) {
            (None | Some(0), true) => Admission::Admitted,
            (Some(_), true) => Admission::Refreshed,
            (None, false) => Admission::Queued,
            (Some(_), false) => Admission::Unchanged,
        }
    }
}
