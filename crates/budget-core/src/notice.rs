//! User Notices
//!
//! Short error messages shown to the user when input is rejected. The
//! calculator hands them to a [`Notifier`] and moves on; how (and for how
//! long) they are shown is up to the implementor.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Fire-and-forget sink for notices
pub trait Notifier {
    fn notify(&self, notice: Notice);
}
