/// Lifecycle of a profile edit.
///
/// `Closed → Open → Submitting → Closed` on success, or back to `Open` with
/// the failure message and the same field values on error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState<F> {
    #[default]
    Closed,
    Open {
        form: F,
        /// Message of the last failed submission
        error: Option<String>,
    },
    Submitting {
        form: F,
    },
}

impl<F> EditorState<F> {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }
}
