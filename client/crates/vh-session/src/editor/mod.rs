pub(crate) mod editor_state;
pub(crate) mod error;
pub(crate) mod organization_form;
pub(crate) mod profile_editor;
pub(crate) mod profile_form;
pub(crate) mod volunteer_form;

pub use editor_state::EditorState;
pub use error::{EditorError, Result as EditorResult};
pub use organization_form::{OrganizationForm, OrganizationUpdate};
pub use profile_editor::{OrganizationProfileEditor, ProfileEditor, VolunteerProfileEditor};
pub use profile_form::ProfileForm;
pub use volunteer_form::{VolunteerForm, VolunteerUpdate};
