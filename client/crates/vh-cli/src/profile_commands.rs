use clap::Subcommand;
use vh_core::User;
use vh_session::{
    AuthClient, EditorResult, OrganizationProfileEditor, SessionManager, VolunteerProfileEditor,
};

use std::sync::Arc;

/// Fields left out keep their current value.
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Edit a volunteer profile
    EditVolunteer {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        hours: Option<u32>,
        /// Replaces the category list (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// Edit an organization profile
    EditOrganization {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        website_url: Option<String>,
    },
}

impl ProfileCommands {
    /// Open the editor for the signed-in user, apply the flags and submit.
    pub(crate) async fn execute(
        self,
        session: &SessionManager,
        client: Arc<dyn AuthClient>,
    ) -> EditorResult<User> {
        match self {
            ProfileCommands::EditVolunteer {
                name,
                phone,
                location,
                bio,
                hours,
                categories,
            } => {
                let mut editor = VolunteerProfileEditor::new(session.clone(), client);
                let form = editor.open().await?;

                if let Some(name) = name {
                    form.name = name;
                }
                if phone.is_some() {
                    form.phone = phone;
                }
                if location.is_some() {
                    form.location = location;
                }
                if bio.is_some() {
                    form.bio = bio;
                }
                if hours.is_some() {
                    form.available_hours = hours;
                }
                if !categories.is_empty() {
                    form.category_list = Some(categories);
                }

                editor.submit().await
            }
            ProfileCommands::EditOrganization {
                name,
                phone,
                address,
                description,
                website_url,
            } => {
                let mut editor = OrganizationProfileEditor::new(session.clone(), client);
                let form = editor.open().await?;

                if let Some(name) = name {
                    form.name = name;
                }
                if phone.is_some() {
                    form.phone = phone;
                }
                if address.is_some() {
                    form.address = address;
                }
                if description.is_some() {
                    form.description = description;
                }
                if website_url.is_some() {
                    form.website_url = website_url;
                }

                editor.submit().await
            }
        }
    }
}
