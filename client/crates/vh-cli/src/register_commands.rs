use clap::Subcommand;
use vh_core::{OrganizationRegistration, User, VolunteerRegistration};
use vh_session::{SessionManager, SessionResult};

#[derive(Subcommand)]
pub enum RegisterCommands {
    /// Register a volunteer account
    Volunteer {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        /// Hours per week the volunteer can give
        #[arg(long, default_value_t = 0)]
        hours: u32,
        /// Interest category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// Register an organization administrator account
    Organization {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
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

impl RegisterCommands {
    /// Create the account and sign in with it.
    pub(crate) async fn execute(self, session: &SessionManager) -> SessionResult<User> {
        match self {
            RegisterCommands::Volunteer {
                email,
                password,
                name,
                phone,
                location,
                bio,
                hours,
                categories,
            } => {
                let mut registration = VolunteerRegistration::new(email, password, name);
                registration.phone = phone;
                registration.location = location;
                registration.bio = bio;
                registration.available_hours = hours;
                registration.category_list = categories;
                session.register_volunteer(&registration).await
            }
            RegisterCommands::Organization {
                email,
                password,
                name,
                phone,
                address,
                description,
                website_url,
            } => {
                let mut registration = OrganizationRegistration::new(email, password, name);
                registration.phone = phone;
                registration.address = address;
                registration.description = description;
                registration.website_url = website_url;
                session.register_organization(&registration).await
            }
        }
    }
}
