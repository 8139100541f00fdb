use crate::{profile_commands::ProfileCommands, register_commands::RegisterCommands};

use clap::Subcommand;
use vh_core::Role;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and remember the account
    Login {
        /// volunteer or organization
        #[arg(long)]
        role: Role,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account, then sign in with it
    Register {
        #[command(subcommand)]
        action: RegisterCommands,
    },

    /// Show the current session
    Whoami,

    /// Forget the signed-in account
    Logout,

    /// Edit the signed-in account's profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}
