use clap::Subcommand;
use falcon_core::{ProfilePatch, UserMetadata};

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Sign in with email and password
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account; a confirmation email is sent
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        site_name: Option<String>,
        #[arg(long)]
        mobile_number: Option<String>,
    },

    /// Sign out and forget the stored session
    SignOut,

    /// Show who is signed in
    Status,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Render the command center dashboard
    Dashboard {
        /// Keep running for N metric updates
        #[arg(long)]
        ticks: Option<u32>,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ProfileCommands {
    /// Show the signed-in operator's profile
    Show,

    /// Update profile fields; only the given fields change
    Update {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        site_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        mobile_number: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        latitude: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        longitude: Option<f64>,
    },
}

impl Commands {
    /// Sign-up profile seed built from the optional flags
    pub fn sign_up_seed(
        full_name: Option<String>,
        site_name: Option<String>,
        mobile_number: Option<String>,
    ) -> UserMetadata {
        UserMetadata {
            full_name,
            site_name,
            mobile_number,
            ..UserMetadata::default()
        }
    }
}

impl ProfileCommands {
    /// The patch for `update`; `None` for other actions
    pub fn to_patch(&self) -> Option<ProfilePatch> {
        match self {
            Self::Show => None,
            Self::Update {
                full_name,
                site_name,
                email,
                mobile_number,
                latitude,
                longitude,
            } => Some(ProfilePatch {
                full_name: full_name.clone(),
                site_name: site_name.clone(),
                email: email.clone(),
                mobile_number: mobile_number.clone(),
                site_latitude: *latitude,
                site_longitude: *longitude,
            }),
        }
    }
}
