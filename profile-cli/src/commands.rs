use clap::{Subcommand, ValueEnum};
use profile_core::{ExternalLink, FieldKey};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "PROFILE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sync and print the signed-in profile
    Show,

    /// Sign out
    Logout,

    /// Email a password reset link to the signed-in account
    ResetPassword,

    /// Edit a single profile field
    Edit {
        #[arg(value_enum)]
        field: FieldArg,
    },

    /// Edit the whole profile
    EditProfile,

    /// Open a support/contact link
    Open {
        #[arg(value_enum)]
        link: LinkArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FieldArg {
    FullName,
    MobileNumber,
    AccountNumber,
}

impl From<FieldArg> for FieldKey {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::FullName => FieldKey::FullName,
            FieldArg::MobileNumber => FieldKey::MobileNumber,
            FieldArg::AccountNumber => FieldKey::AccountNumber,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LinkArg {
    Messaging,
    Instagram,
    Twitter,
    Phone,
}

impl From<LinkArg> for ExternalLink {
    fn from(arg: LinkArg) -> Self {
        match arg {
            LinkArg::Messaging => ExternalLink::Messaging,
            LinkArg::Instagram => ExternalLink::Instagram,
            LinkArg::Twitter => ExternalLink::Twitter,
            LinkArg::Phone => ExternalLink::Phone,
        }
    }
}
