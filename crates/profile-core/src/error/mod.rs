use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Remote fetch failed: {message} {location}")]
    RemoteFetch {
        message: String,
        location: ErrorLocation,
    },

    #[error("Sign-out failed: {message} {location}")]
    SignOut {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password reset failed: {message} {location}")]
    PasswordReset {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid profile field: {value} {location}")]
    InvalidField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid external link: {value} {location}")]
    InvalidLink {
        value: String,
        location: ErrorLocation,
    },
}

impl ProfileError {
    #[track_caller]
    pub fn remote_fetch<S: Into<String>>(message: S) -> Self {
        Self::RemoteFetch {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn sign_out<S: Into<String>>(message: S) -> Self {
        Self::SignOut {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn password_reset<S: Into<String>>(message: S) -> Self {
        Self::PasswordReset {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_field<S: Into<String>>(value: S) -> Self {
        Self::InvalidField {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_link<S: Into<String>>(value: S) -> Self {
        Self::InvalidLink {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, ProfileError>;
