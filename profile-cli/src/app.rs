//! Wires config, clients and terminal adapters into the view-model and
//! runs one command against it.

use crate::cli::Cli;
use crate::commands::Commands;
use crate::presenter::{SystemUrlOpener, TerminalNavigator, TerminalNotifier};
use crate::{CliError, CliResult, logger};

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use log::{debug, warn};
use profile_client::{
    AuthClient, FirebaseEndpoints, FirestoreClient, SessionStore, build_http_client,
};
use profile_config::{Config, SupportConfig};
use profile_core::{
    AuthService, EditTarget, Identity, ProfileServices, ProfileViewModel, SupportLinks,
    SyncOutcome,
};
use serde_json::Value;

/// Run a parsed command line and report the result on stdout/stderr.
pub async fn run(cli: Cli) -> ExitCode {
    let pretty = cli.pretty;

    match execute(cli).await {
        Ok(Some(value)) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> CliResult<Option<Value>> {
    let config = load_config(cli.config_dir.as_deref())?;

    logger::initialize(
        config.logging.level,
        config.log_file_path(),
        config.logging.colored,
    )?;
    config.log_summary();

    let app = App::build(&config)?;
    app.dispatch(cli.command).await
}

/// Load from `config_dir` when given, else from the default location, then validate.
pub(crate) fn load_config(config_dir: Option<&Path>) -> CliResult<Config> {
    let config = match config_dir {
        Some(dir) => Config::load_from_dir(dir)?,
        None => Config::load()?,
    };
    config.validate()?;
    Ok(config)
}

pub(crate) fn support_links(config: &SupportConfig) -> SupportLinks {
    SupportLinks {
        messaging: config.messaging_url.trim().to_string(),
        instagram: config.instagram_url.trim().to_string(),
        twitter: config.twitter_url.trim().to_string(),
        phone: config.phone_url.trim().to_string(),
    }
}

struct App {
    auth: Arc<AuthClient>,
    view_model: Arc<ProfileViewModel>,
}

impl App {
    fn build(config: &Config) -> CliResult<Self> {
        let endpoints = FirebaseEndpoints::from_config(&config.firebase)?;
        let http = build_http_client(config.firebase.timeout())?;

        let auth = Arc::new(AuthClient::new(
            http.clone(),
            endpoints.clone(),
            SessionStore::new(config.session_path()),
        )?);
        let store = Arc::new(FirestoreClient::new(http, endpoints, auth.clone()));

        let services = ProfileServices {
            auth: auth.clone(),
            store,
            navigator: Arc::new(TerminalNavigator),
            notifier: Arc::new(TerminalNotifier),
            url_opener: Arc::new(SystemUrlOpener),
        };
        let view_model = Arc::new(ProfileViewModel::new(
            services,
            support_links(&config.support),
        ));

        Ok(Self { auth, view_model })
    }

    async fn dispatch(&self, command: Commands) -> CliResult<Option<Value>> {
        match command {
            Commands::Login { email, password } => {
                let identity = self.auth.sign_in_with_password(&email, &password).await?;
                Ok(Some(serde_json::to_value(identity)?))
            }

            Commands::Show => {
                let identity = self.signed_in()?;
                self.view_model.mount(Some(identity)).await;

                match self.view_model.sync().await {
                    SyncOutcome::Synced(fields) => Ok(Some(serde_json::to_value(fields)?)),
                    outcome => {
                        debug!("Sync finished without new data: {outcome:?}");
                        Ok(Some(serde_json::to_value(self.view_model.fields().await)?))
                    }
                }
            }

            Commands::Logout => {
                self.view_model.mount(self.auth.current_identity()).await;
                self.view_model.sign_out().await?;
                Ok(None)
            }

            Commands::ResetPassword => {
                self.view_model.mount(self.auth.current_identity()).await;
                self.view_model.request_password_reset().await?;
                Ok(None)
            }

            Commands::Edit { field } => {
                let outcome = self
                    .view_model
                    .begin_edit_field(EditTarget::Field(field.into()));
                Ok(Some(serde_json::to_value(outcome)?))
            }

            Commands::EditProfile => {
                let outcome = self.view_model.begin_edit_field(EditTarget::Profile);
                Ok(Some(serde_json::to_value(outcome)?))
            }

            Commands::Open { link } => {
                self.view_model.open_external_link(link.into());
                Ok(None)
            }
        }
    }

    fn signed_in(&self) -> CliResult<Identity> {
        match self.auth.current_identity() {
            Some(identity) => Ok(identity),
            None => {
                warn!("No saved session");
                Err(CliError::not_signed_in())
            }
        }
    }
}
