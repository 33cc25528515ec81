//! `estatetrust`: drive the EstateTrust client from a terminal.

use anyhow::Context;
use clap::{Parser, Subcommand};
use estatetrust::{storage::JsonFileStorage, view::RowKind, Client, Urls};
use settings::Settings;
use std::path::PathBuf;
use url::Url;

mod commands;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "estatetrust")]
#[command(about = "Manage an estate plan on an EstateTrust server", version)]
struct Cli {
    /// Settings file to load instead of ./estatetrust.toml
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Log every request
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and remember the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "ESTATETRUST_PASSWORD", hide_env_values = true)]
        password: String,
        /// `grantor` or `trustee`
        #[arg(short, long, default_value = "grantor")]
        account_type: String,
    },
    /// Forget the remembered session
    Logout,
    /// Register a grantor account
    Register(commands::RegisterArgs),
    /// Show the dashboard of the signed-in account
    Dashboard,
    /// Add a physical asset
    AddAsset(commands::AssetArgs),
    /// Add a monetary asset
    AddMonetary(commands::MonetaryArgs),
    /// Add a beneficiary
    AddBeneficiary(commands::BeneficiaryArgs),
    /// Appoint a trustee
    AddTrustee(commands::TrusteeArgs),
    /// Delete a dashboard row
    Delete {
        /// asset, monetary, trustee or beneficiary
        kind: RowKind,
        id: String,
    },
    /// List the screens of the client
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new(cli.config.as_deref()).context("failed to load settings")?;
    setup_tracing(&settings, cli.verbose);

    let base_url = Url::parse(&settings.api.base_url)
        .with_context(|| format!("invalid api.base_url `{}`", settings.api.base_url))?;
    tracing::debug!(
        base_url = %base_url,
        storage = %settings.storage.path.display(),
        "settings loaded"
    );
    let mut client = Client::builder()
        .storage(JsonFileStorage::new(settings.storage.path.clone()))
        .urls(Urls::new(base_url))
        .build();
    let mut app = commands::App::new();

    match cli.command {
        Command::Login {
            username,
            password,
            account_type,
        } => {
            app.login(&mut client, username, password, account_type)
                .await
        }
        Command::Logout => app.logout(&mut client).await,
        Command::Register(args) => app.register(&mut client, args).await,
        Command::Dashboard => app.dashboard(&mut client).await,
        Command::AddAsset(args) => app.add(&mut client, args.into_form()).await,
        Command::AddMonetary(args) => app.add(&mut client, args.into_form()).await,
        Command::AddBeneficiary(args) => app.add(&mut client, args.into_form()).await,
        Command::AddTrustee(args) => app.add(&mut client, args.into_form()).await,
        Command::Delete { kind, id } => app.delete(&mut client, kind, &id).await,
        Command::Routes => {
            commands::print_routes();
            Ok(())
        }
    }
}

fn setup_tracing(settings: &Settings, verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("estatetrust=debug")
        } else {
            EnvFilter::new(&settings.log.filter)
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn delete_parses_row_kind() {
        let cli = Cli::try_parse_from(["estatetrust", "delete", "Monetary", "m1"]).unwrap();
        match cli.command {
            Command::Delete { kind, id } => {
                assert_eq!(kind, RowKind::Monetary);
                assert_eq!(id, "m1");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from(["estatetrust", "delete", "folder", "f1"]).is_err());
    }

    #[test]
    fn add_asset_requires_beneficiary() {
        let result = Cli::try_parse_from([
            "estatetrust",
            "add-asset",
            "--name",
            "Watch",
            "--location",
            "Safe",
            "--note",
            "Gift",
        ]);
        assert!(result.is_err());
    }
}
