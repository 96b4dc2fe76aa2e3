//! lightbnb CLI - drive the LightBnB data layer from the command line
//!
//! Every subcommand maps to one data-access operation and prints its result
//! as pretty JSON on stdout:
//! - `user get` / `user add`
//! - `reservations`
//! - `properties search` / `properties add`
//! - `migrate` to create the schema

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::ConnectOptions;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and populate the LightBnB rental listings database",
    long_about = "Look up users, list a guest's reservations, search properties by city, \
                  owner, price and rating, and add new users or listings. Output is JSON."
)]
struct Cli {
    /// Enable debug logging (stderr)
    #[arg(long, global = true)]
    debug: bool,

    /// PostgreSQL connection URL (overrides ~/.lightbnb/config.toml)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create or upgrade the database schema
    Migrate,
    /// Look up or register users
    User(commands::user::UserArgs),
    /// List the properties a guest has reserved, earliest first
    Reservations(commands::reservations::ReservationsArgs),
    /// Search or add property listings
    Properties(commands::properties::PropertiesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let connect = ConnectOptions {
        database_url: cli.database_url,
    };

    match cli.command {
        Commands::Migrate => commands::run_migrate(&connect).await?,
        Commands::User(args) => commands::run_user(args, &connect).await?,
        Commands::Reservations(args) => commands::run_reservations(args, &connect).await?,
        Commands::Properties(args) => commands::run_properties(args, &connect).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_search_flags() {
        let cli = Cli::try_parse_from([
            "lightbnb",
            "properties",
            "search",
            "--city",
            "Rome",
            "--min-price",
            "50",
            "--max-price",
            "150",
            "--min-rating",
            "4",
            "--limit",
            "5",
        ])
        .unwrap();

        let Commands::Properties(args) = cli.command else {
            panic!("expected properties command");
        };
        let commands::properties::PropertiesCommand::Search(search) = args.command else {
            panic!("expected search");
        };
        assert_eq!(search.city.as_deref(), Some("Rome"));
        assert_eq!(search.min_price, Some(50));
        assert_eq!(search.max_price, Some(150));
        assert_eq!(search.min_rating, Some(4.0));
        assert_eq!(search.limit, 5);
    }

    #[test]
    fn user_get_requires_a_key() {
        assert!(Cli::try_parse_from(["lightbnb", "user", "get"]).is_err());
        assert!(Cli::try_parse_from(["lightbnb", "user", "get", "--id", "1", "--email", "a@b.co"]).is_err());
        assert!(Cli::try_parse_from(["lightbnb", "user", "get", "--id", "1"]).is_ok());
    }

    #[test]
    fn user_get_passes_email_through_unchecked() {
        let cli = Cli::try_parse_from(["lightbnb", "user", "get", "--email", "legacy-address"]).unwrap();
        let Commands::User(args) = cli.command else {
            panic!("expected user command");
        };
        let commands::user::UserCommand::Get(get) = args.command else {
            panic!("expected get");
        };
        assert_eq!(get.email.as_deref(), Some("legacy-address"));
    }

    #[test]
    fn reservations_default_limit() {
        let cli = Cli::try_parse_from(["lightbnb", "reservations", "--guest", "7"]).unwrap();
        let Commands::Reservations(args) = cli.command else {
            panic!("expected reservations command");
        };
        assert_eq!(args.guest, 7);
        assert_eq!(args.limit, 10);
    }
}
