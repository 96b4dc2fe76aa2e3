//! User command - look up and register users

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use lightbnb_db::{NewUser, UserRepo};

use super::{print_json, ConnectOptions};

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Fetch a single user by email or id (prints null when absent)
    Get(GetArgs),
    /// Register a new user and print the stored row
    Add(AddArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("key").required(true).args(["email", "id"])))]
pub struct GetArgs {
    /// Email address of the user
    #[arg(long)]
    pub email: Option<String>,

    /// Numeric user id
    #[arg(long)]
    pub id: Option<i32>,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (must be unique)
    #[arg(long)]
    pub email: String,

    /// Password hash, stored as given
    #[arg(long, env = "LIGHTBNB_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run_user(args: UserArgs, connect: &ConnectOptions) -> Result<()> {
    match args.command {
        UserCommand::Get(args) => run_get(args, connect).await,
        UserCommand::Add(args) => run_add(args, connect).await,
    }
}

async fn run_get(args: GetArgs, connect: &ConnectOptions) -> Result<()> {
    let pool = connect.open_pool().await?;
    let repo = UserRepo::new(&pool);

    let user = match (args.email.as_deref(), args.id) {
        (Some(email), _) => repo.get_by_email(email).await?,
        (None, Some(id)) => repo.get_by_id(id).await?,
        (None, None) => bail!("Either --email or --id is required"),
    };

    print_json(&user)
}

async fn run_add(args: AddArgs, connect: &ConnectOptions) -> Result<()> {
    let user = NewUser::new(&args.name, &args.email, args.password).context("Invalid user")?;

    let pool = connect.open_pool().await?;
    let stored = UserRepo::new(&pool)
        .add(user)
        .await
        .context("Failed to add user")?;

    print_json(&stored)
}
