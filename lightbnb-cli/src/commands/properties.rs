//! Properties command - search listings and add new ones

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{Limit, NewProperty, PropertyFilters, PropertyRepo};

use super::{print_json, ConnectOptions};

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommand,
}

#[derive(Subcommand, Debug)]
pub enum PropertiesCommand {
    /// Search listings, cheapest first
    Search(SearchArgs),
    /// Add a listing from a JSON document
    Add(AddArgs),
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// City contains this text (case-insensitive)
    #[arg(long)]
    pub city: Option<String>,

    /// Only listings owned by this user id
    #[arg(long)]
    pub owner: Option<i32>,

    /// Minimum price per night, whole currency units
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum price per night, whole currency units
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Minimum average review rating (0-5)
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum rows to return
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

impl SearchArgs {
    fn filters(&self) -> PropertyFilters {
        PropertyFilters {
            city: self.city.clone(),
            owner_id: self.owner,
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
            minimum_rating: self.min_rating,
        }
    }
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Path to the property JSON document ("-" reads stdin)
    #[arg(long, value_name = "PATH")]
    pub json: PathBuf,
}

pub async fn run_properties(args: PropertiesArgs, connect: &ConnectOptions) -> Result<()> {
    match args.command {
        PropertiesCommand::Search(args) => run_search(args, connect).await,
        PropertiesCommand::Add(args) => run_add(args, connect).await,
    }
}

async fn run_search(args: SearchArgs, connect: &ConnectOptions) -> Result<()> {
    let filters = args.filters();
    // Reject bad filters before opening a connection
    filters.validate().context("Invalid search filters")?;

    let pool = connect.open_pool().await?;
    let listings = PropertyRepo::new(&pool)
        .search(&filters, Limit::new(args.limit))
        .await?;

    tracing::info!(count = listings.len(), "properties found");
    print_json(&listings)
}

async fn run_add(args: AddArgs, connect: &ConnectOptions) -> Result<()> {
    let raw = read_document(&args.json)?;
    let property: NewProperty = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid property document: {}", args.json.display()))?;

    let pool = connect.open_pool().await?;
    let stored = PropertyRepo::new(&pool)
        .add(property)
        .await
        .context("Failed to add property")?;

    print_json(&stored)
}

fn read_document(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
