//! Reservations command - list a guest's reservations

use anyhow::Result;
use clap::Parser;
use lightbnb_db::{Limit, ReservationRepo};

use super::{print_json, ConnectOptions};

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    #[arg(long)]
    pub guest: i32,

    /// Maximum rows to return
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

pub async fn run_reservations(args: ReservationsArgs, connect: &ConnectOptions) -> Result<()> {
    let pool = connect.open_pool().await?;
    let rows = ReservationRepo::new(&pool)
        .list_for_guest(args.guest, Limit::new(args.limit))
        .await?;

    tracing::info!(guest = args.guest, count = rows.len(), "reservations fetched");
    print_json(&rows)
}
