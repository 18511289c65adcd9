mod args;
mod logger;

use anyhow::{Context, Result};
use args::{Args, Command};
use clap::Parser;
use envelope_impl::build::{build_auction_listing_envelope, build_listing_envelope, render};
use log::info;
use marketplace_api::api::{AuctionListingParams, ListingParams};

fn main() -> Result<()> {
    logger::enable_logger();

    let args = Args::parse();
    let payload = run(args.command)?;

    println!("{}", payload);

    Ok(())
}

fn run(command: Command) -> Result<String> {
    let outer = match command {
        Command::Sale(sale) => {
            let params = ListingParams::from(sale);
            info!(
                "building {} envelope for token {} owned by {}",
                params.tag, params.token_id, params.owner
            );
            build_listing_envelope(&params).context("failed to build listing envelope")?
        }
        Command::Auction(auction) => {
            let params = AuctionListingParams::from(auction);
            info!(
                "building {} envelope for auctioned token {} owned by {}",
                params.tag, params.token_id, params.owner
            );
            build_auction_listing_envelope(&params)
                .context("failed to build auction listing envelope")?
        }
    };

    render(&outer).context("failed to render envelope")
}
