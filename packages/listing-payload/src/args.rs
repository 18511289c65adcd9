use clap::{Parser, Subcommand};
use marketplace_api::api::{AuctionListingParams, ListingParams, OuterTag};

/// Builds the execute message that hands an NFT to a marketplace, with the
/// listing hook base64-encoded into its `msg` field.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fixed-price listing (`set_listing` hook)
    Sale(SaleArgs),
    /// Auction listing (`set_auction_listing` hook)
    Auction(AuctionArgs),
}

#[derive(clap::Args, Debug)]
pub struct SaleArgs {
    #[arg(long)]
    pub owner: String,

    /// NFT collection contract
    #[arg(long)]
    pub collection: Option<String>,

    #[arg(long)]
    pub token_id: String,

    #[arg(long)]
    pub price: String,

    #[arg(long)]
    pub royalty: String,

    /// Defaults to the owner
    #[arg(long)]
    pub sender: Option<String>,

    /// Outer message: receive_nft, ListNftForSale or ListNftForAuction
    #[arg(long, default_value = "receive_nft", value_parser = parse_tag)]
    pub envelope: OuterTag,
}

#[derive(clap::Args, Debug)]
pub struct AuctionArgs {
    #[arg(long)]
    pub owner: String,

    #[arg(long)]
    pub token_id: String,

    #[arg(long)]
    pub start_price: String,

    #[arg(long)]
    pub min_bid_step: String,

    /// Unix seconds
    #[arg(long)]
    pub start_time: String,

    /// Unix seconds
    #[arg(long)]
    pub end_time: String,

    #[arg(long)]
    pub royalty: String,

    /// Defaults to the owner
    #[arg(long)]
    pub sender: Option<String>,

    /// Outer message: receive_nft, ListNftForSale or ListNftForAuction
    #[arg(long, default_value = "ListNftForAuction", value_parser = parse_tag)]
    pub envelope: OuterTag,
}

fn parse_tag(s: &str) -> Result<OuterTag, String> {
    s.parse::<OuterTag>().map_err(|e| e.to_string())
}

impl From<SaleArgs> for ListingParams {
    fn from(args: SaleArgs) -> Self {
        ListingParams {
            owner: args.owner,
            collection: args.collection,
            token_id: args.token_id,
            price: args.price,
            royalty: args.royalty,
            sender: args.sender,
            tag: args.envelope,
        }
    }
}

impl From<AuctionArgs> for AuctionListingParams {
    fn from(args: AuctionArgs) -> Self {
        AuctionListingParams {
            owner: args.owner,
            token_id: args.token_id,
            start_price: args.start_price,
            min_bid_step: args.min_bid_step,
            start_time: args.start_time,
            end_time: args.end_time,
            royalty: args.royalty,
            sender: args.sender,
            tag: args.envelope,
        }
    }
}
