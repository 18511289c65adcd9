use std::fmt;
use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;

/// Selects which outer execute message wraps the encoded hook.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum OuterTag {
    #[serde(rename = "receive_nft")]
    ReceiveNft,
    ListNftForSale,
    ListNftForAuction,
}

impl OuterTag {
    /// Key under which the variant appears in the rendered JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            OuterTag::ReceiveNft => "receive_nft",
            OuterTag::ListNftForSale => "ListNftForSale",
            OuterTag::ListNftForAuction => "ListNftForAuction",
        }
    }
}

impl fmt::Display for OuterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OuterTag {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receive_nft" | "ReceiveNft" => Ok(OuterTag::ReceiveNft),
            "ListNftForSale" | "list_nft_for_sale" => Ok(OuterTag::ListNftForSale),
            "ListNftForAuction" | "list_nft_for_auction" => Ok(OuterTag::ListNftForAuction),
            _ => Err(EnvelopeError::InvalidEnvelopeTag { tag: s.to_string() }),
        }
    }
}

#[cw_serde]
pub struct ListingParams {
    pub owner: String,
    pub collection: Option<String>,
    pub token_id: String,
    pub price: String,
    pub royalty: String,
    /// Defaults to `owner` when absent.
    pub sender: Option<String>,
    pub tag: OuterTag,
}

#[cw_serde]
pub struct AuctionListingParams {
    pub owner: String,
    pub token_id: String,
    pub start_price: String,
    pub min_bid_step: String,
    pub start_time: String,
    pub end_time: String,
    pub royalty: String,
    /// Defaults to `owner` when absent.
    pub sender: Option<String>,
    pub tag: OuterTag,
}

impl ListingParams {
    pub fn sender(&self) -> &str {
        self.sender.as_deref().unwrap_or(&self.owner)
    }
}

impl AuctionListingParams {
    pub fn sender(&self) -> &str {
        self.sender.as_deref().unwrap_or(&self.owner)
    }
}
