use crate::api::OuterTag;
use common::SerdeExt;
use cosmwasm_schema::cw_serde;
use cw721::Cw721ReceiveMsg;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Hook messages a marketplace expects inside the `msg` of a received NFT.
///
/// Amounts, timestamps and token IDs are kept as decimal strings so that
/// values wider than any native integer reach the contract untouched.
#[cw_serde]
#[derive(SerdeExt)]
pub enum ListingHookMsg {
    SetListing {
        owner: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        collection: Option<String>,
        token_id: String,
        price: String,
        royalty: String,
    },
    SetAuctionListing {
        owner: String,
        token_id: String,
        start_price: String,
        min_bid_step: String,
        start_time: String,
        end_time: String,
        royalty: String,
    },
}

impl ListingHookMsg {
    pub fn token_id(&self) -> &str {
        match self {
            ListingHookMsg::SetListing { token_id, .. } => token_id,
            ListingHookMsg::SetAuctionListing { token_id, .. } => token_id,
        }
    }

    pub fn owner(&self) -> &str {
        match self {
            ListingHookMsg::SetListing { owner, .. } => owner,
            ListingHookMsg::SetAuctionListing { owner, .. } => owner,
        }
    }
}

// Variant spellings are not uniform on the wire: the CW721 callback is
// snake_case while the marketplace's own entry points are PascalCase.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SerdeExt)]
pub enum ExecuteMsg {
    #[serde(rename = "receive_nft")]
    ReceiveNft(Cw721ReceiveMsg),
    ListNftForSale(Cw721ReceiveMsg),
    ListNftForAuction(Cw721ReceiveMsg),
}

impl ExecuteMsg {
    pub fn new(tag: OuterTag, receive_msg: Cw721ReceiveMsg) -> Self {
        match tag {
            OuterTag::ReceiveNft => ExecuteMsg::ReceiveNft(receive_msg),
            OuterTag::ListNftForSale => ExecuteMsg::ListNftForSale(receive_msg),
            OuterTag::ListNftForAuction => ExecuteMsg::ListNftForAuction(receive_msg),
        }
    }

    pub fn tag(&self) -> OuterTag {
        match self {
            ExecuteMsg::ReceiveNft(_) => OuterTag::ReceiveNft,
            ExecuteMsg::ListNftForSale(_) => OuterTag::ListNftForSale,
            ExecuteMsg::ListNftForAuction(_) => OuterTag::ListNftForAuction,
        }
    }

    pub fn receive_msg(&self) -> &Cw721ReceiveMsg {
        match self {
            ExecuteMsg::ReceiveNft(msg)
            | ExecuteMsg::ListNftForSale(msg)
            | ExecuteMsg::ListNftForAuction(msg) => msg,
        }
    }
}
