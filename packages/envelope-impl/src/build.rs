use common::serde::SerdeExt;
use cosmwasm_std::Binary;
use cw721::Cw721ReceiveMsg;
use log::debug;
use marketplace_api::api::{AuctionListingParams, ListingParams, OuterTag};
use marketplace_api::error::EnvelopeError::{InnerSerialization, OuterSerialization};
use marketplace_api::error::EnvelopeResult;
use marketplace_api::msg::ExecuteMsg;
use marketplace_api::msg::ListingHookMsg::{self, SetAuctionListing, SetListing};

/// Serializes a hook message to compact JSON.
///
/// Output is byte-identical for equal inputs, so it can be hashed or compared.
pub fn build_inner_message_json(msg: &ListingHookMsg) -> EnvelopeResult<String> {
    msg.to_json_text()
        .map_err(|e| InnerSerialization { msg: e.to_string() })
}

/// Standard (RFC 4648) base64 with padding, no line wrapping.
pub fn encode_base64(text: &str) -> String {
    Binary::from(text.as_bytes()).to_base64()
}

/// Wraps the encoded hook message into the outer execute message selected by `tag`.
pub fn build_outer_message(
    inner: &ListingHookMsg,
    sender: impl Into<String>,
    token_id: impl Into<String>,
    tag: OuterTag,
) -> EnvelopeResult<ExecuteMsg> {
    let json = build_inner_message_json(inner)?;

    // Binary is rendered as base64 text, equal to encode_base64(&json)
    let payload = Binary::from(json.into_bytes());
    debug!("{} payload: {}", tag, payload.to_base64());

    Ok(ExecuteMsg::new(
        tag,
        Cw721ReceiveMsg {
            sender: sender.into(),
            token_id: token_id.into(),
            msg: payload,
        },
    ))
}

/// Pretty-prints the outer message with two-space indentation, no trailing newline.
pub fn render(outer: &ExecuteMsg) -> EnvelopeResult<String> {
    outer
        .to_pretty_json()
        .map_err(|e| OuterSerialization { msg: e.to_string() })
}

pub fn build_listing_envelope(params: &ListingParams) -> EnvelopeResult<ExecuteMsg> {
    let inner = SetListing {
        owner: params.owner.clone(),
        collection: params.collection.clone(),
        token_id: params.token_id.clone(),
        price: params.price.clone(),
        royalty: params.royalty.clone(),
    };

    build_outer_message(&inner, params.sender(), params.token_id.clone(), params.tag)
}

pub fn build_auction_listing_envelope(params: &AuctionListingParams) -> EnvelopeResult<ExecuteMsg> {
    let inner = SetAuctionListing {
        owner: params.owner.clone(),
        token_id: params.token_id.clone(),
        start_price: params.start_price.clone(),
        min_bid_step: params.min_bid_step.clone(),
        start_time: params.start_time.clone(),
        end_time: params.end_time.clone(),
        royalty: params.royalty.clone(),
    };

    build_outer_message(&inner, params.sender(), params.token_id.clone(), params.tag)
}
