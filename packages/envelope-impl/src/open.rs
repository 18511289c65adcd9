use common::serde::DeserdeExt;
use cosmwasm_std::Binary;
use marketplace_api::error::EnvelopeError::{Encoding, UnrecognizedPayload};
use marketplace_api::error::EnvelopeResult;
use marketplace_api::msg::ListingHookMsg::{SetAuctionListing, SetListing};
use marketplace_api::msg::{ExecuteMsg, ListingHookMsg};

pub fn decode_base64(encoded: &str) -> EnvelopeResult<String> {
    let bytes = Binary::from_base64(encoded).map_err(|e| Encoding { msg: e.to_string() })?;

    String::from_utf8(bytes.0).map_err(|e| Encoding { msg: e.to_string() })
}

pub fn parse_inner_message_json(json: &str) -> EnvelopeResult<ListingHookMsg> {
    json.to_t::<ListingHookMsg>()
        .map_err(|e| UnrecognizedPayload { msg: e.to_string() })
}

/// Reads the hook message back out of an envelope, the way the receiving
/// marketplace would.
///
/// `ListNftForSale` only carries `set_listing`, `ListNftForAuction` only
/// carries `set_auction_listing`; the generic `receive_nft` callback carries either.
pub fn open_envelope(outer: &ExecuteMsg) -> EnvelopeResult<ListingHookMsg> {
    let payload = &outer.receive_msg().msg;
    let json = String::from_utf8(payload.to_vec()).map_err(|e| Encoding { msg: e.to_string() })?;
    let hook = parse_inner_message_json(&json)?;

    match (outer, &hook) {
        (ExecuteMsg::ReceiveNft(_), _)
        | (ExecuteMsg::ListNftForSale(_), SetListing { .. })
        | (ExecuteMsg::ListNftForAuction(_), SetAuctionListing { .. }) => Ok(hook),
        _ => Err(UnrecognizedPayload {
            msg: format!("{} cannot carry this hook message", outer.tag()),
        }),
    }
}
