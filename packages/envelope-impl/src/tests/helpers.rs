use marketplace_api::api::{AuctionListingParams, ListingParams, OuterTag};
use marketplace_api::msg::ListingHookMsg;

pub const OWNER: &str = "xion1lz9v7xqwvn28engpl2qlqslc8lk9u8rfppwwxz";
pub const COLLECTION: &str = "xion1k8wqd8a0hnwqgpz7w4xwj2d2ngzhagh5c4rnd8gk2wmydsqnlq8sj5ndm6";

pub fn stub_set_listing() -> ListingHookMsg {
    ListingHookMsg::SetListing {
        owner: OWNER.to_string(),
        collection: None,
        token_id: "0".to_string(),
        price: "1".to_string(),
        royalty: "1".to_string(),
    }
}

pub fn stub_set_auction_listing() -> ListingHookMsg {
    ListingHookMsg::SetAuctionListing {
        owner: OWNER.to_string(),
        token_id: "3".to_string(),
        start_price: "1000000".to_string(),
        min_bid_step: "50000".to_string(),
        start_time: "1718000000".to_string(),
        end_time: "1718086400".to_string(),
        royalty: "5".to_string(),
    }
}

pub fn stub_listing_params(tag: OuterTag) -> ListingParams {
    ListingParams {
        owner: OWNER.to_string(),
        collection: None,
        token_id: "0".to_string(),
        price: "1".to_string(),
        royalty: "1".to_string(),
        sender: None,
        tag,
    }
}

pub fn stub_auction_listing_params(tag: OuterTag) -> AuctionListingParams {
    AuctionListingParams {
        owner: OWNER.to_string(),
        token_id: "3".to_string(),
        start_price: "1000000".to_string(),
        min_bid_step: "50000".to_string(),
        start_time: "1718000000".to_string(),
        end_time: "1718086400".to_string(),
        royalty: "5".to_string(),
        sender: None,
        tag,
    }
}
