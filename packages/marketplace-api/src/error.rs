use cosmwasm_std::StdError;
use thiserror::Error;

pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

#[derive(Error, Debug, PartialEq)]
pub enum EnvelopeError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Failed to serialize inner hook message: {msg}")]
    InnerSerialization { msg: String },

    #[error("Failed to encode envelope payload: {msg}")]
    Encoding { msg: String },

    #[error("Failed to serialize outer envelope message: {msg}")]
    OuterSerialization { msg: String },

    #[error("Envelope payload not recognized: {msg}")]
    UnrecognizedPayload { msg: String },

    #[error("Unknown envelope tag '{tag}', expected one of: receive_nft, ListNftForSale, ListNftForAuction")]
    InvalidEnvelopeTag { tag: String },
}
