#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub mod ads;
pub mod automl;
pub mod provenance;
pub mod unknown;

mod error;

pub use bytes;
pub use prost;
pub use prost::DecodeError;

pub use crate::ads::resources::campaign::CampaignBiddingStrategy;
pub use crate::ads::resources::Campaign;
pub use crate::error::{Error, ValidationError, Violation, ViolationKind};
pub use crate::unknown::{UnknownField, UnknownFields};

use bytes::Buf;
use prost::Message;

/// Encodes a campaign in the protobuf binary format.
pub fn encode(campaign: &Campaign) -> Vec<u8> {
    campaign.encode_to_vec()
}

/// Decodes a campaign from the protobuf binary format.
///
/// Only the wire format is checked; use [`Campaign::validate`] or
/// [`decode_validated`] to check the schema rules as well.
pub fn decode(buf: impl Buf) -> Result<Campaign, DecodeError> {
    Campaign::decode(buf)
}

/// Decodes a campaign and checks it with [`Campaign::validate`].
pub fn decode_validated(buf: impl Buf) -> Result<Campaign, Error> {
    let campaign = decode(buf)?;
    campaign.validate()?;
    Ok(campaign)
}
