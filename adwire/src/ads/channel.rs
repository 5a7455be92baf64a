use super::enums::{AdvertisingChannelSubType, AdvertisingChannelType};

use AdvertisingChannelSubType as Sub;
use AdvertisingChannelType as Channel;

/// Channel type to the sub-types that may refine it.
///
/// Channel types missing from the table (`HOTEL`, `UNSPECIFIED`, `UNKNOWN`)
/// accept no concrete sub-type.
const SUB_TYPES: &[(Channel, &[Sub])] = &[
    (Channel::Search, &[Sub::SearchMobileApp, Sub::SearchExpress]),
    (
        Channel::Display,
        &[
            Sub::DisplayMobileApp,
            Sub::DisplayExpress,
            Sub::DisplayGmailAd,
            Sub::DisplaySmartCampaign,
        ],
    ),
    (Channel::Shopping, &[Sub::ShoppingSmartAds]),
    (
        Channel::Video,
        &[Sub::VideoOutstream, Sub::VideoAction, Sub::VideoNonSkippable],
    ),
    (
        Channel::MultiChannel,
        &[Sub::AppCampaign, Sub::AppCampaignForEngagement],
    ),
];

/// Returns the sub-types declared for `channel`.
pub fn valid_sub_types(channel: AdvertisingChannelType) -> &'static [AdvertisingChannelSubType] {
    SUB_TYPES
        .iter()
        .find(|(candidate, _)| *candidate == channel)
        .map_or(&[][..], |&(_, sub_types)| sub_types)
}

/// Returns the channel type a concrete sub-type belongs to.
pub fn parent_channel(sub_type: AdvertisingChannelSubType) -> Option<AdvertisingChannelType> {
    SUB_TYPES
        .iter()
        .find(|(_, sub_types)| sub_types.contains(&sub_type))
        .map(|(channel, _)| *channel)
}

/// Whether `sub_type` may be combined with `channel`.
///
/// `UNSPECIFIED` means "no sub-type" and is always accepted. `UNKNOWN` is only
/// ever reported by the server for values newer than this API version, so it is
/// accepted as well.
pub fn is_valid_sub_type(
    channel: AdvertisingChannelType,
    sub_type: AdvertisingChannelSubType,
) -> bool {
    match sub_type {
        Sub::Unspecified | Sub::Unknown => true,
        _ => valid_sub_types(channel).contains(&sub_type),
    }
}
