//! Forward compatibility: a campaign written by a newer schema survives being
//! decoded and re-encoded by this one.

use adwire::ads::enums::AdvertisingChannelType;
use adwire::{Campaign, UnknownField};
use prost::Message;

use crate::roundtrip;

/// A subset of a newer `Campaign` that adds fields this crate does not
/// declare.
#[derive(Clone, PartialEq, ::prost::Message)]
struct NewerCampaign {
    #[prost(message, optional, tag = "4")]
    name: Option<String>,
    #[prost(int32, tag = "9")]
    advertising_channel_type: i32,
    #[prost(message, repeated, tag = "40")]
    frequency_caps: Vec<FrequencyCap>,
    #[prost(message, optional, tag = "43")]
    targeting_setting: Option<TargetingSetting>,
    #[prost(sint64, tag = "100")]
    experiment_offset: i64,
    #[prost(fixed32, tag = "101")]
    checksum: u32,
    #[prost(double, tag = "102")]
    weight: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
struct FrequencyCap {
    #[prost(int32, tag = "1")]
    cap: i32,
    #[prost(string, tag = "2")]
    time_unit: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
struct TargetingSetting {
    #[prost(bool, tag = "1")]
    bid_only: bool,
}

fn newer() -> NewerCampaign {
    NewerCampaign {
        name: Some("Launch".to_owned()),
        advertising_channel_type: AdvertisingChannelType::Video.into(),
        frequency_caps: vec![
            FrequencyCap {
                cap: 3,
                time_unit: "DAY".to_owned(),
            },
            FrequencyCap {
                cap: 10,
                time_unit: "WEEK".to_owned(),
            },
        ],
        targeting_setting: Some(TargetingSetting { bid_only: true }),
        experiment_offset: -42,
        checksum: 0xC0FFEE,
        weight: 0.5,
    }
}

#[test]
fn newer_fields_survive_reencoding() {
    crate::init_logger();
    let original = newer();
    let buf = original.encode_to_vec();

    let campaign = adwire::decode(buf.as_slice()).unwrap();
    assert_eq!(campaign.name.as_deref(), Some("Launch"));
    assert_eq!(
        campaign.advertising_channel_type(),
        AdvertisingChannelType::Video
    );
    assert_eq!(campaign.unknown_fields.len(), 6);
    assert_eq!(campaign.unknown_fields.get(40).len(), 2);
    assert!(matches!(
        campaign.unknown_fields.get(101),
        [UnknownField::ThirtyTwoBit(0xC0FFEE)]
    ));
    assert!(matches!(
        campaign.unknown_fields.get(102),
        [UnknownField::SixtyFourBit(_)]
    ));

    let reencoded = adwire::encode(&campaign);
    assert_eq!(NewerCampaign::decode(reencoded.as_slice()).unwrap(), original);
}

#[test]
fn unknown_fields_are_stable() {
    let buf = newer().encode_to_vec();
    let stable = roundtrip::<Campaign>(&buf).unwrap();
    assert_eq!(stable.len(), buf.len());
}

#[test]
fn edits_keep_unknown_fields() {
    let mut campaign = adwire::decode(newer().encode_to_vec().as_slice()).unwrap();
    campaign.name = Some("Launch v2".to_owned());
    campaign.remove();

    let reread = NewerCampaign::decode(adwire::encode(&campaign).as_slice()).unwrap();
    assert_eq!(reread.name.as_deref(), Some("Launch v2"));
    assert_eq!(reread.frequency_caps, newer().frequency_caps);

    let campaign = adwire::decode(adwire::encode(&campaign).as_slice()).unwrap();
    assert!(campaign.is_removed());
}

#[test]
fn clear_drops_unknown_fields() {
    let mut campaign = adwire::decode(newer().encode_to_vec().as_slice()).unwrap();
    campaign.clear();
    assert_eq!(campaign, Campaign::default());
}
