use adwire::ads::common::{
    CustomParameter, ManualCpc, RealTimeBiddingSetting, ManualCpm, ManualCpv, MaximizeConversionValue,
    MaximizeConversions, PercentCpc, TargetCpa, TargetCpm, TargetRoas, TargetSpend,
};
use adwire::ads::enums::{AdvertisingChannelSubType, AdvertisingChannelType, BiddingStrategyType};
use adwire::ads::resources::campaign::{
    DynamicSearchAdsSetting, HotelSettingInfo, NetworkSettings, SelectiveOptimization,
    ShoppingSetting, TrackingSetting, VanityPharma,
};
use adwire::ads::valid_sub_types;
use adwire::{Campaign, CampaignBiddingStrategy, UnknownField, UnknownFields};
use prost::encoding::{decode_key, skip_field, DecodeContext};
use prost::Message;
use proptest::option;
use proptest::prelude::*;

fn micros() -> impl Strategy<Value = Option<i64>> {
    option::of(0..10_000_000_000i64)
}

fn arb_strategy() -> impl Strategy<Value = CampaignBiddingStrategy> {
    use CampaignBiddingStrategy as S;

    prop_oneof![
        (1..1_000_000i64)
            .prop_map(|id| S::BiddingStrategy(format!("customers/1/biddingStrategies/{}", id))),
        any::<Option<bool>>().prop_map(|enhanced_cpc_enabled| {
            S::ManualCpc(ManualCpc {
                enhanced_cpc_enabled,
            })
        }),
        Just(S::ManualCpm(ManualCpm {})),
        Just(S::ManualCpv(ManualCpv {})),
        Just(S::MaximizeConversions(MaximizeConversions {})),
        option::of(0.01..100.0f64).prop_map(|target_roas| {
            S::MaximizeConversionValue(MaximizeConversionValue { target_roas })
        }),
        (micros(), micros(), micros()).prop_map(|(target, ceiling, floor)| {
            S::TargetCpa(TargetCpa {
                target_cpa_micros: target,
                cpc_bid_ceiling_micros: ceiling,
                cpc_bid_floor_micros: floor,
            })
        }),
        (option::of(0.01..100.0f64), micros(), micros()).prop_map(|(roas, ceiling, floor)| {
            S::TargetRoas(TargetRoas {
                target_roas: roas,
                cpc_bid_ceiling_micros: ceiling,
                cpc_bid_floor_micros: floor,
            })
        }),
        (micros(), micros()).prop_map(|(spend, ceiling)| {
            S::TargetSpend(TargetSpend {
                target_spend_micros: spend,
                cpc_bid_ceiling_micros: ceiling,
            })
        }),
        (micros(), any::<Option<bool>>()).prop_map(|(ceiling, enhanced)| {
            S::PercentCpc(PercentCpc {
                cpc_bid_ceiling_micros: ceiling,
                enhanced_cpc_enabled: enhanced,
            })
        }),
        Just(S::TargetCpm(TargetCpm {})),
    ]
}

prop_compose! {
    fn arb_network()(
        search in any::<Option<bool>>(),
        partners in any::<Option<bool>>(),
        content in any::<Option<bool>>(),
        partner_network in any::<Option<bool>>(),
    ) -> NetworkSettings {
        NetworkSettings {
            target_google_search: search,
            target_search_network: partners,
            target_content_network: content,
            target_partner_search_network: partner_network,
        }
    }
}

prop_compose! {
    fn arb_shopping()(
        merchant_id in option::of(1..i64::MAX),
        sales_country in option::of("[A-Z]{2}"),
        campaign_priority in option::of(0..=2i32),
        enable_local in any::<Option<bool>>(),
    ) -> ShoppingSetting {
        ShoppingSetting {
            merchant_id,
            sales_country,
            campaign_priority,
            enable_local,
        }
    }
}

prop_compose! {
    fn arb_dsa()(
        domain_name in option::of("[a-z]{1,12}\\.com"),
        language_code in option::of("[a-z]{2}"),
        use_supplied_urls_only in any::<Option<bool>>(),
        feeds in prop::collection::vec("customers/1/feeds/[0-9]{1,6}", 0..3),
    ) -> DynamicSearchAdsSetting {
        DynamicSearchAdsSetting {
            domain_name,
            language_code,
            use_supplied_urls_only,
            feeds,
        }
    }
}

fn arb_unknown_field() -> impl Strategy<Value = UnknownField> {
    prop_oneof![
        any::<u64>().prop_map(UnknownField::Varint),
        any::<u64>().prop_map(UnknownField::SixtyFourBit),
        prop::collection::vec(any::<u8>(), 0..16)
            .prop_map(|bytes| UnknownField::LengthDelimited(bytes.into())),
        any::<u32>().prop_map(UnknownField::ThirtyTwoBit),
    ]
}

fn arb_unknown_fields() -> impl Strategy<Value = UnknownFields> {
    // Tags above every declared Campaign field.
    prop::collection::vec((47..2_000u32, arb_unknown_field()), 0..4).prop_map(|fields| {
        let mut unknown = UnknownFields::new();
        for (tag, field) in fields {
            unknown.push(tag, field);
        }
        unknown
    })
}

fn date() -> impl Strategy<Value = String> {
    (2000..2100u32, 1..=12u32, 1..=28u32)
        .prop_map(|(year, month, day)| format!("{:04}-{:02}-{:02}", year, month, day))
}

prop_compose! {
    /// Settings and server fields, on an otherwise empty campaign.
    fn arb_settings()(
        start_date in option::of(date()),
        end_date in option::of(date()),
        hotel_center_id in option::of(option::of(1..i64::MAX)),
        dynamic_search_ads_setting in option::of(arb_dsa()),
        vanity_pharma in option::of((0..=3i32, 0..=5i32)),
        conversion_actions in option::of(
            prop::collection::vec("customers/1/conversionActions/[0-9]{1,6}", 0..3),
        ),
        tracking_url in option::of(option::of("https://[a-z]{1,10}\\.example/[a-z]{0,8}")),
        opt_in in option::of(any::<Option<bool>>()),
        final_url_suffix in option::of("[a-z]{1,8}=[a-z0-9]{1,8}"),
        serving_status in 0..=6i32,
        video_brand_safety_suitability in 0..=4i32,
        unknown_fields in arb_unknown_fields(),
    ) -> Campaign {
        Campaign {
            start_date,
            end_date,
            hotel_setting: hotel_center_id
                .map(|hotel_center_id| HotelSettingInfo { hotel_center_id }),
            dynamic_search_ads_setting,
            vanity_pharma: vanity_pharma.map(|(mode, text)| VanityPharma {
                vanity_pharma_display_url_mode: mode,
                vanity_pharma_text: text,
            }),
            selective_optimization: conversion_actions
                .map(|conversion_actions| SelectiveOptimization { conversion_actions }),
            tracking_setting: tracking_url.map(|tracking_url| TrackingSetting { tracking_url }),
            real_time_bidding_setting: opt_in.map(|opt_in| RealTimeBiddingSetting { opt_in }),
            final_url_suffix,
            serving_status,
            video_brand_safety_suitability,
            unknown_fields,
            ..Default::default()
        }
    }
}

prop_compose! {
    fn arb_campaign()(
        id in option::of(1..i64::MAX),
        name in option::of("[^\\x00\\n\\r]{0,40}"),
        status in 0..=4i32,
        channel in 0..=7i32,
        sub_type in 0..=13i32,
        budget in option::of(1..1_000_000i64),
        strategy in option::of(arb_strategy()),
        tracking_url_template in option::of(".{0,24}"),
        network_settings in option::of(arb_network()),
        shopping_setting in option::of(arb_shopping()),
        parameters in prop::collection::vec(("[a-z]{1,8}", option::of(".{0,8}")), 0..4),
        settings in arb_settings(),
    ) -> Campaign {
        let mut campaign = Campaign {
            id,
            name,
            status,
            advertising_channel_type: channel,
            advertising_channel_sub_type: sub_type,
            campaign_budget: budget.map(|id| format!("customers/1/campaignBudgets/{}", id)),
            tracking_url_template,
            network_settings,
            shopping_setting,
            url_custom_parameters: parameters
                .into_iter()
                .map(|(key, value)| CustomParameter { key: Some(key), value })
                .collect(),
            ..settings
        };
        if let Some(strategy) = strategy {
            campaign.apply_bidding_strategy(strategy);
        }
        campaign
    }
}

fn oneof_tags_on_wire(mut buf: &[u8]) -> Vec<u32> {
    let mut tags = Vec::new();
    while !buf.is_empty() {
        let (tag, wire_type) = decode_key(&mut buf).unwrap();
        if CampaignBiddingStrategy::TAGS.contains(&tag) {
            tags.push(tag);
        }
        skip_field(wire_type, tag, &mut buf, DecodeContext::default()).unwrap();
    }
    tags
}

fn has_forbidden_character(name: &str) -> bool {
    name.chars().any(|c| matches!(c, '\0' | '\n' | '\r'))
}

proptest! {
    #[test]
    fn encode_decode_roundtrip(campaign in arb_campaign()) {
        let buf = adwire::encode(&campaign);
        prop_assert_eq!(buf.len(), campaign.encoded_len());
        let decoded = adwire::decode(buf.as_slice()).unwrap();
        prop_assert_eq!(&decoded, &campaign);
        prop_assert_eq!(adwire::encode(&decoded), buf);
    }

    #[test]
    fn apply_sets_exactly_one_strategy(
        mut campaign in arb_campaign(),
        strategy in arb_strategy(),
    ) {
        campaign.apply_bidding_strategy(strategy.clone());
        prop_assert_eq!(campaign.campaign_bidding_strategy.as_ref(), Some(&strategy));
        prop_assert_eq!(
            campaign.bidding_strategy_type(),
            strategy.strategy_type().unwrap_or(BiddingStrategyType::Unspecified)
        );
        prop_assert_eq!(oneof_tags_on_wire(&campaign.encode_to_vec()), vec![strategy.tag()]);
    }

    #[test]
    fn name_rejected_iff_forbidden_character(name in "[a-z \\x00\\n\\r\\t]{0,12}") {
        let campaign = Campaign { name: Some(name.clone()), ..Default::default() };
        prop_assert_eq!(campaign.validate().is_err(), has_forbidden_character(&name));
    }

    #[test]
    fn arbitrary_names(name in any::<String>()) {
        let campaign = Campaign { name: Some(name.clone()), ..Default::default() };
        prop_assert_eq!(campaign.validate().is_err(), has_forbidden_character(&name));
    }

    #[test]
    fn sub_type_must_belong_to_channel(channel in 0..=7i32, sub_type in 0..=13i32) {
        let campaign = Campaign {
            advertising_channel_type: channel,
            advertising_channel_sub_type: sub_type,
            ..Default::default()
        };
        let channel = AdvertisingChannelType::try_from(channel).unwrap();
        let sub_type = AdvertisingChannelSubType::try_from(sub_type).unwrap();
        let allowed = matches!(
            sub_type,
            AdvertisingChannelSubType::Unspecified | AdvertisingChannelSubType::Unknown
        ) || valid_sub_types(channel).contains(&sub_type);
        prop_assert_eq!(campaign.validate().is_ok(), allowed);
    }
}
