//! Nested message and enum types in `Campaign`.

use crate::ads::common;
use crate::ads::enums::BiddingStrategyType;

/// The network settings for the campaign.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct NetworkSettings {
    /// Whether ads will be served with google.com search results.
    #[prost(message, optional, tag = "1")]
    pub target_google_search: ::core::option::Option<bool>,
    /// Whether ads will be served on partner sites in the Google Search Network
    /// (requires `target_google_search` to also be `true`).
    #[prost(message, optional, tag = "2")]
    pub target_search_network: ::core::option::Option<bool>,
    /// Whether ads will be served on specified placements in the Google Display
    /// Network.
    #[prost(message, optional, tag = "3")]
    pub target_content_network: ::core::option::Option<bool>,
    /// Whether ads will be served on the Google Partner Network.
    /// This is available only to some select Google partner accounts.
    #[prost(message, optional, tag = "4")]
    pub target_partner_search_network: ::core::option::Option<bool>,
}

/// Campaign-level settings for hotel ads.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct HotelSettingInfo {
    /// The linked Hotel Center account.
    #[prost(message, optional, tag = "1")]
    pub hotel_center_id: ::core::option::Option<i64>,
}

/// The setting for controlling Dynamic Search Ads (DSA).
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct DynamicSearchAdsSetting {
    /// The Internet domain name that this setting represents, e.g., "google.com"
    /// or "www.google.com".
    #[prost(message, optional, tag = "1")]
    pub domain_name: ::core::option::Option<::prost::alloc::string::String>,
    /// The language code specifying the language of the domain, e.g., "en".
    #[prost(message, optional, tag = "2")]
    pub language_code: ::core::option::Option<::prost::alloc::string::String>,
    /// Whether the campaign uses advertiser supplied URLs exclusively.
    #[prost(message, optional, tag = "3")]
    pub use_supplied_urls_only: ::core::option::Option<bool>,
    /// The list of page feeds associated with the campaign.
    #[prost(message, repeated, tag = "5")]
    pub feeds: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

/// The setting for Shopping campaigns. Defines the universe of products that
/// can be advertised by the campaign, and how this campaign interacts with
/// other Shopping campaigns.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct ShoppingSetting {
    /// ID of the Merchant Center account. Immutable once set.
    #[prost(message, optional, tag = "1")]
    pub merchant_id: ::core::option::Option<i64>,
    /// Sales country of products to include in the campaign, as an ISO 3166
    /// two-letter code.
    #[prost(message, optional, tag = "2")]
    pub sales_country: ::core::option::Option<::prost::alloc::string::String>,
    /// Priority of the campaign. Allowed values are between 0 and 2, inclusive.
    #[prost(message, optional, tag = "3")]
    pub campaign_priority: ::core::option::Option<i32>,
    /// Whether to include local products.
    #[prost(message, optional, tag = "4")]
    pub enable_local: ::core::option::Option<bool>,
}

/// Campaign level settings for tracking information.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct TrackingSetting {
    /// The url used for dynamic tracking.
    #[prost(message, optional, tag = "1")]
    pub tracking_url: ::core::option::Option<::prost::alloc::string::String>,
}

/// Describes how unbranded pharma ads will be displayed.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct VanityPharma {
    /// The display mode for vanity pharma URLs.
    #[prost(
        enumeration = "crate::ads::enums::VanityPharmaDisplayUrlMode",
        tag = "1"
    )]
    pub vanity_pharma_display_url_mode: i32,
    /// The text that will be displayed in display URL of the text ad when
    /// website description is the selected display mode for vanity pharma URLs.
    #[prost(enumeration = "crate::ads::enums::VanityPharmaText", tag = "2")]
    pub vanity_pharma_text: i32,
}

/// Selective optimization setting for this campaign, which includes a set of
/// conversion actions to optimize this campaign towards.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct SelectiveOptimization {
    /// The selected set of conversion action resource names.
    #[prost(message, repeated, tag = "1")]
    pub conversion_actions: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

/// The bidding strategy for the campaign.
///
/// Must be either portfolio (created via BiddingStrategy service) or standard,
/// that is embedded into the campaign.
#[derive(Clone, PartialEq, ::prost::Oneof)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CampaignBiddingStrategy {
    /// Portfolio bidding strategy used by campaign.
    #[prost(message, tag = "23")]
    BiddingStrategy(::prost::alloc::string::String),
    /// Standard Manual CPC bidding strategy.
    #[prost(message, tag = "24")]
    ManualCpc(common::ManualCpc),
    /// Standard Manual CPM bidding strategy.
    #[prost(message, tag = "25")]
    ManualCpm(common::ManualCpm),
    /// A bidding strategy that pays a configurable amount per video view.
    #[prost(message, tag = "37")]
    ManualCpv(common::ManualCpv),
    /// Standard Maximize Conversions bidding strategy that automatically
    /// maximizes number of conversions given a daily budget.
    #[prost(message, tag = "30")]
    MaximizeConversions(common::MaximizeConversions),
    /// Standard Maximize Conversion Value bidding strategy that automatically sets
    /// bids to maximize revenue while spending your budget.
    #[prost(message, tag = "31")]
    MaximizeConversionValue(common::MaximizeConversionValue),
    /// Standard Target CPA bidding strategy.
    #[prost(message, tag = "26")]
    TargetCpa(common::TargetCpa),
    /// Standard Target ROAS bidding strategy.
    #[prost(message, tag = "29")]
    TargetRoas(common::TargetRoas),
    /// Standard Target Spend bidding strategy.
    #[prost(message, tag = "27")]
    TargetSpend(common::TargetSpend),
    /// Standard Percent Cpc bidding strategy.
    #[prost(message, tag = "34")]
    PercentCpc(common::PercentCpc),
    /// A bidding strategy that automatically optimizes cost per thousand
    /// impressions.
    #[prost(message, tag = "41")]
    TargetCpm(common::TargetCpm),
}

impl CampaignBiddingStrategy {
    /// Wire tags of every alternative, in declaration order.
    pub const TAGS: [u32; 11] = [23, 24, 25, 37, 30, 31, 26, 29, 27, 34, 41];

    /// The wire tag of the active alternative.
    pub fn tag(&self) -> u32 {
        match self {
            CampaignBiddingStrategy::BiddingStrategy(_) => 23,
            CampaignBiddingStrategy::ManualCpc(_) => 24,
            CampaignBiddingStrategy::ManualCpm(_) => 25,
            CampaignBiddingStrategy::ManualCpv(_) => 37,
            CampaignBiddingStrategy::MaximizeConversions(_) => 30,
            CampaignBiddingStrategy::MaximizeConversionValue(_) => 31,
            CampaignBiddingStrategy::TargetCpa(_) => 26,
            CampaignBiddingStrategy::TargetRoas(_) => 29,
            CampaignBiddingStrategy::TargetSpend(_) => 27,
            CampaignBiddingStrategy::PercentCpc(_) => 34,
            CampaignBiddingStrategy::TargetCpm(_) => 41,
        }
    }

    /// The protobuf field name of the active alternative.
    pub fn field_name(&self) -> &'static str {
        match self {
            CampaignBiddingStrategy::BiddingStrategy(_) => "bidding_strategy",
            CampaignBiddingStrategy::ManualCpc(_) => "manual_cpc",
            CampaignBiddingStrategy::ManualCpm(_) => "manual_cpm",
            CampaignBiddingStrategy::ManualCpv(_) => "manual_cpv",
            CampaignBiddingStrategy::MaximizeConversions(_) => "maximize_conversions",
            CampaignBiddingStrategy::MaximizeConversionValue(_) => "maximize_conversion_value",
            CampaignBiddingStrategy::TargetCpa(_) => "target_cpa",
            CampaignBiddingStrategy::TargetRoas(_) => "target_roas",
            CampaignBiddingStrategy::TargetSpend(_) => "target_spend",
            CampaignBiddingStrategy::PercentCpc(_) => "percent_cpc",
            CampaignBiddingStrategy::TargetCpm(_) => "target_cpm",
        }
    }

    /// The bidding strategy type implied by this alternative.
    ///
    /// A portfolio reference says nothing about the type of the referenced
    /// strategy, so it yields `None`; the server fills in the type for those.
    pub fn strategy_type(&self) -> Option<BiddingStrategyType> {
        let strategy_type = match self {
            CampaignBiddingStrategy::BiddingStrategy(_) => return None,
            CampaignBiddingStrategy::ManualCpc(_) => BiddingStrategyType::ManualCpc,
            CampaignBiddingStrategy::ManualCpm(_) => BiddingStrategyType::ManualCpm,
            CampaignBiddingStrategy::ManualCpv(_) => BiddingStrategyType::ManualCpv,
            CampaignBiddingStrategy::MaximizeConversions(_) => {
                BiddingStrategyType::MaximizeConversions
            }
            CampaignBiddingStrategy::MaximizeConversionValue(_) => {
                BiddingStrategyType::MaximizeConversionValue
            }
            CampaignBiddingStrategy::TargetCpa(_) => BiddingStrategyType::TargetCpa,
            CampaignBiddingStrategy::TargetRoas(_) => BiddingStrategyType::TargetRoas,
            CampaignBiddingStrategy::TargetSpend(_) => BiddingStrategyType::TargetSpend,
            CampaignBiddingStrategy::PercentCpc(_) => BiddingStrategyType::PercentCpc,
            CampaignBiddingStrategy::TargetCpm(_) => BiddingStrategyType::TargetCpm,
        };
        Some(strategy_type)
    }
}

macro_rules! from_strategy {
    ($($variant:ident),+) => {
        $(
            impl From<common::$variant> for CampaignBiddingStrategy {
                fn from(strategy: common::$variant) -> Self {
                    CampaignBiddingStrategy::$variant(strategy)
                }
            }
        )+
    };
}

from_strategy!(
    ManualCpc,
    ManualCpm,
    ManualCpv,
    MaximizeConversions,
    MaximizeConversionValue,
    TargetCpa,
    TargetRoas,
    TargetSpend,
    PercentCpc,
    TargetCpm
);

impl_name!("google.ads.googleads.v1.resources" => {
    NetworkSettings = "Campaign.NetworkSettings",
    HotelSettingInfo = "Campaign.HotelSettingInfo",
    DynamicSearchAdsSetting = "Campaign.DynamicSearchAdsSetting",
    ShoppingSetting = "Campaign.ShoppingSetting",
    TrackingSetting = "Campaign.TrackingSetting",
    VanityPharma = "Campaign.VanityPharma",
    SelectiveOptimization = "Campaign.SelectiveOptimization",
});
