//! Types shared across Google Ads resources (`google.ads.googleads.v1.common`).
//!
//! Wrapper-typed fields (`google.protobuf.Int64Value` and friends) are
//! represented as `Option<T>`: `None` is "unset", `Some(0)` is a set zero.

/// A mapping that can be used by custom parameter tags in a
/// `tracking_url_template`, `final_urls`, or `mobile_final_urls`.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct CustomParameter {
    /// The key matching the parameter tag name.
    #[prost(message, optional, tag = "1")]
    pub key: ::core::option::Option<::prost::alloc::string::String>,
    /// The value to be substituted.
    #[prost(message, optional, tag = "2")]
    pub value: ::core::option::Option<::prost::alloc::string::String>,
}

/// Settings for Real-Time Bidding, a feature only available for campaigns
/// targeting the Ad Exchange network.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct RealTimeBiddingSetting {
    /// Whether the campaign is opted in to real-time bidding.
    #[prost(message, optional, tag = "1")]
    pub opt_in: ::core::option::Option<bool>,
}

/// Manual click-based bidding where user pays per click.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct ManualCpc {
    /// Whether bids are to be enhanced based on conversion optimizer data.
    #[prost(message, optional, tag = "1")]
    pub enhanced_cpc_enabled: ::core::option::Option<bool>,
}

/// Manual impression-based bidding where user pays per thousand impressions.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct ManualCpm {}

/// View based bidding where user pays per video view.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct ManualCpv {}

/// An automated bidding strategy that sets bids to help get the most conversions
/// for your campaign while spending your budget.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct MaximizeConversions {}

/// An automated bidding strategy which tries to maximize conversion value
/// given a daily budget.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct MaximizeConversionValue {
    /// The target return on ad spend (ROAS) option. If set, the bid strategy will
    /// maximize revenue while averaging the target return on ad spend.
    #[prost(message, optional, tag = "1")]
    pub target_roas: ::core::option::Option<f64>,
}

/// An automated bid strategy that sets bids to help get as many conversions as
/// possible at the target cost-per-acquisition (CPA) you set.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct TargetCpa {
    /// Average CPA target, in micros of the account currency.
    #[prost(message, optional, tag = "1")]
    pub target_cpa_micros: ::core::option::Option<i64>,
    /// Maximum bid limit that can be set by the bid strategy.
    #[prost(message, optional, tag = "2")]
    pub cpc_bid_ceiling_micros: ::core::option::Option<i64>,
    /// Minimum bid limit that can be set by the bid strategy.
    #[prost(message, optional, tag = "3")]
    pub cpc_bid_floor_micros: ::core::option::Option<i64>,
}

/// Target CPM (cost per thousand impressions) is an automated bidding strategy
/// that sets bids to optimize performance given the target CPM you set.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct TargetCpm {}

/// An automated bidding strategy that helps you maximize revenue while averaging
/// a specific target return on ad spend (ROAS).
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct TargetRoas {
    /// The desired revenue (based on conversion data) per unit of spend.
    #[prost(message, optional, tag = "1")]
    pub target_roas: ::core::option::Option<f64>,
    #[prost(message, optional, tag = "2")]
    pub cpc_bid_ceiling_micros: ::core::option::Option<i64>,
    #[prost(message, optional, tag = "3")]
    pub cpc_bid_floor_micros: ::core::option::Option<i64>,
}

/// An automated bid strategy that sets your bids to help get as many clicks as
/// possible within your budget.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct TargetSpend {
    /// The spend target under which to maximize clicks.
    #[prost(message, optional, tag = "1")]
    pub target_spend_micros: ::core::option::Option<i64>,
    #[prost(message, optional, tag = "2")]
    pub cpc_bid_ceiling_micros: ::core::option::Option<i64>,
}

/// A bidding strategy where bids are a fraction of the advertised price for
/// some good or service.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct PercentCpc {
    /// Maximum bid limit that can be set by the bid strategy, in micros.
    #[prost(message, optional, tag = "1")]
    pub cpc_bid_ceiling_micros: ::core::option::Option<i64>,
    /// Adjusts the bid for each auction upward or downward, depending on the
    /// likelihood of a conversion.
    #[prost(message, optional, tag = "2")]
    pub enhanced_cpc_enabled: ::core::option::Option<bool>,
}

impl_name!("google.ads.googleads.v1.common" => {
    CustomParameter = "CustomParameter",
    RealTimeBiddingSetting = "RealTimeBiddingSetting",
    ManualCpc = "ManualCpc",
    ManualCpm = "ManualCpm",
    ManualCpv = "ManualCpv",
    MaximizeConversions = "MaximizeConversions",
    MaximizeConversionValue = "MaximizeConversionValue",
    TargetCpa = "TargetCpa",
    TargetCpm = "TargetCpm",
    TargetRoas = "TargetRoas",
    TargetSpend = "TargetSpend",
    PercentCpc = "PercentCpc",
});
