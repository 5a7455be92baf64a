//! Google Ads resources (`google.ads.googleads.v1.resources`).

pub mod campaign;

mod encoding;
mod fields;
mod validate;

pub use self::fields::{FieldAccess, FieldInfo};

use crate::ads::common::{CustomParameter, RealTimeBiddingSetting};
use crate::ads::enums::{
    AdServingOptimizationStatus, AdvertisingChannelSubType, AdvertisingChannelType,
    BiddingStrategyType, BrandSafetySuitability, CampaignServingStatus, CampaignStatus,
};
use crate::unknown::UnknownFields;

use self::campaign::CampaignBiddingStrategy;

/// A campaign.
///
/// Wrapper-typed fields are `Option`s: `None` means the field is not set, which
/// is distinct from a set zero or empty string. Enum fields hold the raw wire
/// value; use the typed getters to read them.
///
/// Fields this version does not declare are kept in `unknown_fields` and written
/// back out by `encode`.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct Campaign {
    /// The resource name of the campaign, in the form
    /// `customers/{customer_id}/campaigns/{campaign_id}`.
    pub resource_name: String,
    /// The ID of the campaign. Assigned by the server.
    pub id: Option<i64>,
    /// The name of the campaign.
    ///
    /// Required when creating a new campaign. It must not contain any null
    /// (code point 0x0), NL line feed (code point 0xA) or carriage return
    /// (code point 0xD) characters.
    pub name: Option<String>,
    /// The status of the campaign. New campaigns default to `ENABLED`.
    pub status: i32,
    /// The ad serving status of the campaign. Set by the server.
    pub serving_status: i32,
    /// The ad serving optimization status of the campaign.
    pub ad_serving_optimization_status: i32,
    /// The primary serving target for ads within the campaign.
    ///
    /// Can only be set when creating campaigns.
    pub advertising_channel_type: i32,
    /// Optional refinement to `advertising_channel_type`. Must be a valid
    /// sub-type of the parent channel type. Can only be set when creating
    /// campaigns.
    pub advertising_channel_sub_type: i32,
    /// The URL template for constructing a tracking URL.
    pub tracking_url_template: Option<String>,
    /// The list of mappings used to substitute custom parameter tags in a
    /// `tracking_url_template`, `final_urls`, or `mobile_final_urls`.
    pub url_custom_parameters: Vec<CustomParameter>,
    /// Settings for Real-Time Bidding.
    pub real_time_bidding_setting: Option<RealTimeBiddingSetting>,
    /// The network settings for the campaign.
    pub network_settings: Option<campaign::NetworkSettings>,
    /// The hotel setting for the campaign. Immutable.
    pub hotel_setting: Option<campaign::HotelSettingInfo>,
    /// The setting for controlling Dynamic Search Ads (DSA).
    pub dynamic_search_ads_setting: Option<campaign::DynamicSearchAdsSetting>,
    /// The setting for controlling Shopping campaigns.
    pub shopping_setting: Option<campaign::ShoppingSetting>,
    /// The budget of the campaign, as a campaign budget resource name.
    pub campaign_budget: Option<String>,
    /// The type of bidding strategy. Set by the server; see
    /// [`Campaign::bidding_strategy_type`] for the effective value.
    pub bidding_strategy_type: i32,
    /// The date when campaign started, in `YYYY-MM-DD` format.
    ///
    /// This field must not be used in WHERE clauses.
    pub start_date: Option<String>,
    /// The date when campaign ended, in `YYYY-MM-DD` format.
    ///
    /// This field must not be used in WHERE clauses.
    pub end_date: Option<String>,
    /// Suffix used to append query parameters to landing pages that are served
    /// with parallel tracking.
    pub final_url_suffix: Option<String>,
    /// 3-Tier Brand Safety setting for the campaign.
    pub video_brand_safety_suitability: i32,
    /// Describes how unbranded pharma ads will be displayed.
    pub vanity_pharma: Option<campaign::VanityPharma>,
    /// Selective optimization setting for this campaign.
    pub selective_optimization: Option<campaign::SelectiveOptimization>,
    /// Campaign level settings for tracking information. Set by the server.
    pub tracking_setting: Option<campaign::TrackingSetting>,
    /// The bidding strategy for the campaign.
    pub campaign_bidding_strategy: Option<CampaignBiddingStrategy>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub unknown_fields: UnknownFields,
}

impl Campaign {
    /// A campaign ready to be submitted for creation: named, with a channel type
    /// and the `ENABLED` status new campaigns default to.
    pub fn draft(name: impl Into<String>, channel: AdvertisingChannelType) -> Campaign {
        Campaign {
            name: Some(name.into()),
            status: CampaignStatus::Enabled.into(),
            advertising_channel_type: channel.into(),
            ..Default::default()
        }
    }

    /// Sets the bidding strategy, replacing whichever alternative was set before,
    /// and recomputes `bidding_strategy_type`.
    pub fn apply_bidding_strategy(&mut self, strategy: impl Into<CampaignBiddingStrategy>) {
        let strategy = strategy.into();
        self.bidding_strategy_type = strategy
            .strategy_type()
            .unwrap_or(BiddingStrategyType::Unspecified)
            .into();
        self.campaign_bidding_strategy = Some(strategy);
    }

    /// Sets a portfolio bidding strategy by resource name.
    pub fn apply_portfolio_strategy(&mut self, bidding_strategy: impl Into<String>) {
        self.apply_bidding_strategy(CampaignBiddingStrategy::BiddingStrategy(
            bidding_strategy.into(),
        ));
    }

    /// Transitions the campaign to `REMOVED`. Campaigns are never deleted.
    pub fn remove(&mut self) {
        self.set_status(CampaignStatus::Removed);
    }

    pub fn is_removed(&self) -> bool {
        self.status() == CampaignStatus::Removed
    }

    /// The effective bidding strategy type.
    ///
    /// For an inline strategy this is derived from the active alternative; for a
    /// portfolio reference (or no strategy) it is the stored server value.
    pub fn bidding_strategy_type(&self) -> BiddingStrategyType {
        self.campaign_bidding_strategy
            .as_ref()
            .and_then(CampaignBiddingStrategy::strategy_type)
            .unwrap_or_else(|| {
                BiddingStrategyType::try_from(self.bidding_strategy_type).unwrap_or_default()
            })
    }

    /// Returns the enum value of `status`, or the default if the field is set to
    /// an invalid enum value.
    pub fn status(&self) -> CampaignStatus {
        CampaignStatus::try_from(self.status).unwrap_or_default()
    }

    /// Sets `status` to the provided enum value.
    pub fn set_status(&mut self, value: CampaignStatus) {
        self.status = value.into();
    }

    /// Returns the enum value of `serving_status`, or the default if the field is
    /// set to an invalid enum value.
    pub fn serving_status(&self) -> CampaignServingStatus {
        CampaignServingStatus::try_from(self.serving_status).unwrap_or_default()
    }

    /// Returns the enum value of `ad_serving_optimization_status`, or the default
    /// if the field is set to an invalid enum value.
    pub fn ad_serving_optimization_status(&self) -> AdServingOptimizationStatus {
        AdServingOptimizationStatus::try_from(self.ad_serving_optimization_status)
            .unwrap_or_default()
    }

    /// Sets `ad_serving_optimization_status` to the provided enum value.
    pub fn set_ad_serving_optimization_status(&mut self, value: AdServingOptimizationStatus) {
        self.ad_serving_optimization_status = value.into();
    }

    /// Returns the enum value of `advertising_channel_type`, or the default if
    /// the field is set to an invalid enum value.
    pub fn advertising_channel_type(&self) -> AdvertisingChannelType {
        AdvertisingChannelType::try_from(self.advertising_channel_type).unwrap_or_default()
    }

    /// Sets `advertising_channel_type` to the provided enum value.
    pub fn set_advertising_channel_type(&mut self, value: AdvertisingChannelType) {
        self.advertising_channel_type = value.into();
    }

    /// Returns the enum value of `advertising_channel_sub_type`, or the default
    /// if the field is set to an invalid enum value.
    pub fn advertising_channel_sub_type(&self) -> AdvertisingChannelSubType {
        AdvertisingChannelSubType::try_from(self.advertising_channel_sub_type).unwrap_or_default()
    }

    /// Sets `advertising_channel_sub_type` to the provided enum value.
    pub fn set_advertising_channel_sub_type(&mut self, value: AdvertisingChannelSubType) {
        self.advertising_channel_sub_type = value.into();
    }

    /// Returns the enum value of `video_brand_safety_suitability`, or the default
    /// if the field is set to an invalid enum value.
    pub fn video_brand_safety_suitability(&self) -> BrandSafetySuitability {
        BrandSafetySuitability::try_from(self.video_brand_safety_suitability).unwrap_or_default()
    }

    /// Sets `video_brand_safety_suitability` to the provided enum value.
    pub fn set_video_brand_safety_suitability(&mut self, value: BrandSafetySuitability) {
        self.video_brand_safety_suitability = value.into();
    }
}

impl_name!("google.ads.googleads.v1.resources" => {
    Campaign = "Campaign",
});
