//! Field metadata for [`Campaign`]: names, wire tags and who may write them.

use super::Campaign;

/// Who may write a field, and when.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldAccess {
    /// Settable at creation and by later updates.
    Mutable,
    /// Settable at creation only; fixed once the campaign has an id.
    Immutable,
    /// Computed by the server; never written by clients.
    ReadOnly,
}

/// Static description of a single campaign field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    pub name: &'static str,
    pub tag: u32,
    pub access: FieldAccess,
}

const fn field(name: &'static str, tag: u32, access: FieldAccess) -> FieldInfo {
    FieldInfo { name, tag, access }
}

use FieldAccess::{Immutable, Mutable, ReadOnly};

impl Campaign {
    /// Every declared field, in tag order. The oneof alternatives are listed
    /// individually.
    pub const FIELDS: &'static [FieldInfo] = &[
        field("resource_name", 1, Immutable),
        field("id", 3, ReadOnly),
        field("name", 4, Mutable),
        field("status", 5, Mutable),
        field("campaign_budget", 6, Mutable),
        field("ad_serving_optimization_status", 8, Mutable),
        field("advertising_channel_type", 9, Immutable),
        field("advertising_channel_sub_type", 10, Immutable),
        field("tracking_url_template", 11, Mutable),
        field("url_custom_parameters", 12, Mutable),
        field("network_settings", 14, Mutable),
        field("start_date", 19, Mutable),
        field("end_date", 20, Mutable),
        field("serving_status", 21, ReadOnly),
        field("bidding_strategy_type", 22, ReadOnly),
        field("bidding_strategy", 23, Mutable),
        field("manual_cpc", 24, Mutable),
        field("manual_cpm", 25, Mutable),
        field("target_cpa", 26, Mutable),
        field("target_spend", 27, Mutable),
        field("target_roas", 29, Mutable),
        field("maximize_conversions", 30, Mutable),
        field("maximize_conversion_value", 31, Mutable),
        field("hotel_setting", 32, Immutable),
        field("dynamic_search_ads_setting", 33, Mutable),
        field("percent_cpc", 34, Mutable),
        field("shopping_setting", 36, Mutable),
        field("manual_cpv", 37, Mutable),
        field("final_url_suffix", 38, Mutable),
        field("real_time_bidding_setting", 39, Mutable),
        field("target_cpm", 41, Mutable),
        field("video_brand_safety_suitability", 42, Mutable),
        field("vanity_pharma", 44, Mutable),
        field("selective_optimization", 45, Mutable),
        field("tracking_setting", 46, ReadOnly),
    ];

    /// Fields the API refuses in filter predicates.
    pub const NON_FILTERABLE: &'static [&'static str] = &["start_date", "end_date"];

    pub fn field_info(name: &str) -> Option<&'static FieldInfo> {
        Campaign::FIELDS.iter().find(|field| field.name == name)
    }

    pub fn field_by_tag(tag: u32) -> Option<&'static FieldInfo> {
        Campaign::FIELDS
            .binary_search_by_key(&tag, |field| field.tag)
            .ok()
            .map(|index| &Campaign::FIELDS[index])
    }
}
