//! Protobuf encoding for [`Campaign`].
//!
//! `Campaign` implements [`Message`] by hand rather than through the derive so
//! that undeclared fields are retained in `unknown_fields`. Field handling
//! otherwise matches what `#[derive(Message)]` produces: proto3 scalars and
//! enums are skipped when zero, wrapper fields are encoded as wrapper messages
//! when `Some`, and the bidding strategy oneof is last-one-wins on decode.

use bytes::{Buf, BufMut};
use prost::encoding::{int32, message, string, DecodeContext, WireType};
use prost::{DecodeError, Message};

use super::campaign::CampaignBiddingStrategy;
use super::Campaign;

const NAME: &str = "Campaign";

macro_rules! optional {
    (encode $tag:expr, $field:expr, $buf:ident) => {
        if let Some(value) = &$field {
            message::encode($tag, value, $buf);
        }
    };
    (len $tag:expr, $field:expr) => {
        $field
            .as_ref()
            .map_or(0, |value| message::encoded_len($tag, value))
    };
}

macro_rules! enum_field {
    (encode $tag:expr, $field:expr, $buf:ident) => {
        if $field != 0 {
            int32::encode($tag, &$field, $buf);
        }
    };
    (len $tag:expr, $field:expr) => {
        if $field != 0 {
            int32::encoded_len($tag, &$field)
        } else {
            0
        }
    };
}

fn with_path<T>(result: Result<T, DecodeError>, field: &'static str) -> Result<T, DecodeError> {
    result.map_err(|mut error| {
        error.push(NAME, field);
        error
    })
}

impl Message for Campaign {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        if !self.resource_name.is_empty() {
            string::encode(1, &self.resource_name, buf);
        }
        optional!(encode 3, self.id, buf);
        optional!(encode 4, self.name, buf);
        enum_field!(encode 5, self.status, buf);
        optional!(encode 6, self.campaign_budget, buf);
        enum_field!(encode 8, self.ad_serving_optimization_status, buf);
        enum_field!(encode 9, self.advertising_channel_type, buf);
        enum_field!(encode 10, self.advertising_channel_sub_type, buf);
        optional!(encode 11, self.tracking_url_template, buf);
        message::encode_repeated(12, &self.url_custom_parameters, buf);
        optional!(encode 14, self.network_settings, buf);
        optional!(encode 19, self.start_date, buf);
        optional!(encode 20, self.end_date, buf);
        enum_field!(encode 21, self.serving_status, buf);
        enum_field!(encode 22, self.bidding_strategy_type, buf);
        if let Some(strategy) = &self.campaign_bidding_strategy {
            strategy.encode(buf);
        }
        optional!(encode 32, self.hotel_setting, buf);
        optional!(encode 33, self.dynamic_search_ads_setting, buf);
        optional!(encode 36, self.shopping_setting, buf);
        optional!(encode 38, self.final_url_suffix, buf);
        optional!(encode 39, self.real_time_bidding_setting, buf);
        enum_field!(encode 42, self.video_brand_safety_suitability, buf);
        optional!(encode 44, self.vanity_pharma, buf);
        optional!(encode 45, self.selective_optimization, buf);
        optional!(encode 46, self.tracking_setting, buf);
        self.unknown_fields.encode_raw(buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => with_path(
                string::merge(wire_type, &mut self.resource_name, buf, ctx),
                "resource_name",
            ),
            3 => with_path(
                message::merge(wire_type, self.id.get_or_insert_with(Default::default), buf, ctx),
                "id",
            ),
            4 => with_path(
                message::merge(wire_type, self.name.get_or_insert_with(Default::default), buf, ctx),
                "name",
            ),
            5 => with_path(int32::merge(wire_type, &mut self.status, buf, ctx), "status"),
            6 => with_path(
                message::merge(
                    wire_type,
                    self.campaign_budget.get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "campaign_budget",
            ),
            8 => with_path(
                int32::merge(wire_type, &mut self.ad_serving_optimization_status, buf, ctx),
                "ad_serving_optimization_status",
            ),
            9 => with_path(
                int32::merge(wire_type, &mut self.advertising_channel_type, buf, ctx),
                "advertising_channel_type",
            ),
            10 => with_path(
                int32::merge(wire_type, &mut self.advertising_channel_sub_type, buf, ctx),
                "advertising_channel_sub_type",
            ),
            11 => with_path(
                message::merge(
                    wire_type,
                    self.tracking_url_template.get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "tracking_url_template",
            ),
            12 => with_path(
                message::merge_repeated(wire_type, &mut self.url_custom_parameters, buf, ctx),
                "url_custom_parameters",
            ),
            14 => with_path(
                message::merge(
                    wire_type,
                    self.network_settings.get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "network_settings",
            ),
            19 => with_path(
                message::merge(
                    wire_type,
                    self.start_date.get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "start_date",
            ),
            20 => with_path(
                message::merge(
                    wire_type,
                    self.end_date.get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "end_date",
            ),
            21 => with_path(
                int32::merge(wire_type, &mut self.serving_status, buf, ctx),
                "serving_status",
            ),
            22 => with_path(
                int32::merge(wire_type, &mut self.bidding_strategy_type, buf, ctx),
                "bidding_strategy_type",
            ),
            23 | 24 | 25 | 26 | 27 | 29 | 30 | 31 | 34 | 37 | 41 => with_path(
                CampaignBiddingStrategy::merge(
                    &mut self.campaign_bidding_strategy,
                    tag,
                    wire_type,
                    buf,
                    ctx,
                ),
                "campaign_bidding_strategy",
            ),
            32 => with_path(
                message::merge(
                    wire_type,
                    self.hotel_setting.get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "hotel_setting",
            ),
            33 => with_path(
                message::merge(
                    wire_type,
                    self.dynamic_search_ads_setting
                        .get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "dynamic_search_ads_setting",
            ),
            36 => with_path(
                message::merge(
                    wire_type,
                    self.shopping_setting.get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "shopping_setting",
            ),
            38 => with_path(
                message::merge(
                    wire_type,
                    self.final_url_suffix.get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "final_url_suffix",
            ),
            39 => with_path(
                message::merge(
                    wire_type,
                    self.real_time_bidding_setting
                        .get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "real_time_bidding_setting",
            ),
            42 => with_path(
                int32::merge(wire_type, &mut self.video_brand_safety_suitability, buf, ctx),
                "video_brand_safety_suitability",
            ),
            44 => with_path(
                message::merge(
                    wire_type,
                    self.vanity_pharma.get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "vanity_pharma",
            ),
            45 => with_path(
                message::merge(
                    wire_type,
                    self.selective_optimization
                        .get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "selective_optimization",
            ),
            46 => with_path(
                message::merge(
                    wire_type,
                    self.tracking_setting.get_or_insert_with(Default::default),
                    buf,
                    ctx,
                ),
                "tracking_setting",
            ),
            _ => self.unknown_fields.merge_field(tag, wire_type, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let resource_name = if self.resource_name.is_empty() {
            0
        } else {
            string::encoded_len(1, &self.resource_name)
        };

        resource_name
            + optional!(len 3, self.id)
            + optional!(len 4, self.name)
            + enum_field!(len 5, self.status)
            + optional!(len 6, self.campaign_budget)
            + enum_field!(len 8, self.ad_serving_optimization_status)
            + enum_field!(len 9, self.advertising_channel_type)
            + enum_field!(len 10, self.advertising_channel_sub_type)
            + optional!(len 11, self.tracking_url_template)
            + message::encoded_len_repeated(12, &self.url_custom_parameters)
            + optional!(len 14, self.network_settings)
            + optional!(len 19, self.start_date)
            + optional!(len 20, self.end_date)
            + enum_field!(len 21, self.serving_status)
            + enum_field!(len 22, self.bidding_strategy_type)
            + self
                .campaign_bidding_strategy
                .as_ref()
                .map_or(0, CampaignBiddingStrategy::encoded_len)
            + optional!(len 32, self.hotel_setting)
            + optional!(len 33, self.dynamic_search_ads_setting)
            + optional!(len 36, self.shopping_setting)
            + optional!(len 38, self.final_url_suffix)
            + optional!(len 39, self.real_time_bidding_setting)
            + enum_field!(len 42, self.video_brand_safety_suitability)
            + optional!(len 44, self.vanity_pharma)
            + optional!(len 45, self.selective_optimization)
            + optional!(len 46, self.tracking_setting)
            + self.unknown_fields.encoded_len()
    }

    fn clear(&mut self) {
        *self = Campaign::default();
    }
}
