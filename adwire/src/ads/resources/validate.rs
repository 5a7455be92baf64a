//! Schema rules for [`Campaign`].

use chrono::NaiveDate;

use super::campaign::{CampaignBiddingStrategy, ShoppingSetting};
use super::{Campaign, FieldAccess};
use crate::ads::channel::is_valid_sub_type;
use crate::ads::common::{CustomParameter, TargetCpa, TargetRoas};
use crate::ads::enums::{
    AdServingOptimizationStatus, AdvertisingChannelSubType, AdvertisingChannelType,
    BiddingStrategyType, BrandSafetySuitability, CampaignServingStatus, CampaignStatus,
    VanityPharmaDisplayUrlMode, VanityPharmaText,
};
use crate::ads::resource_name::{Collection, ResourceName};
use crate::error::{ValidationError, ViolationKind, Violations};

const DATE_FORMAT: &str = "%Y-%m-%d";

impl Campaign {
    /// Checks the rules every campaign must satisfy, whatever its lifecycle
    /// stage. All violations are reported, not only the first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        self.check(&mut violations);
        violations.finish("Campaign")
    }

    /// Checks a campaign about to be created.
    ///
    /// On top of [`Campaign::validate`], the name and channel type are required,
    /// and fields assigned by the server must be left unset. A stored
    /// `bidding_strategy_type` is tolerated when it agrees with the inline
    /// strategy, as it does after [`Campaign::apply_bidding_strategy`].
    pub fn validate_for_create(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();

        match self.name.as_deref() {
            None => violations.push("name", ViolationKind::Required),
            Some("") => violations.push("name", ViolationKind::Empty),
            Some(_) => {}
        }
        if self.advertising_channel_type == i32::from(AdvertisingChannelType::Unspecified) {
            violations.push("advertising_channel_type", ViolationKind::Required);
        }
        if self.status == i32::from(CampaignStatus::Removed) {
            violations.push(
                "status",
                ViolationKind::OutOfRange {
                    expected: "ENABLED or PAUSED for a new campaign",
                },
            );
        }
        if !self.resource_name.is_empty() {
            violations.push("resource_name", ViolationKind::ReadOnly);
        }
        for field in Campaign::FIELDS {
            if field.access == FieldAccess::ReadOnly && self.server_field_written(field.name) {
                violations.push(field.name, ViolationKind::ReadOnly);
            }
        }

        self.check(&mut violations);
        violations.finish("Campaign")
    }

    /// Checks `proposed` as a replacement for this stored campaign.
    ///
    /// Immutable and server-computed fields must keep their stored values, and
    /// a removed campaign cannot change at all. `proposed` must also pass
    /// [`Campaign::validate`].
    pub fn validate_update(&self, proposed: &Campaign) -> Result<(), ValidationError> {
        let mut violations = Violations::default();

        if self.id.is_none() {
            violations.push("id", ViolationKind::Required);
        }
        if self.is_removed() && self != proposed {
            violations.push("status", ViolationKind::Removed);
        }
        for field in Campaign::FIELDS {
            let kind = match field.access {
                FieldAccess::Mutable => continue,
                FieldAccess::Immutable => ViolationKind::Immutable,
                FieldAccess::ReadOnly => ViolationKind::ReadOnly,
            };
            if self.field_changed(proposed, field.name) {
                violations.push(field.name, kind);
            }
        }

        proposed.check(&mut violations);
        violations.finish("Campaign")
    }

    fn check(&self, violations: &mut Violations) {
        if let Some(name) = &self.name {
            check_name(name, violations);
        }
        self.check_enums(violations);
        self.check_sub_type(violations);
        self.check_references(violations);
        self.check_bidding(violations);
        self.check_dates(violations);

        for (index, parameter) in self.url_custom_parameters.iter().enumerate() {
            check_custom_parameter(index, parameter, violations);
        }
        if let Some(setting) = &self.shopping_setting {
            check_shopping(setting, violations);
        }
        if let Some(setting) = &self.hotel_setting {
            if setting.hotel_center_id.is_none() {
                violations.push("hotel_setting.hotel_center_id", ViolationKind::Required);
            }
        }
        if let Some(setting) = &self.dynamic_search_ads_setting {
            if setting.domain_name.as_deref().map_or(true, str::is_empty) {
                violations.push(
                    "dynamic_search_ads_setting.domain_name",
                    ViolationKind::Required,
                );
            }
            if setting.language_code.as_deref().map_or(true, str::is_empty) {
                violations.push(
                    "dynamic_search_ads_setting.language_code",
                    ViolationKind::Required,
                );
            }
        }
    }

    fn check_enums(&self, violations: &mut Violations) {
        check_enum::<CampaignStatus>("status", self.status, violations);
        check_enum::<CampaignServingStatus>("serving_status", self.serving_status, violations);
        check_enum::<AdServingOptimizationStatus>(
            "ad_serving_optimization_status",
            self.ad_serving_optimization_status,
            violations,
        );
        check_enum::<AdvertisingChannelType>(
            "advertising_channel_type",
            self.advertising_channel_type,
            violations,
        );
        check_enum::<AdvertisingChannelSubType>(
            "advertising_channel_sub_type",
            self.advertising_channel_sub_type,
            violations,
        );
        check_enum::<BiddingStrategyType>(
            "bidding_strategy_type",
            self.bidding_strategy_type,
            violations,
        );
        check_enum::<BrandSafetySuitability>(
            "video_brand_safety_suitability",
            self.video_brand_safety_suitability,
            violations,
        );
        if let Some(vanity_pharma) = &self.vanity_pharma {
            check_enum::<VanityPharmaDisplayUrlMode>(
                "vanity_pharma.vanity_pharma_display_url_mode",
                vanity_pharma.vanity_pharma_display_url_mode,
                violations,
            );
            check_enum::<VanityPharmaText>(
                "vanity_pharma.vanity_pharma_text",
                vanity_pharma.vanity_pharma_text,
                violations,
            );
        }
    }

    fn check_sub_type(&self, violations: &mut Violations) {
        // Out-of-range values were reported by `check_enums`.
        let (Ok(channel), Ok(sub_type)) = (
            AdvertisingChannelType::try_from(self.advertising_channel_type),
            AdvertisingChannelSubType::try_from(self.advertising_channel_sub_type),
        ) else {
            return;
        };
        if !is_valid_sub_type(channel, sub_type) {
            violations.push(
                "advertising_channel_sub_type",
                ViolationKind::SubTypeMismatch { channel, sub_type },
            );
        }
    }

    fn check_references(&self, violations: &mut Violations) {
        if !self.resource_name.is_empty() {
            match ResourceName::parse_in(&self.resource_name, Collection::Campaigns) {
                Ok(name) => {
                    if let Some(id) = self.id {
                        if id != name.id {
                            violations.push(
                                "resource_name",
                                ViolationKind::IdMismatch {
                                    resource_name_id: name.id,
                                    id,
                                },
                            );
                        }
                    }
                }
                Err(error) => {
                    violations.push("resource_name", ViolationKind::InvalidResourceName(error))
                }
            }
        }
        if let Some(id) = self.id {
            if id <= 0 {
                violations.push(
                    "id",
                    ViolationKind::OutOfRange {
                        expected: "a positive id",
                    },
                );
            }
        }
        if let Some(budget) = &self.campaign_budget {
            if let Err(error) = ResourceName::parse_in(budget, Collection::CampaignBudgets) {
                violations.push("campaign_budget", ViolationKind::InvalidResourceName(error));
            }
        }
    }

    fn check_bidding(&self, violations: &mut Violations) {
        let Some(strategy) = &self.campaign_bidding_strategy else {
            return;
        };

        if let (Some(derived), Ok(stored)) = (
            strategy.strategy_type(),
            BiddingStrategyType::try_from(self.bidding_strategy_type),
        ) {
            if stored != BiddingStrategyType::Unspecified && stored != derived {
                violations.push(
                    "bidding_strategy_type",
                    ViolationKind::StrategyTypeMismatch { stored, derived },
                );
            }
        }

        let field = strategy.field_name();
        match strategy {
            CampaignBiddingStrategy::BiddingStrategy(name) => {
                if let Err(error) = ResourceName::parse_in(name, Collection::BiddingStrategies) {
                    violations.push(field, ViolationKind::InvalidResourceName(error));
                }
            }
            CampaignBiddingStrategy::TargetCpa(TargetCpa {
                target_cpa_micros,
                cpc_bid_ceiling_micros,
                cpc_bid_floor_micros,
            }) => {
                check_micros(field, "target_cpa_micros", *target_cpa_micros, violations);
                check_bid_limits(
                    field,
                    *cpc_bid_ceiling_micros,
                    *cpc_bid_floor_micros,
                    violations,
                );
            }
            CampaignBiddingStrategy::TargetRoas(TargetRoas {
                target_roas,
                cpc_bid_ceiling_micros,
                cpc_bid_floor_micros,
            }) => {
                check_roas(field, *target_roas, violations);
                check_bid_limits(
                    field,
                    *cpc_bid_ceiling_micros,
                    *cpc_bid_floor_micros,
                    violations,
                );
            }
            CampaignBiddingStrategy::MaximizeConversionValue(strategy) => {
                check_roas(field, strategy.target_roas, violations);
            }
            CampaignBiddingStrategy::TargetSpend(strategy) => {
                check_micros(
                    field,
                    "target_spend_micros",
                    strategy.target_spend_micros,
                    violations,
                );
                check_micros(
                    field,
                    "cpc_bid_ceiling_micros",
                    strategy.cpc_bid_ceiling_micros,
                    violations,
                );
            }
            CampaignBiddingStrategy::PercentCpc(strategy) => {
                check_micros(
                    field,
                    "cpc_bid_ceiling_micros",
                    strategy.cpc_bid_ceiling_micros,
                    violations,
                );
            }
            CampaignBiddingStrategy::ManualCpc(_)
            | CampaignBiddingStrategy::ManualCpm(_)
            | CampaignBiddingStrategy::ManualCpv(_)
            | CampaignBiddingStrategy::MaximizeConversions(_)
            | CampaignBiddingStrategy::TargetCpm(_) => {}
        }
    }

    fn check_dates(&self, violations: &mut Violations) {
        let start = self
            .start_date
            .as_deref()
            .and_then(|date| parse_date("start_date", date, violations));
        let end = self
            .end_date
            .as_deref()
            .and_then(|date| parse_date("end_date", date, violations));
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                violations.push("end_date", ViolationKind::EndBeforeStart);
            }
        }
    }

    /// Whether a server-computed field carries a client-written value.
    fn server_field_written(&self, name: &str) -> bool {
        match name {
            "id" => self.id.is_some(),
            "serving_status" => self.serving_status != 0,
            "tracking_setting" => self.tracking_setting.is_some(),
            "bidding_strategy_type" => {
                let derived = self
                    .campaign_bidding_strategy
                    .as_ref()
                    .and_then(CampaignBiddingStrategy::strategy_type)
                    .map_or(0, i32::from);
                self.bidding_strategy_type != 0 && self.bidding_strategy_type != derived
            }
            _ => false,
        }
    }

    /// Whether `proposed` carries a different value for a field fixed by the
    /// server or at creation.
    fn field_changed(&self, proposed: &Campaign, name: &str) -> bool {
        match name {
            "resource_name" => self.resource_name != proposed.resource_name,
            "id" => self.id != proposed.id,
            "advertising_channel_type" => {
                self.advertising_channel_type != proposed.advertising_channel_type
            }
            "advertising_channel_sub_type" => {
                self.advertising_channel_sub_type != proposed.advertising_channel_sub_type
            }
            "serving_status" => self.serving_status != proposed.serving_status,
            "hotel_setting" => self.hotel_setting != proposed.hotel_setting,
            "tracking_setting" => self.tracking_setting != proposed.tracking_setting,
            // Switching strategies changes the type; the server recomputes it.
            "bidding_strategy_type" => {
                self.bidding_strategy_type != proposed.bidding_strategy_type
                    && proposed.server_field_written("bidding_strategy_type")
            }
            _ => false,
        }
    }
}

fn check_enum<E: TryFrom<i32>>(field: &'static str, value: i32, violations: &mut Violations) {
    if E::try_from(value).is_err() {
        violations.push(field, ViolationKind::UnknownEnumValue(value));
    }
}

fn check_name(name: &str, violations: &mut Violations) {
    let mut seen = Vec::new();
    for c in name.chars() {
        if matches!(c, '\0' | '\n' | '\r') && !seen.contains(&c) {
            seen.push(c);
            violations.push("name", ViolationKind::DisallowedCharacter(c));
        }
    }
}

fn check_custom_parameter(index: usize, parameter: &CustomParameter, violations: &mut Violations) {
    let field = format!("url_custom_parameters[{}].key", index);
    match parameter.key.as_deref() {
        None => violations.push(field, ViolationKind::Required),
        Some("") => violations.push(field, ViolationKind::Empty),
        Some(_) => {}
    }
}

fn check_shopping(setting: &ShoppingSetting, violations: &mut Violations) {
    if let Some(merchant_id) = setting.merchant_id {
        if merchant_id <= 0 {
            violations.push(
                "shopping_setting.merchant_id",
                ViolationKind::OutOfRange {
                    expected: "a positive Merchant Center id",
                },
            );
        }
    }
    if let Some(country) = &setting.sales_country {
        if country.len() != 2 || !country.bytes().all(|b| b.is_ascii_uppercase()) {
            violations.push(
                "shopping_setting.sales_country",
                ViolationKind::Malformed {
                    expected: "a two-letter ISO 3166 country code",
                },
            );
        }
    }
    if let Some(priority) = setting.campaign_priority {
        if !(0..=2).contains(&priority) {
            violations.push(
                "shopping_setting.campaign_priority",
                ViolationKind::OutOfRange {
                    expected: "a priority between 0 and 2",
                },
            );
        }
    }
}

fn check_micros(strategy: &str, field: &str, value: Option<i64>, violations: &mut Violations) {
    if value.map_or(false, |micros| micros < 0) {
        violations.push(
            format!("{}.{}", strategy, field),
            ViolationKind::OutOfRange {
                expected: "a non-negative amount",
            },
        );
    }
}

fn check_bid_limits(
    strategy: &str,
    ceiling: Option<i64>,
    floor: Option<i64>,
    violations: &mut Violations,
) {
    check_micros(strategy, "cpc_bid_ceiling_micros", ceiling, violations);
    check_micros(strategy, "cpc_bid_floor_micros", floor, violations);
    if let (Some(ceiling), Some(floor)) = (ceiling, floor) {
        if ceiling < floor {
            violations.push(
                format!("{}.cpc_bid_ceiling_micros", strategy),
                ViolationKind::OutOfRange {
                    expected: "a ceiling no lower than the floor",
                },
            );
        }
    }
}

fn check_roas(strategy: &str, target_roas: Option<f64>, violations: &mut Violations) {
    if let Some(roas) = target_roas {
        if !roas.is_finite() || roas <= 0.0 {
            violations.push(
                format!("{}.target_roas", strategy),
                ViolationKind::OutOfRange {
                    expected: "a positive finite ratio",
                },
            );
        }
    }
}

fn is_date_shaped(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, b)| match index {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn parse_date(field: &'static str, date: &str, violations: &mut Violations) -> Option<NaiveDate> {
    // chrono tolerates padding, signs and short fields; the API does not.
    let parsed = if is_date_shaped(date) {
        NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
    } else {
        None
    };
    if parsed.is_none() {
        violations.push(
            field,
            ViolationKind::Malformed {
                expected: "a date in YYYY-MM-DD format",
            },
        );
    }
    parsed
}
