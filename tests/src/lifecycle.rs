//! A campaign through its lifecycle: drafted by a client, created by the
//! service, updated, then removed.

use adwire::ads::common::{ManualCpc, TargetSpend};
use adwire::ads::enums::{
    AdvertisingChannelSubType, AdvertisingChannelType, BiddingStrategyType, CampaignServingStatus,
    CampaignStatus,
};
use adwire::ads::resource_name::ResourceName;
use adwire::ads::resources::campaign::TrackingSetting;
use adwire::ads::resources::FieldAccess;
use adwire::{Campaign, ViolationKind};

/// What the service does on create: assign the identity and server fields.
fn create(draft: &Campaign, customer_id: i64, id: i64) -> Campaign {
    draft.validate_for_create().unwrap();
    Campaign {
        resource_name: ResourceName::campaign(customer_id, id).to_string(),
        id: Some(id),
        serving_status: CampaignServingStatus::Serving.into(),
        tracking_setting: Some(TrackingSetting {
            tracking_url: Some("https://tracking.example.com".to_owned()),
        }),
        ..draft.clone()
    }
}

fn draft() -> Campaign {
    let mut campaign = Campaign::draft("Summer Sale", AdvertisingChannelType::Display);
    campaign.set_advertising_channel_sub_type(AdvertisingChannelSubType::DisplayGmailAd);
    campaign.campaign_budget = Some("customers/1234567890/campaignBudgets/11".to_owned());
    campaign.apply_bidding_strategy(ManualCpc {
        enhanced_cpc_enabled: Some(true),
    });
    campaign
}

#[test]
fn create_update_remove() {
    crate::init_logger();

    let stored = create(&draft(), 1234567890, 8675309);
    assert_eq!(stored.resource_name, "customers/1234567890/campaigns/8675309");
    assert_eq!(stored.validate(), Ok(()));

    // Stored campaigns cannot be created again.
    let error = stored.validate_for_create().unwrap_err();
    assert!(error.has("resource_name"));
    assert!(error.has("id"));

    let mut paused = stored.clone();
    paused.set_status(CampaignStatus::Paused);
    paused.name = Some("Summer Sale (paused)".to_owned());
    paused.apply_bidding_strategy(TargetSpend {
        target_spend_micros: Some(50_000_000),
        cpc_bid_ceiling_micros: None,
    });
    assert_eq!(stored.validate_update(&paused), Ok(()));
    assert_eq!(
        paused.bidding_strategy_type(),
        BiddingStrategyType::TargetSpend
    );

    let mut removed = paused.clone();
    removed.remove();
    assert_eq!(paused.validate_update(&removed), Ok(()));

    let mut revived = removed.clone();
    revived.set_status(CampaignStatus::Enabled);
    let error = removed.validate_update(&revived).unwrap_err();
    assert_eq!(error.violations()[0].kind, ViolationKind::Removed);
}

#[test]
fn immutable_fields_are_fixed_after_creation() {
    let stored = create(&draft(), 1, 2);

    for field in Campaign::FIELDS {
        if field.access == FieldAccess::Mutable {
            continue;
        }
        let mut proposed = stored.clone();
        match field.name {
            "resource_name" => proposed.resource_name = "customers/1/campaigns/3".to_owned(),
            "id" => proposed.id = Some(3),
            "advertising_channel_type" => {
                proposed.set_advertising_channel_type(AdvertisingChannelType::Search)
            }
            "advertising_channel_sub_type" => proposed
                .set_advertising_channel_sub_type(AdvertisingChannelSubType::DisplayExpress),
            "serving_status" => {
                proposed.serving_status = CampaignServingStatus::Suspended.into()
            }
            "bidding_strategy_type" => {
                proposed.bidding_strategy_type = BiddingStrategyType::TargetCpa.into()
            }
            "hotel_setting" => proposed.hotel_setting = Some(Default::default()),
            "tracking_setting" => proposed.tracking_setting = None,
            other => panic!("no mutation for {}", other),
        }

        let error = stored.validate_update(&proposed).unwrap_err();
        let expected = match field.access {
            FieldAccess::Immutable => ViolationKind::Immutable,
            _ => ViolationKind::ReadOnly,
        };
        assert!(
            error
                .violations()
                .iter()
                .any(|v| v.field == field.name && v.kind == expected),
            "{}: {}",
            field.name,
            error
        );
    }
}

#[test]
fn every_violation_is_reported() {
    let mut campaign = Campaign::draft("bad\0name", AdvertisingChannelType::Search);
    campaign.set_advertising_channel_sub_type(AdvertisingChannelSubType::ShoppingSmartAds);
    campaign.start_date = Some("June 1st".to_owned());
    campaign.campaign_budget = Some("customers/1/campaignBudgets/x".to_owned());
    campaign.id = Some(5);

    let error = campaign.validate_for_create().unwrap_err();
    let fields: Vec<_> = error.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(
        fields,
        [
            "id",
            "name",
            "advertising_channel_sub_type",
            "campaign_budget",
            "start_date",
        ]
    );
    assert!(error.to_string().starts_with("5 validation error(s)"));
}
