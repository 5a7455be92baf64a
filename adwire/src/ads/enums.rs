//! Enumerations referenced by the campaign resource.
//!
//! Google Ads wraps each enum in an otherwise empty `*Enum` message (for example
//! `CampaignStatusEnum.CampaignStatus`). The wrappers carry no fields, so only the
//! inner enums are modelled here. Message fields store enums as raw `i32` values
//! so that values added by newer API versions survive a decode/encode cycle.

enumeration! {
    /// Possible statuses of a campaign.
    pub enum CampaignStatus {
        /// Not specified.
        Unspecified = 0 => "UNSPECIFIED",
        /// Used for return value only. Represents value unknown in this version.
        Unknown = 1 => "UNKNOWN",
        /// Campaign is currently serving ads depending on budget information.
        Enabled = 2 => "ENABLED",
        /// Campaign has been paused by the user.
        Paused = 3 => "PAUSED",
        /// Campaign has been removed.
        Removed = 4 => "REMOVED",
    }
}

enumeration! {
    /// Possible serving statuses of a campaign.
    pub enum CampaignServingStatus {
        Unspecified = 0 => "UNSPECIFIED",
        Unknown = 1 => "UNKNOWN",
        /// Serving.
        Serving = 2 => "SERVING",
        /// None.
        None = 3 => "NONE",
        /// Ended.
        Ended = 4 => "ENDED",
        /// Pending.
        Pending = 5 => "PENDING",
        /// Suspended.
        Suspended = 6 => "SUSPENDED",
    }
}

enumeration! {
    /// Possible ad serving statuses of a campaign.
    pub enum AdServingOptimizationStatus {
        Unspecified = 0 => "UNSPECIFIED",
        Unknown = 1 => "UNKNOWN",
        /// Ad serving is optimized based on CTR for the campaign.
        Optimize = 2 => "OPTIMIZE",
        /// Ad serving is optimized based on CTR * Conversion for the campaign.
        ConversionOptimize = 3 => "CONVERSION_OPTIMIZE",
        /// Ads are rotated evenly for 90 days, then optimized for clicks.
        Rotate = 4 => "ROTATE",
        /// Show lower performing ads more evenly with higher performing ads, and do
        /// not optimize.
        RotateIndefinitely = 5 => "ROTATE_INDEFINITELY",
        /// Ad serving optimization status is not available.
        Unavailable = 6 => "UNAVAILABLE",
    }
}

enumeration! {
    /// The channel type a campaign may target to serve on.
    pub enum AdvertisingChannelType {
        Unspecified = 0 => "UNSPECIFIED",
        Unknown = 1 => "UNKNOWN",
        /// Google Search.
        Search = 2 => "SEARCH",
        /// Google Display Network only.
        Display = 3 => "DISPLAY",
        /// Shopping campaigns serve on the shopping property and on google.com search
        /// results.
        Shopping = 4 => "SHOPPING",
        /// Hotel Ads campaigns.
        Hotel = 5 => "HOTEL",
        /// Video campaigns.
        Video = 6 => "VIDEO",
        /// Universal App Campaigns, including app install and app engagement
        /// campaigns, that run across multiple channels.
        MultiChannel = 7 => "MULTI_CHANNEL",
    }
}

enumeration! {
    /// A more specific type of advertising channel.
    ///
    /// A sub-type is only meaningful together with its parent channel type; see
    /// [`valid_sub_types`](crate::ads::valid_sub_types).
    pub enum AdvertisingChannelSubType {
        Unspecified = 0 => "UNSPECIFIED",
        Unknown = 1 => "UNKNOWN",
        /// Mobile app campaigns for Search.
        SearchMobileApp = 2 => "SEARCH_MOBILE_APP",
        /// Mobile app campaigns for Display.
        DisplayMobileApp = 3 => "DISPLAY_MOBILE_APP",
        /// AdWords express campaigns for search.
        SearchExpress = 4 => "SEARCH_EXPRESS",
        /// AdWords Express campaigns for display.
        DisplayExpress = 5 => "DISPLAY_EXPRESS",
        /// Smart Shopping campaigns.
        ShoppingSmartAds = 6 => "SHOPPING_SMART_ADS",
        /// Gmail Ad campaigns.
        DisplayGmailAd = 7 => "DISPLAY_GMAIL_AD",
        /// Smart display campaigns.
        DisplaySmartCampaign = 8 => "DISPLAY_SMART_CAMPAIGN",
        /// Video Outstream campaigns.
        VideoOutstream = 9 => "VIDEO_OUTSTREAM",
        /// Video TrueView for Action campaigns.
        VideoAction = 10 => "VIDEO_ACTION",
        /// Video campaigns with non-skippable video ads.
        VideoNonSkippable = 11 => "VIDEO_NON_SKIPPABLE",
        /// Universal App Campaign.
        AppCampaign = 12 => "APP_CAMPAIGN",
        /// Universal App Campaign for engagement.
        AppCampaignForEngagement = 13 => "APP_CAMPAIGN_FOR_ENGAGEMENT",
    }
}

enumeration! {
    /// Enum describing possible bidding strategy types.
    pub enum BiddingStrategyType {
        Unspecified = 0 => "UNSPECIFIED",
        Unknown = 1 => "UNKNOWN",
        /// Enhanced CPC is a bidding strategy that raises bids for clicks that seem
        /// more likely to lead to a conversion and lowers them for clicks where they
        /// seem less likely.
        EnhancedCpc = 2 => "ENHANCED_CPC",
        /// Manual click based bidding where user pays per click.
        ManualCpc = 3 => "MANUAL_CPC",
        /// Manual impression based bidding where user pays per thousand impressions.
        ManualCpm = 4 => "MANUAL_CPM",
        /// A bidding strategy that pays a configurable amount per video view.
        ManualCpv = 13 => "MANUAL_CPV",
        /// A bidding strategy that automatically maximizes number of conversions
        /// given a daily budget.
        MaximizeConversions = 10 => "MAXIMIZE_CONVERSIONS",
        /// An automated bidding strategy that automatically sets bids to maximize
        /// revenue while spending your budget.
        MaximizeConversionValue = 11 => "MAXIMIZE_CONVERSION_VALUE",
        /// Page-One Promoted bidding scheme.
        PageOnePromoted = 5 => "PAGE_ONE_PROMOTED",
        /// Percent Cpc is bidding strategy where bids are a fraction of the
        /// advertised price for some good or service.
        PercentCpc = 12 => "PERCENT_CPC",
        /// Target CPA is an automated bid strategy that sets bids to help get as many
        /// conversions as possible at the target cost-per-acquisition (CPA) you set.
        TargetCpa = 6 => "TARGET_CPA",
        /// Target CPM is an automated bid strategy that sets bids to help get as many
        /// impressions as possible at the target cost per one thousand impressions
        /// (CPM) you set.
        TargetCpm = 14 => "TARGET_CPM",
        /// Target Outrank Share is an automated bidding strategy that sets bids based
        /// on the target fraction of auctions where the advertiser should outrank a
        /// specific competitor.
        TargetOutrankShare = 7 => "TARGET_OUTRANK_SHARE",
        /// Target ROAS is an automated bidding strategy that helps you maximize
        /// revenue while averaging a specific target Return On Average Spend (ROAS).
        TargetRoas = 8 => "TARGET_ROAS",
        /// Target Spend is an automated bid strategy that sets your bids to help get
        /// as many clicks as possible within your budget.
        TargetSpend = 9 => "TARGET_SPEND",
    }
}

enumeration! {
    /// 3-Tier brand safety suitability control.
    pub enum BrandSafetySuitability {
        Unspecified = 0 => "UNSPECIFIED",
        Unknown = 1 => "UNKNOWN",
        /// This option lets you show ads across all inventory on YouTube and video
        /// partners that meet our standards for monetization.
        ExpandedInventory = 2 => "EXPANDED_INVENTORY",
        /// This option lets you show ads across a wide range of content that's
        /// appropriate for most brands.
        StandardInventory = 3 => "STANDARD_INVENTORY",
        /// This option lets you show ads on a reduced range of content that's
        /// appropriate for brands with particularly strict guidelines around
        /// inappropriate language and sexual suggestiveness.
        LimitedInventory = 4 => "LIMITED_INVENTORY",
    }
}

enumeration! {
    /// Possible display modes for vanity pharma URLs.
    pub enum VanityPharmaDisplayUrlMode {
        Unspecified = 0 => "UNSPECIFIED",
        Unknown = 1 => "UNKNOWN",
        /// Replace vanity pharma URL with manufacturer website url.
        ManufacturerWebsiteUrl = 2 => "MANUFACTURER_WEBSITE_URL",
        /// Replace vanity pharma URL with description of the website.
        WebsiteDescription = 3 => "WEBSITE_DESCRIPTION",
    }
}

enumeration! {
    /// Possible texts that can be displayed in place of vanity pharma URLs.
    pub enum VanityPharmaText {
        Unspecified = 0 => "UNSPECIFIED",
        Unknown = 1 => "UNKNOWN",
        /// Prescription treatment website with website content in English.
        PrescriptionTreatmentWebsiteEn = 2 => "PRESCRIPTION_TREATMENT_WEBSITE_EN",
        /// Prescription treatment website with website content in Spanish.
        PrescriptionTreatmentWebsiteEs = 3 => "PRESCRIPTION_TREATMENT_WEBSITE_ES",
        /// Prescription device website with website content in English.
        PrescriptionDeviceWebsiteEn = 4 => "PRESCRIPTION_DEVICE_WEBSITE_EN",
        /// Prescription device website with website content in Spanish.
        PrescriptionDeviceWebsiteEs = 5 => "PRESCRIPTION_DEVICE_WEBSITE_ES",
        /// Medical device website with website content in English.
        MedicalDeviceWebsiteEn = 6 => "MEDICAL_DEVICE_WEBSITE_EN",
        /// Medical device website with website content in Spanish.
        MedicalDeviceWebsiteEs = 7 => "MEDICAL_DEVICE_WEBSITE_ES",
        /// Preventative treatment website with website content in English.
        PreventativeTreatmentWebsiteEn = 8 => "PREVENTATIVE_TREATMENT_WEBSITE_EN",
        /// Preventative treatment website with website content in Spanish.
        PreventativeTreatmentWebsiteEs = 9 => "PREVENTATIVE_TREATMENT_WEBSITE_ES",
        /// Prescription contraception website with website content in English.
        PrescriptionContraceptionWebsiteEn = 10 => "PRESCRIPTION_CONTRACEPTION_WEBSITE_EN",
        /// Prescription contraception website with website content in Spanish.
        PrescriptionContraceptionWebsiteEs = 11 => "PRESCRIPTION_CONTRACEPTION_WEBSITE_ES",
        /// Prescription vaccine website with website content in English.
        PrescriptionVaccineWebsiteEn = 12 => "PRESCRIPTION_VACCINE_WEBSITE_EN",
        /// Prescription vaccine website with website content in Spanish.
        PrescriptionVaccineWebsiteEs = 13 => "PRESCRIPTION_VACCINE_WEBSITE_ES",
    }
}
