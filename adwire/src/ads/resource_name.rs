//! Google Ads resource names.
//!
//! Resource names are the durable identity of a resource and take the form
//! `customers/{customer_id}/{collection}/{id}`, e.g.
//! `customers/1234567890/campaigns/42`. Both ids are positive 64-bit integers
//! written in decimal without sign or leading `+`.

use std::fmt;
use std::str::FromStr;

/// The resource collections referenced from a campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// `customers/{customer_id}/campaigns/{campaign_id}`
    Campaigns,
    /// `customers/{customer_id}/campaignBudgets/{budget_id}`
    CampaignBudgets,
    /// `customers/{customer_id}/biddingStrategies/{bidding_strategy_id}`
    BiddingStrategies,
}

impl Collection {
    /// The path segment naming the collection.
    pub fn segment(self) -> &'static str {
        match self {
            Collection::Campaigns => "campaigns",
            Collection::CampaignBudgets => "campaignBudgets",
            Collection::BiddingStrategies => "biddingStrategies",
        }
    }

    fn from_segment(segment: &str) -> Option<Collection> {
        match segment {
            "campaigns" => Some(Collection::Campaigns),
            "campaignBudgets" => Some(Collection::CampaignBudgets),
            "biddingStrategies" => Some(Collection::BiddingStrategies),
            _ => None,
        }
    }
}

/// A parsed resource name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceName {
    pub customer_id: i64,
    pub collection: Collection,
    pub id: i64,
}

/// Why a string is not a well-formed resource name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceNameError {
    /// The string does not have the `customers/{id}/{collection}/{id}` shape.
    Malformed,
    /// The collection segment is not one this crate knows about.
    UnknownCollection(String),
    /// The collection is known but not the one expected at this position.
    WrongCollection {
        expected: Collection,
        actual: Collection,
    },
    /// An id segment is not a positive decimal 64-bit integer.
    InvalidId(String),
}

impl fmt::Display for ResourceNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceNameError::Malformed => {
                f.write_str("expected `customers/{customer_id}/{collection}/{id}`")
            }
            ResourceNameError::UnknownCollection(segment) => {
                write!(f, "unknown resource collection `{}`", segment)
            }
            ResourceNameError::WrongCollection { expected, actual } => write!(
                f,
                "expected a `{}` resource, found `{}`",
                expected.segment(),
                actual.segment()
            ),
            ResourceNameError::InvalidId(segment) => {
                write!(f, "invalid resource id `{}`", segment)
            }
        }
    }
}

impl std::error::Error for ResourceNameError {}

impl ResourceName {
    pub fn new(customer_id: i64, collection: Collection, id: i64) -> ResourceName {
        ResourceName {
            customer_id,
            collection,
            id,
        }
    }

    /// Shorthand for `customers/{customer_id}/campaigns/{campaign_id}`.
    pub fn campaign(customer_id: i64, campaign_id: i64) -> ResourceName {
        ResourceName::new(customer_id, Collection::Campaigns, campaign_id)
    }

    /// Parses a resource name of any known collection.
    pub fn parse(s: &str) -> Result<ResourceName, ResourceNameError> {
        let mut segments = s.split('/');
        let (Some("customers"), Some(customer_id), Some(collection), Some(id), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(ResourceNameError::Malformed);
        };

        let collection = Collection::from_segment(collection)
            .ok_or_else(|| ResourceNameError::UnknownCollection(collection.to_owned()))?;

        Ok(ResourceName {
            customer_id: parse_id(customer_id)?,
            collection,
            id: parse_id(id)?,
        })
    }

    /// Parses a resource name and checks that it belongs to `expected`.
    pub fn parse_in(s: &str, expected: Collection) -> Result<ResourceName, ResourceNameError> {
        let name = ResourceName::parse(s)?;
        if name.collection != expected {
            return Err(ResourceNameError::WrongCollection {
                expected,
                actual: name.collection,
            });
        }
        Ok(name)
    }
}

fn parse_id(segment: &str) -> Result<i64, ResourceNameError> {
    let invalid = || ResourceNameError::InvalidId(segment.to_owned());
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match segment.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid()),
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "customers/{}/{}/{}",
            self.customer_id,
            self.collection.segment(),
            self.id
        )
    }
}

impl FromStr for ResourceName {
    type Err = ResourceNameError;

    fn from_str(s: &str) -> Result<ResourceName, ResourceNameError> {
        ResourceName::parse(s)
    }
}
