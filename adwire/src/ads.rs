//! Google Ads API v1 schemas (`google.ads.googleads.v1`).

pub mod common;
pub mod enums;
pub mod resource_name;
pub mod resources;

mod channel;

pub use self::channel::{is_valid_sub_type, parent_channel, valid_sub_types};
