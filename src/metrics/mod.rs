//! Tolerant parsers for the free-text metrics athletes type into a meet
//! record: heights cleared, takeoff depths, and the pole used.
//!
//! Every function here is total. Empty or unrecognizable input yields `None`
//! (or an empty [`ParsedPole`]) instead of an error, so the results can feed
//! straight into chart data without a failure path.

mod height;
mod normalize;
mod pole;
mod takeoff;
mod units;

pub use height::parse_height_to_meters;
pub use pole::{parse_pole_used, ParsedPole, PoleMetric};
pub use takeoff::parse_takeoff_to_feet;
pub use units::{
    feet_decimal_to_feet_inches, meters_to_feet_inches, FeetInches, INCHES_PER_FOOT,
    METERS_PER_INCH,
};

pub(crate) use normalize::round_half_up;
