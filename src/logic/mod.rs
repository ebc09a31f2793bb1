pub mod calendar;
pub mod duration;
pub mod estimator;
pub mod proximity;
pub mod window;
pub mod zone;

pub use duration::{parse_growing_days, DigitRunParser, DurationParser};
pub use estimator::HarvestEstimator;
pub use proximity::{classify, days_until_harvest, harvest_status, ProximityPolicy};
pub use zone::{offset_days, ZoneTuning};
