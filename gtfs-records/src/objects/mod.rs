//! The GTFS objects, one module per file of the feed
mod agency;
mod calendar;
mod fare;
mod feed_info;
mod frequency;
mod level;
mod pathway;
mod route;
mod shape;
mod stop;
mod stop_time;
mod transfer;
mod translation;
mod trip;

pub use agency::{Agency, AgencyBuilder};
pub use calendar::{Service, ServiceBuilder, ServiceException, ServiceExceptionBuilder};
pub use fare::{FareAttribute, FareAttributeBuilder, FareRule, FareRuleBuilder};
pub use feed_info::{FeedInfo, FeedInfoBuilder};
pub use frequency::{Frequency, FrequencyBuilder};
pub use level::{Level, LevelBuilder};
pub use pathway::{Pathway, PathwayBuilder};
pub use route::{Route, RouteBuilder};
pub use shape::{Shape, ShapeBuilder};
pub use stop::{Stop, StopBuilder};
pub use stop_time::{StopTime, StopTimeBuilder};
pub use transfer::{Transfer, TransferBuilder};
pub use translation::{Translation, TranslationBuilder};
pub use trip::{Trip, TripBuilder};
