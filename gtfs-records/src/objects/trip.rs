use crate::codec::{coded, required, schema, Field, Row, Value};
use crate::enums::{Availability, BikesAllowedType, Coded, DirectionType, ExceptionalType, ObjectType};
use crate::error::RecordError;
use crate::record::{Id, Record};
use std::fmt;

/// A Trip is a vehicle that follows a sequence of [crate::StopTime] on certain days. See <https://gtfs.org/reference/static/#tripstxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Trip {
    /// Identifies a route
    pub route_id: String,
    /// Identifies a set of dates when service is available for one or more routes
    pub service_id: String,
    /// Unique technical identifier (not for the traveller) for the Trip
    #[serde(rename = "trip_id")]
    pub id: String,
    /// Text that appears on signage identifying the trip's destination to riders
    pub trip_headsign: Option<String>,
    /// Public facing text used to identify the trip to riders, for instance, to identify train numbers for commuter rail trips
    pub trip_short_name: Option<String>,
    /// Indicates the direction of travel for a trip. This field is not used in routing
    pub direction_id: DirectionType,
    /// Identifies the block to which the trip belongs
    pub block_id: Option<String>,
    /// Identifies a geospatial shape that describes the vehicle travel path for a trip
    pub shape_id: Option<String>,
    /// Indicates wheelchair accessibility
    pub wheelchair_accessible: Availability,
    /// Indicates whether bikes are allowed
    pub bikes_allowed: BikesAllowedType,
    /// Indicates if the trip only runs on an exceptional schedule
    pub exceptional: Option<ExceptionalType>,
}

/// Raw values of a [Trip]
#[derive(Debug, Derivative)]
#[derivative(Default)]
pub struct TripBuilder {
    route_id: Option<String>,
    service_id: Option<String>,
    id: Option<String>,
    trip_headsign: Option<String>,
    trip_short_name: Option<String>,
    #[derivative(Default(value = "Some(0)"))]
    direction_id: Option<i64>,
    block_id: Option<String>,
    shape_id: Option<String>,
    #[derivative(Default(value = "Some(0)"))]
    wheelchair_accessible: Option<i64>,
    #[derivative(Default(value = "Some(0)"))]
    bikes_allowed: Option<i64>,
    exceptional: Option<i64>,
}

impl Record for Trip {
    type Builder = TripBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::Trip;
    const FIELDS: &'static [Field<TripBuilder>] = schema!(TripBuilder;
        "route_id" => route_id: String,
        "service_id" => service_id: String,
        "trip_id" => id: String,
        "trip_headsign" => trip_headsign: String,
        "trip_short_name" => trip_short_name: String,
        "direction_id" => direction_id: i64,
        "block_id" => block_id: String,
        "shape_id" => shape_id: String,
        "wheelchair_accessible" => wheelchair_accessible: i64,
        "bikes_allowed" => bikes_allowed: i64,
        "exceptional" => exceptional: i64,
    );

    fn verify(b: TripBuilder) -> Result<Self, RecordError> {
        let route_id = required("route_id", b.route_id)?;
        let service_id = required("service_id", b.service_id)?;
        let id = required("trip_id", b.id)?;
        Ok(Trip {
            route_id,
            service_id,
            id,
            trip_headsign: b.trip_headsign,
            trip_short_name: b.trip_short_name,
            direction_id: coded("direction_id", b.direction_id.unwrap_or_default())?,
            block_id: b.block_id,
            shape_id: b.shape_id,
            wheelchair_accessible: coded(
                "wheelchair_accessible",
                b.wheelchair_accessible.unwrap_or_default(),
            )?,
            bikes_allowed: coded("bikes_allowed", b.bikes_allowed.unwrap_or_default())?,
            exceptional: b
                .exceptional
                .map(|v| coded("exceptional", v))
                .transpose()?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("route_id", Some(self.route_id.clone().into())),
            ("service_id", Some(self.service_id.clone().into())),
            ("trip_id", Some(self.id.clone().into())),
            ("trip_headsign", self.trip_headsign.clone().map(Value::from)),
            ("trip_short_name", self.trip_short_name.clone().map(Value::from)),
            ("direction_id", Some(self.direction_id.code().into())),
            ("block_id", self.block_id.clone().map(Value::from)),
            ("shape_id", self.shape_id.clone().map(Value::from)),
            (
                "wheelchair_accessible",
                Some(self.wheelchair_accessible.code().into()),
            ),
            ("bikes_allowed", Some(self.bikes_allowed.code().into())),
            ("exceptional", self.exceptional.map(|v| v.code().into())),
        ]
    }
}

impl Id for Trip {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "route id: {}, service id: {}",
            self.route_id, self.service_id
        )
    }
}
