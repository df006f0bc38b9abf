use crate::codec::{
    coded, invalid, latitude, longitude, required, route_type, schema, timezone, Field, Row, Value,
};
use crate::enums::{Availability, Coded, LocationType, ObjectType, RouteType};
use crate::error::RecordError;
use crate::record::{Id, Record};
use std::fmt;

/// A physical stop, station or area. See <https://gtfs.org/reference/static/#stopstxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Stop {
    /// Unique technical identifier (not for the traveller) of the stop
    #[serde(rename = "stop_id")]
    pub id: String,
    /// Short text or a number that identifies the location for riders
    #[serde(rename = "stop_code")]
    pub code: Option<String>,
    ///Name of the location. Use a name that people will understand in the local and tourist vernacular
    #[serde(rename = "stop_name")]
    pub name: Option<String>,
    /// Description of the location that provides useful, quality information
    #[serde(rename = "stop_desc")]
    pub description: Option<String>,
    /// Latitude of the stop
    #[serde(rename = "stop_lat")]
    pub latitude: Option<f64>,
    /// Longitude of the stop
    #[serde(rename = "stop_lon")]
    pub longitude: Option<f64>,
    /// Identifies the fare zone for a stop
    pub zone_id: Option<String>,
    /// URL of a web page about the location
    #[serde(rename = "stop_url")]
    pub url: Option<String>,
    /// Type of the location
    pub location_type: LocationType,
    /// Defines hierarchy between the different locations
    pub parent_station: Option<String>,
    /// Timezone of the location
    #[serde(rename = "stop_timezone")]
    pub timezone: Option<String>,
    /// Indicates whether wheelchair boardings are possible from the location
    pub wheelchair_boarding: Availability,
    /// Level of the location. The same level can be used by multiple unlinked stations
    pub level_id: Option<String>,
    /// Platform identifier for a platform stop (a stop belonging to a station)
    pub platform_code: Option<String>,
    /// Type of vehicle serving the stop
    pub vehicle_type: Option<RouteType>,
}

/// Raw values of a [Stop]
#[derive(Debug, Derivative)]
#[derivative(Default)]
pub struct StopBuilder {
    id: Option<String>,
    code: Option<String>,
    name: Option<String>,
    description: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    zone_id: Option<String>,
    url: Option<String>,
    #[derivative(Default(value = "Some(0)"))]
    location_type: Option<i64>,
    parent_station: Option<String>,
    timezone: Option<String>,
    #[derivative(Default(value = "Some(0)"))]
    wheelchair_boarding: Option<i64>,
    level_id: Option<String>,
    platform_code: Option<String>,
    vehicle_type: Option<i64>,
}

impl Record for Stop {
    type Builder = StopBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::Stop;
    const FIELDS: &'static [Field<StopBuilder>] = schema!(StopBuilder;
        "stop_id" => id: String,
        "stop_code" => code: String,
        "stop_name" => name: String,
        "stop_desc" => description: String,
        "stop_lat" => latitude: f64,
        "stop_lon" => longitude: f64,
        "zone_id" => zone_id: String,
        "stop_url" => url: String,
        "location_type" => location_type: i64,
        "parent_station" => parent_station: String,
        "stop_timezone" => timezone: String,
        "wheelchair_boarding" => wheelchair_boarding: i64,
        "level_id" => level_id: String,
        "platform_code" => platform_code: String,
        "vehicle_type" => vehicle_type: i64,
    );

    fn verify(b: StopBuilder) -> Result<Self, RecordError> {
        let id = required("stop_id", b.id)?;
        let location_type = b.location_type.unwrap_or_default();
        // stops, stations and entrances are located for the travellers
        if location_type <= 2 {
            required("stop_name", b.name.as_ref())?;
            required("stop_lat", b.latitude)?;
            required("stop_lon", b.longitude)?;
        }
        // entrances, generic nodes and boarding areas belong to a station
        if location_type >= 2 && b.parent_station.is_none() {
            return Err(RecordError::MissingField("parent_station".to_owned()));
        }
        if location_type == 1 && b.parent_station.is_some() {
            return Err(invalid("parent_station"));
        }

        Ok(Stop {
            id,
            code: b.code,
            name: b.name,
            description: b.description,
            longitude: b.longitude.map(|v| longitude("stop_lon", v)).transpose()?,
            latitude: b.latitude.map(|v| latitude("stop_lat", v)).transpose()?,
            zone_id: b.zone_id,
            url: b.url,
            location_type: coded("location_type", location_type)?,
            parent_station: b.parent_station,
            wheelchair_boarding: coded(
                "wheelchair_boarding",
                b.wheelchair_boarding.unwrap_or_default(),
            )?,
            level_id: b.level_id,
            platform_code: b.platform_code,
            vehicle_type: b
                .vehicle_type
                .map(|v| route_type("vehicle_type", v))
                .transpose()?,
            timezone: b.timezone.map(|v| timezone("stop_timezone", v)).transpose()?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("stop_id", Some(self.id.clone().into())),
            ("stop_code", self.code.clone().map(Value::from)),
            ("stop_name", self.name.clone().map(Value::from)),
            ("stop_desc", self.description.clone().map(Value::from)),
            ("stop_lat", self.latitude.map(Value::from)),
            ("stop_lon", self.longitude.map(Value::from)),
            ("zone_id", self.zone_id.clone().map(Value::from)),
            ("stop_url", self.url.clone().map(Value::from)),
            ("location_type", Some(self.location_type.code().into())),
            ("parent_station", self.parent_station.clone().map(Value::from)),
            ("stop_timezone", self.timezone.clone().map(Value::from)),
            (
                "wheelchair_boarding",
                Some(self.wheelchair_boarding.code().into()),
            ),
            ("level_id", self.level_id.clone().map(Value::from)),
            ("platform_code", self.platform_code.clone().map(Value::from)),
            ("vehicle_type", self.vehicle_type.map(|v| v.code().into())),
        ]
    }
}

impl Id for Stop {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or(&self.id))
    }
}
