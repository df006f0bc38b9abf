use crate::codec::{coded, non_negative, required, schema, unsigned, Field, Row, Value};
use crate::enums::{Coded, ObjectType, PickupDropOffType, TimepointType};
use crate::error::RecordError;
use crate::record::Record;

/// The moment where a vehicle, running on [crate::Trip] stops at a [crate::Stop]. See <https://gtfs.org/reference/static/#stopstxt>
///
/// Times are kept as written (`HH:MM:SS`, hours can exceed 24)
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StopTime {
    /// Identifies a trip
    pub trip_id: String,
    /// Arrival time of the stop time
    pub arrival_time: Option<String>,
    /// Departure time of the stop time
    pub departure_time: Option<String>,
    /// Identifies the serviced stop
    pub stop_id: String,
    /// Order of stops for a particular trip. The values must increase along the trip but do not need to be consecutive
    pub stop_sequence: u64,
    /// Text that appears on signage identifying the trip's destination to riders
    pub stop_headsign: Option<String>,
    /// Indicates pickup method
    pub pickup_type: PickupDropOffType,
    /// Indicates drop off method
    pub drop_off_type: PickupDropOffType,
    /// Actual distance traveled along the associated shape, from the first stop to the stop specified in this record
    pub shape_dist_traveled: Option<f64>,
    /// Indicates if arrival and departure times for a stop are strictly adhered to by the vehicle or if they are instead approximate and/or interpolated times
    pub timepoint: TimepointType,
}

/// Raw values of a [StopTime]
#[derive(Debug, Derivative)]
#[derivative(Default)]
pub struct StopTimeBuilder {
    trip_id: Option<String>,
    arrival_time: Option<String>,
    departure_time: Option<String>,
    stop_id: Option<String>,
    stop_sequence: Option<i64>,
    stop_headsign: Option<String>,
    #[derivative(Default(value = "Some(0)"))]
    pickup_type: Option<i64>,
    #[derivative(Default(value = "Some(0)"))]
    drop_off_type: Option<i64>,
    shape_dist_traveled: Option<f64>,
    #[derivative(Default(value = "Some(1)"))]
    timepoint: Option<i64>,
}

impl Record for StopTime {
    type Builder = StopTimeBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::StopTime;
    const FIELDS: &'static [Field<StopTimeBuilder>] = schema!(StopTimeBuilder;
        "trip_id" => trip_id: String,
        "arrival_time" => arrival_time: String,
        "departure_time" => departure_time: String,
        "stop_id" => stop_id: String,
        "stop_sequence" => stop_sequence: i64,
        "stop_headsign" => stop_headsign: String,
        "pickup_type" => pickup_type: i64,
        "drop_off_type" => drop_off_type: i64,
        "shape_dist_traveled" => shape_dist_traveled: f64,
        "timepoint" => timepoint: i64,
    );

    fn verify(b: StopTimeBuilder) -> Result<Self, RecordError> {
        let trip_id = required("trip_id", b.trip_id)?;
        if b.arrival_time.is_none() && b.departure_time.is_none() {
            return Err(RecordError::MissingField(
                "arrival_time or departure_time".to_owned(),
            ));
        }
        let stop_id = required("stop_id", b.stop_id)?;
        let stop_sequence = required("stop_sequence", b.stop_sequence)?;
        Ok(StopTime {
            trip_id,
            arrival_time: b.arrival_time,
            departure_time: b.departure_time,
            stop_id,
            stop_sequence: unsigned("stop_sequence", stop_sequence)?,
            stop_headsign: b.stop_headsign,
            pickup_type: coded("pickup_type", b.pickup_type.unwrap_or_default())?,
            drop_off_type: coded("drop_off_type", b.drop_off_type.unwrap_or_default())?,
            shape_dist_traveled: b
                .shape_dist_traveled
                .map(|v| non_negative("shape_dist_traveled", v))
                .transpose()?,
            timepoint: coded("timepoint", b.timepoint.unwrap_or(1))?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("trip_id", Some(self.trip_id.clone().into())),
            ("arrival_time", self.arrival_time.clone().map(Value::from)),
            ("departure_time", self.departure_time.clone().map(Value::from)),
            ("stop_id", Some(self.stop_id.clone().into())),
            ("stop_sequence", Some(self.stop_sequence.into())),
            ("stop_headsign", self.stop_headsign.clone().map(Value::from)),
            ("pickup_type", Some(self.pickup_type.code().into())),
            ("drop_off_type", Some(self.drop_off_type.code().into())),
            ("shape_dist_traveled", self.shape_dist_traveled.map(Value::from)),
            ("timepoint", Some(self.timepoint.code().into())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::checks::*;

    fn base() -> Pairs {
        pairs(&[
            ("trip_id", "T1"),
            ("arrival_time", "08:00:00"),
            ("departure_time", "08:01:00"),
            ("stop_id", "S1"),
            ("stop_sequence", "1"),
        ])
    }

    #[test]
    fn defaults() {
        let st: StopTime = same_from_map_and_gtfs(&base());
        assert_eq!(PickupDropOffType::Regular, st.pickup_type);
        assert_eq!(PickupDropOffType::Regular, st.drop_off_type);
        assert_eq!(TimepointType::Exact, st.timepoint);
        assert_eq!(1, st.stop_sequence);
        check_row_columns(&st);
    }

    #[test]
    fn arrival_or_departure() {
        let neither = without(&without(&base(), "arrival_time"), "departure_time");
        assert_eq!(
            "arrival_time or departure_time",
            missing_field::<StopTime>(&neither)
        );
        let st: StopTime = build(&with(&neither, "departure_time", "25:10:00")).unwrap();
        assert_eq!(None, st.arrival_time);
        assert_eq!(Some("25:10:00".to_owned()), st.departure_time);
        let st: StopTime = build(&with(&neither, "arrival_time", "07:59:00")).unwrap();
        assert_eq!(None, st.departure_time);
        // empty times count as absent
        let p = with(&with(&neither, "arrival_time", ""), "departure_time", "");
        assert_eq!("arrival_time or departure_time", missing_field::<StopTime>(&p));
    }

    #[test]
    fn required_fields() {
        check_required::<StopTime>(&base(), &["trip_id", "stop_id", "stop_sequence"]);
        check_unrecognized::<StopTime>(&base());
    }

    #[test]
    fn values() {
        assert_eq!(
            "stop_sequence",
            invalid_value::<StopTime>(&with(&base(), "stop_sequence", "-1"))
        );
        assert_eq!(
            "shape_dist_traveled",
            invalid_value::<StopTime>(&with(&base(), "shape_dist_traveled", "-0.1"))
        );
        let st: StopTime = build(&with(&base(), "shape_dist_traveled", "12.5")).unwrap();
        assert_eq!(Some(12.5), st.shape_dist_traveled);
        check_enum::<StopTime>(&base(), "pickup_type", 4);
        check_enum::<StopTime>(&base(), "drop_off_type", 4);
        check_enum::<StopTime>(&base(), "timepoint", 2);
    }

    #[test]
    fn large_sequence() {
        let p = with(&without(&base(), "departure_time"), "stop_sequence", "4294967296");
        let st: StopTime = build(&p).unwrap();
        assert_eq!(4_294_967_296, st.stop_sequence);
        assert!(st
            .to_row()
            .contains(&("stop_sequence", Some(Value::Integer(4_294_967_296)))));
    }
}
