use crate::codec::{coded, required, schema, unsigned, Field, Row};
use crate::enums::{Coded, ExactTimes, ObjectType};
use crate::error::RecordError;
use crate::record::Record;

/// Timetables can be defined by the frequency of their vehicles. See <https://gtfs.org/reference/static/#frequenciestxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Frequency {
    /// References the [crate::Trip] that uses frequency
    pub trip_id: String,
    /// Time at which the first vehicle departs from the first stop of the trip
    pub start_time: String,
    /// Time at which service changes to a different headway (or ceases) at the first stop in the trip
    pub end_time: String,
    /// Time, in seconds, between departures from the same stop (headway) for the trip, during the time interval specified by start_time and end_time
    pub headway_secs: u64,
    /// Indicates the type of service for a trip
    pub exact_times: ExactTimes,
}

/// Raw values of a [Frequency]
#[derive(Debug, Derivative)]
#[derivative(Default)]
pub struct FrequencyBuilder {
    trip_id: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    headway_secs: Option<i64>,
    #[derivative(Default(value = "Some(0)"))]
    exact_times: Option<i64>,
}

impl Record for Frequency {
    type Builder = FrequencyBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::Frequency;
    const FIELDS: &'static [Field<FrequencyBuilder>] = schema!(FrequencyBuilder;
        "trip_id" => trip_id: String,
        "start_time" => start_time: String,
        "end_time" => end_time: String,
        "headway_secs" => headway_secs: i64,
        "exact_times" => exact_times: i64,
    );

    fn verify(b: FrequencyBuilder) -> Result<Self, RecordError> {
        let trip_id = required("trip_id", b.trip_id)?;
        let start_time = required("start_time", b.start_time)?;
        let end_time = required("end_time", b.end_time)?;
        let headway_secs = required("headway_secs", b.headway_secs)?;
        Ok(Frequency {
            trip_id,
            start_time,
            end_time,
            headway_secs: unsigned("headway_secs", headway_secs)?,
            exact_times: coded("exact_times", b.exact_times.unwrap_or_default())?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("trip_id", Some(self.trip_id.clone().into())),
            ("start_time", Some(self.start_time.clone().into())),
            ("end_time", Some(self.end_time.clone().into())),
            ("headway_secs", Some(self.headway_secs.into())),
            ("exact_times", Some(self.exact_times.code().into())),
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
            ("start_time", "06:00:00"),
            ("end_time", "09:00:00"),
            ("headway_secs", "600"),
        ])
    }

    #[test]
    fn frequency() {
        let f: Frequency = same_from_map_and_gtfs(&base());
        assert_eq!(600, f.headway_secs);
        assert_eq!(ExactTimes::FrequencyBased, f.exact_times);
        check_row_columns(&f);
        check_required::<Frequency>(&base(), &["trip_id", "start_time", "end_time", "headway_secs"]);
        check_enum::<Frequency>(&base(), "exact_times", 2);
        check_unrecognized::<Frequency>(&base());
        assert_eq!(
            "headway_secs",
            invalid_value::<Frequency>(&with(&base(), "headway_secs", "-600"))
        );
        assert!(build::<Frequency>(&with(&base(), "headway_secs", "0")).is_ok());
    }
}
