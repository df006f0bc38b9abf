use crate::codec::{coded, flag, required, schema, Field, Row};
use crate::enums::{Coded, Exception, ObjectType};
use crate::error::RecordError;
use crate::record::{Id, Record};

/// A calender describes on which days the vehicle runs. See <https://gtfs.org/reference/static/#calendartxt>
///
/// Dates are kept as written (`YYYYMMDD`)
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Service {
    /// Unique technical identifier (not for the traveller) of this calendar
    #[serde(rename = "service_id")]
    pub id: String,
    /// Does the service run on mondays
    pub monday: bool,
    /// Does the service run on tuesdays
    pub tuesday: bool,
    /// Does the service run on wednesdays
    pub wednesday: bool,
    /// Does the service run on thursdays
    pub thursday: bool,
    /// Does the service run on fridays
    pub friday: bool,
    /// Does the service run on saturdays
    pub saturday: bool,
    /// Does the service run on sundays
    pub sunday: bool,
    /// Start service day for the service interval
    pub start_date: String,
    /// End service day for the service interval. This service day is included in the interval
    pub end_date: String,
}

/// Raw values of a [Service]
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    id: Option<String>,
    monday: Option<i64>,
    tuesday: Option<i64>,
    wednesday: Option<i64>,
    thursday: Option<i64>,
    friday: Option<i64>,
    saturday: Option<i64>,
    sunday: Option<i64>,
    start_date: Option<String>,
    end_date: Option<String>,
}

impl Record for Service {
    type Builder = ServiceBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::Service;
    const FIELDS: &'static [Field<ServiceBuilder>] = schema!(ServiceBuilder;
        "service_id" => id: String,
        "monday" => monday: i64,
        "tuesday" => tuesday: i64,
        "wednesday" => wednesday: i64,
        "thursday" => thursday: i64,
        "friday" => friday: i64,
        "saturday" => saturday: i64,
        "sunday" => sunday: i64,
        "start_date" => start_date: String,
        "end_date" => end_date: String,
    );

    fn verify(b: ServiceBuilder) -> Result<Self, RecordError> {
        let id = required("service_id", b.id)?;
        let monday = required("monday", b.monday)?;
        let tuesday = required("tuesday", b.tuesday)?;
        let wednesday = required("wednesday", b.wednesday)?;
        let thursday = required("thursday", b.thursday)?;
        let friday = required("friday", b.friday)?;
        let saturday = required("saturday", b.saturday)?;
        let sunday = required("sunday", b.sunday)?;
        let start_date = required("start_date", b.start_date)?;
        let end_date = required("end_date", b.end_date)?;
        Ok(Service {
            id,
            monday: flag("monday", monday)?,
            tuesday: flag("tuesday", tuesday)?,
            wednesday: flag("wednesday", wednesday)?,
            thursday: flag("thursday", thursday)?,
            friday: flag("friday", friday)?,
            saturday: flag("saturday", saturday)?,
            sunday: flag("sunday", sunday)?,
            start_date,
            end_date,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("service_id", Some(self.id.clone().into())),
            ("monday", Some(self.monday.into())),
            ("tuesday", Some(self.tuesday.into())),
            ("wednesday", Some(self.wednesday.into())),
            ("thursday", Some(self.thursday.into())),
            ("friday", Some(self.friday.into())),
            ("saturday", Some(self.saturday.into())),
            ("sunday", Some(self.sunday.into())),
            ("start_date", Some(self.start_date.clone().into())),
            ("end_date", Some(self.end_date.clone().into())),
        ]
    }
}

impl Id for Service {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Defines a specific date that can be added or removed from a [Service]. See <https://gtfs.org/reference/static/#calendar_datestxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ServiceException {
    /// Identifier of the service that is modified at this date
    pub service_id: String,
    /// Date where the service will be added or deleted
    pub date: String,
    /// Is the service added or deleted
    pub exception_type: Exception,
}

/// Raw values of a [ServiceException]
#[derive(Debug, Default)]
pub struct ServiceExceptionBuilder {
    service_id: Option<String>,
    date: Option<String>,
    exception_type: Option<i64>,
}

impl Record for ServiceException {
    type Builder = ServiceExceptionBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::ServiceException;
    const FIELDS: &'static [Field<ServiceExceptionBuilder>] = schema!(ServiceExceptionBuilder;
        "service_id" => service_id: String,
        "date" => date: String,
        "exception_type" => exception_type: i64,
    );

    fn verify(b: ServiceExceptionBuilder) -> Result<Self, RecordError> {
        let service_id = required("service_id", b.service_id)?;
        let date = required("date", b.date)?;
        let exception_type = required("exception_type", b.exception_type)?;
        Ok(ServiceException {
            service_id,
            date,
            exception_type: coded("exception_type", exception_type)?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("service_id", Some(self.service_id.clone().into())),
            ("date", Some(self.date.clone().into())),
            ("exception_type", Some(self.exception_type.code().into())),
        ]
    }
}
