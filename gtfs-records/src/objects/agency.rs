use crate::codec::{required, schema, timezone, Field, Row, Value};
use crate::enums::ObjectType;
use crate::error::RecordError;
use crate::record::{Id, Record};
use std::fmt;

/// General informations about the agency running the network. See <https://gtfs.org/reference/static/#agencytxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Agency {
    /// Unique technical (not for the traveller) identifier for the Agency
    #[serde(rename = "agency_id")]
    pub id: Option<String>,
    ///Full name of the transit agency
    #[serde(rename = "agency_name")]
    pub name: String,
    /// Full url of the transit agency.
    #[serde(rename = "agency_url")]
    pub url: String,
    /// Timezone where the transit agency is located
    #[serde(rename = "agency_timezone")]
    pub timezone: String,
    /// Primary language used by this transit agency
    #[serde(rename = "agency_lang")]
    pub lang: Option<String>,
    /// A voice telephone number for the specified agency
    #[serde(rename = "agency_phone")]
    pub phone: Option<String>,
    /// URL of a web page that allows a rider to purchase tickets or other fare instruments for that agency online
    #[serde(rename = "agency_fare_url")]
    pub fare_url: Option<String>,
    /// Email address actively monitored by the agency’s customer service department
    #[serde(rename = "agency_email")]
    pub email: Option<String>,
}

/// Raw values of an [Agency]
#[derive(Debug, Default)]
pub struct AgencyBuilder {
    id: Option<String>,
    name: Option<String>,
    url: Option<String>,
    timezone: Option<String>,
    lang: Option<String>,
    phone: Option<String>,
    fare_url: Option<String>,
    email: Option<String>,
}

impl Record for Agency {
    type Builder = AgencyBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::Agency;
    const FIELDS: &'static [Field<AgencyBuilder>] = schema!(AgencyBuilder;
        "agency_id" => id: String,
        "agency_name" => name: String,
        "agency_url" => url: String,
        "agency_timezone" => timezone: String,
        "agency_lang" => lang: String,
        "agency_phone" => phone: String,
        "agency_fare_url" => fare_url: String,
        "agency_email" => email: String,
    );

    fn verify(b: AgencyBuilder) -> Result<Self, RecordError> {
        let name = required("agency_name", b.name)?;
        let url = required("agency_url", b.url)?;
        let tz = required("agency_timezone", b.timezone)?;
        Ok(Agency {
            id: b.id,
            name,
            url,
            timezone: timezone("agency_timezone", tz)?,
            lang: b.lang,
            phone: b.phone,
            fare_url: b.fare_url,
            email: b.email,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("agency_id", self.id.clone().map(Value::from)),
            ("agency_name", Some(self.name.clone().into())),
            ("agency_url", Some(self.url.clone().into())),
            ("agency_timezone", Some(self.timezone.clone().into())),
            ("agency_lang", self.lang.clone().map(Value::from)),
            ("agency_phone", self.phone.clone().map(Value::from)),
            ("agency_fare_url", self.fare_url.clone().map(Value::from)),
            ("agency_email", self.email.clone().map(Value::from)),
        ]
    }
}

impl Id for Agency {
    fn id(&self) -> &str {
        match &self.id {
            None => "",
            Some(id) => id,
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
