use crate::codec::{required, schema, Field, Row, Value};
use crate::enums::ObjectType;
use crate::error::RecordError;
use crate::record::Record;
use std::fmt;

/// Meta-data about the feed. See <https://gtfs.org/reference/static/#feed_infotxt>
///
/// Dates and languages are kept as written
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FeedInfo {
    /// Full name of the organization that publishes the dataset.
    #[serde(rename = "feed_publisher_name")]
    pub name: String,
    /// URL of the dataset publishing organization's website
    #[serde(rename = "feed_publisher_url")]
    pub url: String,
    /// Default language used for the text in this dataset
    #[serde(rename = "feed_lang")]
    pub lang: String,
    /// The dataset provides complete and reliable schedule information for service in the period from this date
    #[serde(rename = "feed_start_date")]
    pub start_date: Option<String>,
    ///The dataset provides complete and reliable schedule information for service in the period until this date
    #[serde(rename = "feed_end_date")]
    pub end_date: Option<String>,
    /// String that indicates the current version of their GTFS dataset
    #[serde(rename = "feed_version")]
    pub version: Option<String>,
    /// Email address for communication regarding the GTFS dataset and data publishing practices
    #[serde(rename = "feed_contact_email")]
    pub contact_email: Option<String>,
    /// URL for contact information, a web-form, support desk, or other tools for communication regarding the GTFS dataset and data publishing practices
    #[serde(rename = "feed_contact_url")]
    pub contact_url: Option<String>,
    /// Defines the language used when the data consumer doesn’t know the language of the rider
    pub default_lang: Option<String>,
}

/// Raw values of a [FeedInfo]
#[derive(Debug, Default)]
pub struct FeedInfoBuilder {
    name: Option<String>,
    url: Option<String>,
    lang: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    version: Option<String>,
    contact_email: Option<String>,
    contact_url: Option<String>,
    default_lang: Option<String>,
}

impl Record for FeedInfo {
    type Builder = FeedInfoBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::FeedInfo;
    const FIELDS: &'static [Field<FeedInfoBuilder>] = schema!(FeedInfoBuilder;
        "feed_publisher_name" => name: String,
        "feed_publisher_url" => url: String,
        "feed_lang" => lang: String,
        "feed_start_date" => start_date: String,
        "feed_end_date" => end_date: String,
        "feed_version" => version: String,
        "feed_contact_email" => contact_email: String,
        "feed_contact_url" => contact_url: String,
        "default_lang" => default_lang: String,
    );

    fn verify(b: FeedInfoBuilder) -> Result<Self, RecordError> {
        Ok(FeedInfo {
            name: required("feed_publisher_name", b.name)?,
            url: required("feed_publisher_url", b.url)?,
            lang: required("feed_lang", b.lang)?,
            start_date: b.start_date,
            end_date: b.end_date,
            version: b.version,
            contact_email: b.contact_email,
            contact_url: b.contact_url,
            default_lang: b.default_lang,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("feed_publisher_name", Some(self.name.clone().into())),
            ("feed_publisher_url", Some(self.url.clone().into())),
            ("feed_lang", Some(self.lang.clone().into())),
            ("feed_start_date", self.start_date.clone().map(Value::from)),
            ("feed_end_date", self.end_date.clone().map(Value::from)),
            ("feed_version", self.version.clone().map(Value::from)),
            ("feed_contact_email", self.contact_email.clone().map(Value::from)),
            ("feed_contact_url", self.contact_url.clone().map(Value::from)),
            ("default_lang", self.default_lang.clone().map(Value::from)),
        ]
    }
}

impl fmt::Display for FeedInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::checks::*;

    #[test]
    fn feed_info() {
        let base = pairs(&[
            ("feed_publisher_name", "STM"),
            ("feed_publisher_url", "https://stm.info"),
            ("feed_lang", "fr"),
            ("feed_version", "2024-05"),
        ]);
        let info: FeedInfo = same_from_map_and_gtfs(&base);
        assert_eq!("STM", info.to_string());
        assert_eq!(Some("2024-05".to_owned()), info.version);
        assert_eq!(None, info.start_date);
        check_row_columns(&info);
        check_required::<FeedInfo>(&base, &["feed_publisher_name", "feed_publisher_url", "feed_lang"]);
        check_unrecognized::<FeedInfo>(&base);
    }
}
