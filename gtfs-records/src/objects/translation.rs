use crate::codec::{invalid, required, schema, Field, Row, Value};
use crate::enums::{ObjectType, TableName};
use crate::error::RecordError;
use crate::record::Record;

/// Translation of a text of the feed in another language. See <https://gtfs.org/reference/static/#translationstxt>
///
/// The translated value is found either by [Translation::record_id] (and
/// [Translation::record_sub_id] for stop times) or by [Translation::field_value]
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Translation {
    /// Table containing the field to translate
    pub table_name: TableName,
    /// Name of the field to translate
    pub field_name: String,
    /// Language of the translation
    pub language: String,
    /// Translated value
    pub translation: String,
    /// Record of the table containing the field to translate
    pub record_id: Option<String>,
    /// Helps the record that contains the field to translate when the table doesn’t have a unique ID
    pub record_sub_id: Option<String>,
    /// Translates all the fields having this value instead of a single record
    pub field_value: Option<String>,
}

/// Raw values of a [Translation]
#[derive(Debug, Default)]
pub struct TranslationBuilder {
    table_name: Option<String>,
    field_name: Option<String>,
    language: Option<String>,
    translation: Option<String>,
    record_id: Option<String>,
    record_sub_id: Option<String>,
    field_value: Option<String>,
}

impl Record for Translation {
    type Builder = TranslationBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::Translation;
    const FIELDS: &'static [Field<TranslationBuilder>] = schema!(TranslationBuilder;
        "table_name" => table_name: String,
        "field_name" => field_name: String,
        "language" => language: String,
        "translation" => translation: String,
        "record_id" => record_id: String,
        "record_sub_id" => record_sub_id: String,
        "field_value" => field_value: String,
    );

    fn verify(b: TranslationBuilder) -> Result<Self, RecordError> {
        let table = required("table_name", b.table_name)?;
        let field_name = required("field_name", b.field_name)?;
        let language = required("language", b.language)?;
        let translation = required("translation", b.translation)?;

        let table_name = TableName::from_name(&table).ok_or_else(|| invalid("table_name"))?;
        match (&b.record_id, &b.field_value) {
            (Some(_), _) if table_name == TableName::FeedInfo => return Err(invalid("record_id")),
            (Some(_), Some(_)) => return Err(invalid("record_id")),
            (None, None) => {
                return Err(RecordError::MissingField(
                    "record_id or field_value".to_owned(),
                ))
            }
            _ => {}
        }
        match (table_name, &b.record_id, &b.record_sub_id) {
            (TableName::StopTimes, Some(_), None) => {
                return Err(RecordError::MissingField("record_sub_id".to_owned()))
            }
            (TableName::StopTimes, _, _) | (_, _, None) => {}
            _ => return Err(invalid("record_sub_id")),
        }
        if b.field_value.is_some() && table_name == TableName::FeedInfo {
            return Err(invalid("field_value"));
        }

        Ok(Translation {
            table_name,
            field_name,
            language,
            translation,
            record_id: b.record_id,
            record_sub_id: b.record_sub_id,
            field_value: b.field_value,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("table_name", Some(self.table_name.as_str().to_owned().into())),
            ("field_name", Some(self.field_name.clone().into())),
            ("language", Some(self.language.clone().into())),
            ("translation", Some(self.translation.clone().into())),
            ("record_id", self.record_id.clone().map(Value::from)),
            ("record_sub_id", self.record_sub_id.clone().map(Value::from)),
            ("field_value", self.field_value.clone().map(Value::from)),
        ]
    }
}
