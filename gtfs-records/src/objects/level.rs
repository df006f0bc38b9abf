use crate::codec::{required, schema, Field, Row, Value};
use crate::enums::ObjectType;
use crate::error::RecordError;
use crate::record::{Id, Record};

/// A [Level] of a station. See <https://gtfs.org/reference/static/#levelstxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Level {
    /// Id of the level that can be referenced from stops.txt.
    #[serde(rename = "level_id")]
    pub id: String,
    /// Numeric index of the level that indicates relative position of this level in relation to other levels (levels with higher indices are assumed to be located above levels with lower indices).
    /// Ground level should have index 0, with levels above ground indicated by positive indices and levels below ground by negative indices.
    #[serde(rename = "level_index")]
    pub index: f64,
    /// Optional name of the level (that matches level lettering/numbering used inside the building or the station)
    #[serde(rename = "level_name")]
    pub name: Option<String>,
}

/// Raw values of a [Level]
#[derive(Debug, Default)]
pub struct LevelBuilder {
    id: Option<String>,
    index: Option<f64>,
    name: Option<String>,
}

impl Record for Level {
    type Builder = LevelBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::Level;
    const FIELDS: &'static [Field<LevelBuilder>] = schema!(LevelBuilder;
        "level_id" => id: String,
        "level_index" => index: f64,
        "level_name" => name: String,
    );

    fn verify(b: LevelBuilder) -> Result<Self, RecordError> {
        Ok(Level {
            id: required("level_id", b.id)?,
            index: required("level_index", b.index)?,
            name: b.name,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("level_id", Some(self.id.clone().into())),
            ("level_index", Some(self.index.into())),
            ("level_name", self.name.clone().map(Value::from)),
        ]
    }
}

impl Id for Level {
    fn id(&self) -> &str {
        &self.id
    }
}
