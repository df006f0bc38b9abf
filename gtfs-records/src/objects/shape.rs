use crate::codec::{latitude, longitude, non_negative, required, schema, unsigned, Field, Row, Value};
use crate::enums::ObjectType;
use crate::error::RecordError;
use crate::record::{Id, Record};

/// A single geographical point decribing the shape of a [crate::Trip]. See <https://gtfs.org/reference/static/#shapestxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Shape {
    /// Unique technical (not for the traveller) identifier for the Shape
    #[serde(rename = "shape_id")]
    pub id: String,
    /// Latitude of a shape point
    #[serde(rename = "shape_pt_lat")]
    pub latitude: f64,
    /// Longitude of a shape point
    #[serde(rename = "shape_pt_lon")]
    pub longitude: f64,
    /// Sequence in which the shape points connect to form the shape. Values increase along the trip but do not need to be consecutive.
    #[serde(rename = "shape_pt_sequence")]
    pub sequence: u64,
    /// Actual distance traveled along the shape from the first shape point to the point specified in this record. Used by trip planners to show the correct portion of the shape on a map
    #[serde(rename = "shape_dist_traveled")]
    pub dist_traveled: Option<f64>,
}

/// Raw values of a [Shape]
#[derive(Debug, Default)]
pub struct ShapeBuilder {
    id: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    sequence: Option<i64>,
    dist_traveled: Option<f64>,
}

impl Record for Shape {
    type Builder = ShapeBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::Shape;
    const FIELDS: &'static [Field<ShapeBuilder>] = schema!(ShapeBuilder;
        "shape_id" => id: String,
        "shape_pt_lat" => latitude: f64,
        "shape_pt_lon" => longitude: f64,
        "shape_pt_sequence" => sequence: i64,
        "shape_dist_traveled" => dist_traveled: f64,
    );

    fn verify(b: ShapeBuilder) -> Result<Self, RecordError> {
        let id = required("shape_id", b.id)?;
        let lat = required("shape_pt_lat", b.latitude)?;
        let lon = required("shape_pt_lon", b.longitude)?;
        let sequence = required("shape_pt_sequence", b.sequence)?;
        Ok(Shape {
            id,
            latitude: latitude("shape_pt_lat", lat)?,
            longitude: longitude("shape_pt_lon", lon)?,
            sequence: unsigned("shape_pt_sequence", sequence)?,
            dist_traveled: b
                .dist_traveled
                .map(|d| non_negative("shape_dist_traveled", d))
                .transpose()?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("shape_id", Some(self.id.clone().into())),
            ("shape_pt_lat", Some(self.latitude.into())),
            ("shape_pt_lon", Some(self.longitude.into())),
            ("shape_pt_sequence", Some(self.sequence.into())),
            ("shape_dist_traveled", self.dist_traveled.map(Value::from)),
        ]
    }
}

impl Id for Shape {
    fn id(&self) -> &str {
        &self.id
    }
}
