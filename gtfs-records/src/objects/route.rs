use crate::codec::{
    invalid, parse_color, required, route_type, schema, serialize_color, unsigned, Field, Row,
    Value,
};
use crate::enums::{ObjectType, RouteType};
use crate::error::RecordError;
use crate::record::{Id, Record};
use rgb::RGB8;
use std::fmt;

/// A route is a commercial line (there can be various stop sequences for a same line). See <https://gtfs.org/reference/static/#routestxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Route {
    /// Unique technical (not for the traveller) identifier for the route
    #[serde(rename = "route_id")]
    pub id: String,
    /// Agency for the specified route
    pub agency_id: Option<String>,
    /// Short name of a route. This will often be a short, abstract identifier like "32", "100X", or "Green"
    #[serde(rename = "route_short_name")]
    pub short_name: Option<String>,
    /// Full name of a route. This name is generally more descriptive than the [Route::short_name]
    #[serde(rename = "route_long_name")]
    pub long_name: Option<String>,
    /// Description of a route that provides useful, quality information
    #[serde(rename = "route_desc")]
    pub desc: Option<String>,
    /// Indicates the type of transportation used on a route
    pub route_type: RouteType,
    /// URL of a web page about the particular route
    #[serde(rename = "route_url")]
    pub url: Option<String>,
    /// Route color designation that matches public facing material
    #[serde(rename = "route_color", serialize_with = "serialize_color")]
    pub color: RGB8,
    /// Legible color to use for text drawn against a background of [Route::color]
    #[serde(rename = "route_text_color", serialize_with = "serialize_color")]
    pub text_color: RGB8,
    /// Orders the routes in a way which is ideal for presentation to customers.
    /// Routes with smaller route_sort_order values should be displayed first.
    #[serde(rename = "route_sort_order")]
    pub sort_order: u64,
}

/// Raw values of a [Route]
#[derive(Debug, Derivative)]
#[derivative(Default)]
pub struct RouteBuilder {
    id: Option<String>,
    agency_id: Option<String>,
    short_name: Option<String>,
    long_name: Option<String>,
    desc: Option<String>,
    route_type: Option<i64>,
    url: Option<String>,
    #[derivative(Default(value = "Some(\"FFFFFF\".to_owned())"))]
    color: Option<String>,
    #[derivative(Default(value = "Some(\"000000\".to_owned())"))]
    text_color: Option<String>,
    #[derivative(Default(value = "Some(0)"))]
    sort_order: Option<i64>,
}

impl Record for Route {
    type Builder = RouteBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::Route;
    const FIELDS: &'static [Field<RouteBuilder>] = schema!(RouteBuilder;
        "route_id" => id: String,
        "agency_id" => agency_id: String,
        "route_short_name" => short_name: String,
        "route_long_name" => long_name: String,
        "route_desc" => desc: String,
        "route_type" => route_type: i64,
        "route_url" => url: String,
        "route_color" => color: String,
        "route_text_color" => text_color: String,
        "route_sort_order" => sort_order: i64,
    );

    fn verify(b: RouteBuilder) -> Result<Self, RecordError> {
        let id = required("route_id", b.id)?;
        let code = required("route_type", b.route_type)?;
        if b.short_name.is_none() && b.long_name.is_none() {
            return Err(RecordError::MissingField(
                "route_short_name or route_long_name".to_owned(),
            ));
        }
        let color = b.color.ok_or_else(|| invalid("route_color"))?;
        let text_color = b.text_color.ok_or_else(|| invalid("route_text_color"))?;
        let sort_order = b.sort_order.ok_or_else(|| invalid("route_sort_order"))?;
        Ok(Route {
            id,
            agency_id: b.agency_id,
            short_name: b.short_name,
            long_name: b.long_name,
            desc: b.desc,
            route_type: route_type("route_type", code)?,
            url: b.url,
            color: parse_color("route_color", &color)?,
            text_color: parse_color("route_text_color", &text_color)?,
            sort_order: unsigned("route_sort_order", sort_order)?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("route_id", Some(self.id.clone().into())),
            ("agency_id", self.agency_id.clone().map(Value::from)),
            ("route_short_name", self.short_name.clone().map(Value::from)),
            ("route_long_name", self.long_name.clone().map(Value::from)),
            ("route_desc", self.desc.clone().map(Value::from)),
            ("route_type", Some(self.route_type.code().into())),
            ("route_url", self.url.clone().map(Value::from)),
            ("route_color", Some(self.color.into())),
            ("route_text_color", Some(self.text_color.into())),
            ("route_sort_order", Some(self.sort_order.into())),
        ]
    }
}

impl Id for Route {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.long_name, &self.short_name) {
            (Some(long_name), _) => write!(f, "{}", long_name),
            (None, Some(short_name)) => write!(f, "{}", short_name),
            (None, None) => write!(f, "{}", self.id),
        }
    }
}
