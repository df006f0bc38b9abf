use crate::codec::{coded, invalid, non_negative, required, schema, unsigned, Field, Row, Value};
use crate::enums::{Coded, ObjectType, PathwayDirectionType, PathwayMode};
use crate::error::RecordError;
use crate::record::{Id, Record};

/// Pathways are used to link together locations within stations. See <https://gtfs.org/reference/static/#pathwaystxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Pathway {
    /// Unique technical identifier (not for the traveller) of the pathway
    #[serde(rename = "pathway_id")]
    pub id: String,
    /// Location at which the pathway begins
    pub from_stop_id: String,
    /// Location at which the pathway ends
    pub to_stop_id: String,
    /// Type of pathway between the specified (from_stop_id, to_stop_id) pair
    #[serde(rename = "pathway_mode")]
    pub mode: PathwayMode,
    /// Indicates in which direction the pathway can be used
    pub is_bidirectional: PathwayDirectionType,
    /// Horizontal length in meters of the pathway from the origin location to the destination location
    pub length: Option<f64>,
    /// Average time in seconds needed to walk through the pathway from the origin location to the destination location
    pub traversal_time: Option<u64>,
    /// Number of stairs of the pathway. Never 0
    pub stair_count: Option<i64>,
    /// Maximum slope ratio of the pathway
    pub max_slope: Option<f64>,
    /// Minimum width of the pathway in meters
    pub min_width: Option<f64>,
    /// String of text from physical signage visible to transit riders
    pub signposted_as: Option<String>,
    /// Same as [Pathway::signposted_as], but when the pathway is used backward
    pub reversed_signposted_as: Option<String>,
}

/// Raw values of a [Pathway]
#[derive(Debug, Default)]
pub struct PathwayBuilder {
    id: Option<String>,
    from_stop_id: Option<String>,
    to_stop_id: Option<String>,
    mode: Option<i64>,
    is_bidirectional: Option<i64>,
    length: Option<f64>,
    traversal_time: Option<i64>,
    stair_count: Option<i64>,
    max_slope: Option<f64>,
    min_width: Option<f64>,
    signposted_as: Option<String>,
    reversed_signposted_as: Option<String>,
}

impl Record for Pathway {
    type Builder = PathwayBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::Pathway;
    const FIELDS: &'static [Field<PathwayBuilder>] = schema!(PathwayBuilder;
        "pathway_id" => id: String,
        "from_stop_id" => from_stop_id: String,
        "to_stop_id" => to_stop_id: String,
        "pathway_mode" => mode: i64,
        "is_bidirectional" => is_bidirectional: i64,
        "length" => length: f64,
        "traversal_time" => traversal_time: i64,
        "stair_count" => stair_count: i64,
        "max_slope" => max_slope: f64,
        "min_width" => min_width: f64,
        "signposted_as" => signposted_as: String,
        "reversed_signposted_as" => reversed_signposted_as: String,
    );

    fn verify(b: PathwayBuilder) -> Result<Self, RecordError> {
        let id = required("pathway_id", b.id)?;
        let from_stop_id = required("from_stop_id", b.from_stop_id)?;
        let to_stop_id = required("to_stop_id", b.to_stop_id)?;
        let mode = required("pathway_mode", b.mode)?;
        let is_bidirectional = required("is_bidirectional", b.is_bidirectional)?;

        let pathway = Pathway {
            id,
            from_stop_id,
            to_stop_id,
            mode: coded("pathway_mode", mode)?,
            is_bidirectional: coded("is_bidirectional", is_bidirectional)?,
            length: b.length.map(|l| non_negative("length", l)).transpose()?,
            traversal_time: b
                .traversal_time
                .map(|t| unsigned("traversal_time", t))
                .transpose()?,
            stair_count: match b.stair_count {
                Some(0) => return Err(invalid("stair_count")),
                count => count,
            },
            max_slope: b.max_slope,
            min_width: b.min_width,
            signposted_as: b.signposted_as,
            reversed_signposted_as: b.reversed_signposted_as,
        };
        // leaving a paid area only goes one way
        if pathway.is_bidirectional == PathwayDirectionType::Bidirectional && mode >= 6 {
            return Err(invalid("is_bidirectional"));
        }
        if pathway.max_slope.is_some() && matches!(mode, 1 | 3) {
            return Err(invalid("max_slope"));
        }
        if matches!(pathway.min_width, Some(w) if w <= 0.0) {
            return Err(invalid("min_width"));
        }
        Ok(pathway)
    }

    fn to_row(&self) -> Row {
        vec![
            ("pathway_id", Some(self.id.clone().into())),
            ("from_stop_id", Some(self.from_stop_id.clone().into())),
            ("to_stop_id", Some(self.to_stop_id.clone().into())),
            ("pathway_mode", Some(self.mode.code().into())),
            ("is_bidirectional", Some(self.is_bidirectional.code().into())),
            ("length", self.length.map(Value::from)),
            ("traversal_time", self.traversal_time.map(Value::from)),
            ("stair_count", self.stair_count.map(Value::from)),
            ("max_slope", self.max_slope.map(Value::from)),
            ("min_width", self.min_width.map(Value::from)),
            ("signposted_as", self.signposted_as.clone().map(Value::from)),
            (
                "reversed_signposted_as",
                self.reversed_signposted_as.clone().map(Value::from),
            ),
        ]
    }
}

impl Id for Pathway {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::checks::*;

    fn base() -> Pairs {
        pairs(&[
            ("pathway_id", "P1"),
            ("from_stop_id", "S1"),
            ("to_stop_id", "S2"),
            ("pathway_mode", "1"),
            ("is_bidirectional", "1"),
        ])
    }

    #[test]
    fn pathway() {
        let p: Pathway = same_from_map_and_gtfs(&base());
        assert_eq!(PathwayMode::Stairs, p.mode);
        assert_eq!(PathwayDirectionType::Bidirectional, p.is_bidirectional);
        check_row_columns(&p);
        check_required::<Pathway>(
            &base(),
            &["pathway_id", "from_stop_id", "to_stop_id", "pathway_mode", "is_bidirectional"],
        );
        check_unrecognized::<Pathway>(&base());
    }

    #[test]
    fn enumerations() {
        let one_way = with(&base(), "is_bidirectional", "0");
        check_enum::<Pathway>(&one_way, "pathway_mode", 7);
        check_enum::<Pathway>(&base(), "is_bidirectional", 2);
    }

    #[test]
    fn exit_gate_one_way() {
        let gate = with(&base(), "pathway_mode", "6");
        assert_eq!("is_bidirectional", invalid_value::<Pathway>(&gate));
        let p: Pathway = build(&with(&gate, "is_bidirectional", "0")).unwrap();
        assert_eq!(PathwayMode::ExitGate, p.mode);
    }

    #[test]
    fn measures() {
        assert_eq!("length", invalid_value::<Pathway>(&with(&base(), "length", "-1")));
        assert_eq!(
            "traversal_time",
            invalid_value::<Pathway>(&with(&base(), "traversal_time", "-30"))
        );
        assert_eq!("min_width", invalid_value::<Pathway>(&with(&base(), "min_width", "0")));
        let p: Pathway = build(&with(&base(), "min_width", "1.2")).unwrap();
        assert_eq!(Some(1.2), p.min_width);
    }

    #[test]
    fn stair_count() {
        assert_eq!("stair_count", invalid_value::<Pathway>(&with(&base(), "stair_count", "0")));
        let p: Pathway = build(&with(&base(), "stair_count", "24")).unwrap();
        assert_eq!(Some(24), p.stair_count);
        // going down
        let p: Pathway = build(&with(&base(), "stair_count", "-24")).unwrap();
        assert_eq!(Some(-24), p.stair_count);
    }

    #[test]
    fn max_slope() {
        for mode in ["1", "3"] {
            let p = with(&with(&base(), "pathway_mode", mode), "max_slope", "0.08");
            assert_eq!("max_slope", invalid_value::<Pathway>(&p));
        }
        for mode in ["0", "2"] {
            let p = with(&with(&base(), "pathway_mode", mode), "max_slope", "0.08");
            assert_eq!(Some(0.08), build::<Pathway>(&p).unwrap().max_slope);
        }
    }
}
