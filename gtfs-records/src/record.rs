//! The construction protocol shared by every GTFS object
use crate::codec::{Field, Row};
use crate::enums::ObjectType;
use crate::error::RecordError;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Objects that have an identifier implement this trait
///
/// Those identifier are technical and should not be shown to travellers
pub trait Id {
    /// Identifier of the object
    fn id(&self) -> &str;
}

/// Trait to introspect what is the object’s type (stop, route…)
pub trait Type {
    /// What is the type of the object
    fn object_type(&self) -> ObjectType;
}

/// A GTFS object built from the cells of one line
///
/// Values are first stored in a [Record::Builder], one column at a time, then
/// [Record::verify] checks the whole and produces the immutable object.
pub trait Record: Sized {
    /// Mutable accumulator of the raw values, holding the default values
    type Builder: Default + 'static;

    /// Kind of object
    const OBJECT_TYPE: ObjectType;

    /// Known columns
    const FIELDS: &'static [Field<Self::Builder>];

    /// Checks the required fields (in declaration order), then the values
    fn verify(builder: Self::Builder) -> Result<Self, RecordError>;

    /// The object as (GTFS column, value) pairs, in the order of [Record::FIELDS]
    fn to_row(&self) -> Row;

    /// Stores one value in the builder
    ///
    /// An empty value never replaces the current one, even for an unknown column.
    fn set_field(builder: &mut Self::Builder, name: &str, value: &str) -> Result<(), RecordError> {
        if value.is_empty() {
            return Ok(());
        }
        let field = Self::FIELDS
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| RecordError::UnrecognizedField(name.to_owned()))?;
        (field.set)(builder, value)
    }

    /// Builds the object from (column, value) pairs
    fn from_pairs<K, V, I>(pairs: I) -> Result<Self, RecordError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut builder = Self::Builder::default();
        for (k, v) in pairs {
            Self::set_field(&mut builder, k.as_ref(), v.as_ref())?;
        }
        Self::verify(builder)
    }

    /// Builds the object from a column → value map
    fn from_map<K, V, S>(map: &HashMap<K, V, S>) -> Result<Self, RecordError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
        S: BuildHasher,
    {
        Self::from_pairs(map.iter())
    }

    /// Builds the object from the headers of a file and the values of one of its lines
    ///
    /// Values are matched to headers by position. Extra headers or extra values are ignored.
    fn from_gtfs<H, V>(headers: &[H], values: &[V]) -> Result<Self, RecordError>
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        Self::from_pairs(headers.iter().zip(values.iter()))
    }
}

impl<T: Record> Type for T {
    fn object_type(&self) -> ObjectType {
        T::OBJECT_TYPE
    }
}

/// Column names of a record, in schema order
pub fn column_names<T: Record>() -> impl Iterator<Item = &'static str> {
    T::FIELDS.iter().map(|f| f.name)
}
