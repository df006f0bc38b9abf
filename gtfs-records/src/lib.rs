/*! The [General Transit Feed Specification](https://gtfs.org/) (GTFS) is a commonly used model to represent public transit data.

This crate reads the files of a static GTFS feed and turns every line into a validated, strongly typed object.

To get started, see [Gtfs] and [GtfsReader].

## What is GTFS

A Gtfs feed is a collection of CSV files (often bundled as a zip file).
Each file represents a collection of one type (stops, lines, etc.) that have relationships through unique identifiers.

This crate reads a feed and checks each object on its own: required fields, enumerations, ranges and the rules between
the fields of an object (e.g. a station can not have a parent station). The relationships between objects are not verified.

## Design decisions

### Build then verify

Every object implements [Record]. The values of a line are stored one by one in a builder that holds the default
values, then [Record::verify] checks the whole and produces the object. An empty value never replaces a default value.
The ways an object can be refused are in [error::RecordError].

### Use of Enum

Many values are integers that are actually enumerations of certain values. We always use Rust enums, like [LocationType] to represent them, and not the integer value.
An unknown value is an error.

### Reference

We try to stick as closely as possible to the reference. Optional fields are [std::option], while missing mandatory elements will result in an error.
If a default value is defined, we will use it.

There are two references <https://gtfs.org/reference/static> and <https://developers.google.com/transit/gtfs/reference>. They are mostly the same, even if google’s specification has some extensions.

### Renaming

We kept some names even if they can be confusing (a [Service] will be referenced by `service_id`), but we strip the object type (`route_short_name` is [Route::short_name]).
Serialized objects and [Record::to_row] use the names of the GTFS columns.

### Producers quirks

Files that do not follow the reference can be fixed before validation with a [Transform] (see [DropColumn] and [LegacyTranslations]).

*/
#![warn(missing_docs)]

#[macro_use]
extern crate derivative;
#[macro_use]
extern crate serde_derive;

pub mod codec;
mod enums;
pub mod error;
mod gtfs;
mod gtfs_reader;
pub(crate) mod objects;
mod record;
mod transform;

#[cfg(test)]
mod tests;

pub use codec::{Field, FieldKind, Row, Value};
pub use enums::*;
pub use error::{Error, RecordError};
pub use gtfs::{Gtfs, Rejected};
pub use gtfs_reader::{GtfsReader, GTFS_FILES};
pub use objects::*;
pub use record::{column_names, Id, Record, Type};
pub use transform::{DropColumn, LegacyTranslations, Table, TableRow, Transform};
