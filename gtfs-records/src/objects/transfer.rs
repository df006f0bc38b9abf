use crate::codec::{coded, required, schema, unsigned, Field, Row, Value};
use crate::enums::{Coded, ObjectType, TransferType};
use crate::error::RecordError;
use crate::record::Record;

/// Rules for making connections at transfer points between routes. See <https://gtfs.org/reference/static/#transferstxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Transfer {
    /// Stop where a connection between routes begins
    pub from_stop_id: String,
    /// Stop where a connection between routes ends
    pub to_stop_id: String,
    /// Type of the transfer
    pub transfer_type: TransferType,
    /// Minimum time needed to make a transfer in seconds
    pub min_transfer_time: Option<u64>,
}

/// Raw values of a [Transfer]
#[derive(Debug, Derivative)]
#[derivative(Default)]
pub struct TransferBuilder {
    from_stop_id: Option<String>,
    to_stop_id: Option<String>,
    #[derivative(Default(value = "Some(0)"))]
    transfer_type: Option<i64>,
    min_transfer_time: Option<i64>,
}

impl Record for Transfer {
    type Builder = TransferBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::Transfer;
    const FIELDS: &'static [Field<TransferBuilder>] = schema!(TransferBuilder;
        "from_stop_id" => from_stop_id: String,
        "to_stop_id" => to_stop_id: String,
        "transfer_type" => transfer_type: i64,
        "min_transfer_time" => min_transfer_time: i64,
    );

    fn verify(b: TransferBuilder) -> Result<Self, RecordError> {
        let from_stop_id = required("from_stop_id", b.from_stop_id)?;
        let to_stop_id = required("to_stop_id", b.to_stop_id)?;
        Ok(Transfer {
            from_stop_id,
            to_stop_id,
            transfer_type: coded("transfer_type", b.transfer_type.unwrap_or_default())?,
            min_transfer_time: b
                .min_transfer_time
                .map(|t| unsigned("min_transfer_time", t))
                .transpose()?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("from_stop_id", Some(self.from_stop_id.clone().into())),
            ("to_stop_id", Some(self.to_stop_id.clone().into())),
            ("transfer_type", Some(self.transfer_type.code().into())),
            ("min_transfer_time", self.min_transfer_time.map(Value::from)),
        ]
    }
}
