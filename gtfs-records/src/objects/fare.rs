use crate::codec::{coded, invalid, non_negative, required, schema, unsigned, Field, Row, Value};
use crate::enums::{Coded, ObjectType, PaymentMethod};
use crate::error::RecordError;
use crate::record::{Id, Record};

/// Defines one possible fare. See <https://gtfs.org/reference/static/#fare_attributestxt>
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FareAttribute {
    /// Unique technical (not for the traveller) identifier for the FareAttribute
    #[serde(rename = "fare_id")]
    pub id: String,
    /// Fare price, in the unit specified by [FareAttribute::currency]
    pub price: f64,
    /// Currency used to pay the fare
    #[serde(rename = "currency_type")]
    pub currency: String,
    /// Indicates when the fare must be paid
    pub payment_method: PaymentMethod,
    /// Indicates the number of transfers permitted on this fare. Unlimited when absent
    pub transfers: Option<u64>,
    /// Identifies the relevant agency for a fare
    pub agency_id: Option<String>,
    /// Length of time in seconds before a transfer expires
    pub transfer_duration: Option<u64>,
}

/// Raw values of a [FareAttribute]
#[derive(Debug, Default)]
pub struct FareAttributeBuilder {
    id: Option<String>,
    price: Option<f64>,
    currency: Option<String>,
    payment_method: Option<i64>,
    transfers: Option<i64>,
    agency_id: Option<String>,
    transfer_duration: Option<i64>,
}

impl Record for FareAttribute {
    type Builder = FareAttributeBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::FareAttribute;
    const FIELDS: &'static [Field<FareAttributeBuilder>] = schema!(FareAttributeBuilder;
        "fare_id" => id: String,
        "price" => price: f64,
        "currency_type" => currency: String,
        "payment_method" => payment_method: i64,
        "transfers" => transfers: i64,
        "agency_id" => agency_id: String,
        "transfer_duration" => transfer_duration: i64,
    );

    fn verify(b: FareAttributeBuilder) -> Result<Self, RecordError> {
        let id = required("fare_id", b.id)?;
        let price = required("price", b.price)?;
        let currency = required("currency_type", b.currency)?;
        let payment_method = required("payment_method", b.payment_method)?;
        Ok(FareAttribute {
            id,
            price: non_negative("price", price)?,
            currency,
            payment_method: coded("payment_method", payment_method)?,
            transfers: b
                .transfers
                .map(|t| match t {
                    0..=5 => unsigned("transfers", t),
                    _ => Err(invalid("transfers")),
                })
                .transpose()?,
            agency_id: b.agency_id,
            transfer_duration: b
                .transfer_duration
                .map(|d| unsigned("transfer_duration", d))
                .transpose()?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("fare_id", Some(self.id.clone().into())),
            ("price", Some(self.price.into())),
            ("currency_type", Some(self.currency.clone().into())),
            ("payment_method", Some(self.payment_method.code().into())),
            ("transfers", self.transfers.map(Value::from)),
            ("agency_id", self.agency_id.clone().map(Value::from)),
            ("transfer_duration", self.transfer_duration.map(Value::from)),
        ]
    }
}

impl Id for FareAttribute {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Defines which [FareAttribute] applies to an itinerary. See <https://gtfs.org/reference/static/#fare_rulestxt>
///
/// The referenced identifiers are not checked
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FareRule {
    /// Identifies a fare class
    pub fare_id: String,
    /// Identifies a route associated with the fare class
    pub route_id: Option<String>,
    /// Identifies an origin zone
    pub origin_id: Option<String>,
    /// Identifies a destination zone
    pub destination_id: Option<String>,
    /// Identifies the zones that a rider will enter while using a given fare class
    pub contains_id: Option<String>,
}

/// Raw values of a [FareRule]
#[derive(Debug, Default)]
pub struct FareRuleBuilder {
    fare_id: Option<String>,
    route_id: Option<String>,
    origin_id: Option<String>,
    destination_id: Option<String>,
    contains_id: Option<String>,
}

impl Record for FareRule {
    type Builder = FareRuleBuilder;
    const OBJECT_TYPE: ObjectType = ObjectType::FareRule;
    const FIELDS: &'static [Field<FareRuleBuilder>] = schema!(FareRuleBuilder;
        "fare_id" => fare_id: String,
        "route_id" => route_id: String,
        "origin_id" => origin_id: String,
        "destination_id" => destination_id: String,
        "contains_id" => contains_id: String,
    );

    fn verify(b: FareRuleBuilder) -> Result<Self, RecordError> {
        Ok(FareRule {
            fare_id: required("fare_id", b.fare_id)?,
            route_id: b.route_id,
            origin_id: b.origin_id,
            destination_id: b.destination_id,
            contains_id: b.contains_id,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            ("fare_id", Some(self.fare_id.clone().into())),
            ("route_id", self.route_id.clone().map(Value::from)),
            ("origin_id", self.origin_id.clone().map(Value::from)),
            ("destination_id", self.destination_id.clone().map(Value::from)),
            ("contains_id", self.contains_id.clone().map(Value::from)),
        ]
    }
}
