use serde::ser::{Serialize, Serializer};

/// All the objects type from the GTFS specification that this library reads
#[derive(Debug, Serialize, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ObjectType {
    /// [Agency] <https://gtfs.org/reference/static/#agencytxt>
    Agency,
    /// [Stop] <https://gtfs.org/reference/static/#stopstxt>
    Stop,
    /// [Route] <https://gtfs.org/reference/static/#routestxt>
    Route,
    /// [Trip] <https://gtfs.org/reference/static/#tripstxt>
    Trip,
    /// [StopTime] <https://gtfs.org/reference/static/#stop_timestxt>
    StopTime,
    /// [Service] <https://gtfs.org/reference/static/#calendartxt>
    Service,
    /// [ServiceException] <https://gtfs.org/reference/static/#calendar_datestxt>
    ServiceException,
    /// [FareAttribute] <https://gtfs.org/reference/static/#fare_attributestxt>
    FareAttribute,
    /// [FareRule] <https://gtfs.org/reference/static/#fare_rulestxt>
    FareRule,
    /// [Shape] <https://gtfs.org/reference/static/#shapestxt>
    Shape,
    /// [Frequency] <https://gtfs.org/reference/static/#frequenciestxt>
    Frequency,
    /// [Transfer] <https://gtfs.org/reference/static/#transferstxt>
    Transfer,
    /// [Pathway] <https://gtfs.org/reference/static/#pathwaystxt>
    Pathway,
    /// [Level] <https://gtfs.org/reference/static/#levelstxt>
    Level,
    /// [FeedInfo] <https://gtfs.org/reference/static/#feed_infotxt>
    FeedInfo,
    /// [Translation] <https://gtfs.org/reference/static/#translationstxt>
    Translation,
}

/// An enumeration stored in the GTFS as an integer code
///
/// Codes that are not listed in [Coded::VALUES] are refused when a record is built.
pub trait Coded: Sized + Copy + 'static {
    /// Every legal value
    const VALUES: &'static [Self];

    /// The integer written in the GTFS file
    fn code(self) -> i64;

    /// The value matching `code`, if it is legal
    fn from_code(code: i64) -> Option<Self> {
        Self::VALUES.iter().copied().find(|v| v.code() == code)
    }
}

/// Describes the kind of [Stop]. See <https://gtfs.org/reference/static/#stopstxt> `location_type`
#[derive(Derivative, Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default)]
#[serde(into = "i64")]
pub enum LocationType {
    /// Stop (or Platform). A location where passengers board or disembark from a transit vehicle. Is called a platform when defined within a parent_station
    #[derivative(Default)]
    StopPoint = 0,
    /// Station. A physical structure or area that contains one or more platform
    StopArea = 1,
    /// A location where passengers can enter or exit a station from the street
    StationEntrance = 2,
    /// A location within a station, not matching any other [Stop::location_type], which can be used to link together pathways
    GenericNode = 3,
    /// A specific location on a platform, where passengers can board and/or alight vehicles
    BoardingArea = 4,
}

impl Coded for LocationType {
    const VALUES: &'static [Self] = &[
        Self::StopPoint,
        Self::StopArea,
        Self::StationEntrance,
        Self::GenericNode,
        Self::BoardingArea,
    ];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Describes the kind of [Route] (`route_type`) or of vehicle serving a [Stop] (`vehicle_type`)
///
/// Besides the 8 basic modes, the extended route types are accepted
/// (<https://developers.google.com/transit/gtfs/reference/extended-route-types>)
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(into = "i64")]
pub enum RouteType {
    /// Tram, Streetcar, Light rail. Any light rail or street level system within a metropolitan area
    Tramway,
    /// Subway, Metro. Any underground rail system within a metropolitan area
    Subway,
    /// Used for intercity or long-distance travel
    Rail,
    /// Used for short- and long-distance bus routes
    Bus,
    /// Used for short- and long-distance boat service
    Ferry,
    /// Used for street-level rail cars where the cable runs beneath the vehicle, e.g., cable car in San Francisco
    CableCar,
    /// Aerial lift, suspended cable car (e.g., gondola lift, aerial tramway)
    Gondola,
    /// Any rail system designed for steep inclines
    Funicular,
    /// One of the extended route types, with its exact code
    Extended(u16),
}

/// Codes of the extended route types
const EXTENDED_ROUTE_TYPES: &[u16] = &[
    100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117, // rail
    200, 201, 202, 203, 204, 205, 206, 207, 208, 209, // coach
    400, 401, 402, 403, 404, 405, // urban railway
    700, 701, 702, 703, 704, 705, 706, 707, 708, 709, 710, 711, 712, 713, 714, 715, 716, 717, // bus
    800, // trolleybus
    900, 901, 902, 903, 904, 905, 906, 907, // tram
    1000, 1100, 1200, 1300, 1400, // water, air, ferry, aerial lift, funicular
    1500, 1501, 1502, 1503, 1504, 1505, 1506, 1507, // taxi
    1700, // miscellaneous
];

impl RouteType {
    /// The integer code of the route type
    pub fn code(self) -> i64 {
        match self {
            RouteType::Tramway => 0,
            RouteType::Subway => 1,
            RouteType::Rail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
            RouteType::CableCar => 5,
            RouteType::Gondola => 6,
            RouteType::Funicular => 7,
            RouteType::Extended(i) => i64::from(i),
        }
    }

    /// The route type of a code, if the code is known
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => RouteType::Tramway,
            1 => RouteType::Subway,
            2 => RouteType::Rail,
            3 => RouteType::Bus,
            4 => RouteType::Ferry,
            5 => RouteType::CableCar,
            6 => RouteType::Gondola,
            7 => RouteType::Funicular,
            c => {
                let c = u16::try_from(c).ok()?;
                return EXTENDED_ROUTE_TYPES
                    .binary_search(&c)
                    .ok()
                    .map(|_| RouteType::Extended(c));
            }
        })
    }
}

/// Describes if and how a traveller can board or alight the vehicle. See <https://gtfs.org/reference/static/#stop_timestxt> `pickup_type` and `drop_off_type`
#[derive(Debug, Derivative, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default)]
#[serde(into = "i64")]
pub enum PickupDropOffType {
    /// Regularly scheduled pickup or drop off (default when empty).
    #[derivative(Default)]
    Regular = 0,
    /// No pickup or drop off available.
    NotAvailable = 1,
    /// Must phone agency to arrange pickup or drop off.
    ArrangeByPhone = 2,
    /// Must coordinate with driver to arrange pickup or drop off.
    CoordinateWithDriver = 3,
}

impl Coded for PickupDropOffType {
    const VALUES: &'static [Self] = &[
        Self::Regular,
        Self::NotAvailable,
        Self::ArrangeByPhone,
        Self::CoordinateWithDriver,
    ];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Describes if the stop time is exact or not. See <https://gtfs.org/reference/static/#stop_timestxt> `timepoint`
#[derive(Debug, Derivative, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default)]
#[serde(into = "i64")]
pub enum TimepointType {
    /// Times are considered approximate
    Approximate = 0,
    /// Times are considered exact
    #[derivative(Default)]
    Exact = 1,
}

impl Coded for TimepointType {
    const VALUES: &'static [Self] = &[Self::Approximate, Self::Exact];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Generic enum to define if a service (like wheelchair boarding) is available
#[derive(Debug, Derivative, Serialize, PartialEq, Eq, Hash, Clone, Copy)]
#[derivative(Default)]
#[serde(into = "i64")]
pub enum Availability {
    /// No information if the service is available
    #[derivative(Default)]
    InformationNotAvailable = 0,
    /// The service is available
    Available = 1,
    /// The service is not available
    NotAvailable = 2,
}

impl Coded for Availability {
    const VALUES: &'static [Self] = &[
        Self::InformationNotAvailable,
        Self::Available,
        Self::NotAvailable,
    ];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Defines if a [ServiceException] adds or removes a day of service. See <https://gtfs.org/reference/static/#calendar_datestxt>
///
/// The code 0 is not a legal value
#[derive(Serialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(into = "i64")]
pub enum Exception {
    /// There will be a service on that day
    Added = 1,
    /// There won’t be a service on that day
    Deleted = 2,
}

impl Coded for Exception {
    const VALUES: &'static [Self] = &[Self::Added, Self::Deleted];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Defines the direction of a [Trip], only for display, not for routing. See <https://gtfs.org/reference/static/#tripstxt> `direction_id`
#[derive(Debug, Derivative, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default)]
#[serde(into = "i64")]
pub enum DirectionType {
    /// Travel in one direction (e.g. outbound travel).
    #[derivative(Default)]
    Outbound = 0,
    /// Travel in the opposite direction (e.g. inbound travel).
    Inbound = 1,
}

impl Coded for DirectionType {
    const VALUES: &'static [Self] = &[Self::Outbound, Self::Inbound];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Is the [Trip] accessible with a bike. See <https://gtfs.org/reference/static/#tripstxt> `bikes_allowed`
#[derive(Debug, Derivative, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default)]
#[serde(into = "i64")]
pub enum BikesAllowedType {
    /// No bike information for the trip
    #[derivative(Default)]
    NoBikeInfo = 0,
    /// Vehicle being used on this particular trip can accommodate at least one bicycle
    AtLeastOneBike = 1,
    /// No bicycles are allowed on this trip
    NoBikesAllowed = 2,
}

impl Coded for BikesAllowedType {
    const VALUES: &'static [Self] = &[Self::NoBikeInfo, Self::AtLeastOneBike, Self::NoBikesAllowed];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Marks a [Trip] that only runs on an exceptional schedule (`exceptional`)
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(into = "i64")]
pub enum ExceptionalType {
    /// The trip follows the regular schedule
    RegularSchedule = 0,
    /// The trip only runs as an exception
    Exception = 1,
}

impl Coded for ExceptionalType {
    const VALUES: &'static [Self] = &[Self::RegularSchedule, Self::Exception];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Defines where a [FareAttribute] can be paid
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(into = "i64")]
pub enum PaymentMethod {
    /// Fare is paid on board
    Aboard = 0,
    /// Fare must be paid before boarding
    PreBoarding = 1,
}

impl Coded for PaymentMethod {
    const VALUES: &'static [Self] = &[Self::Aboard, Self::PreBoarding];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Defines if the [Frequency] is exact (the vehicle runs exactly every n minutes) or not
#[derive(Debug, Derivative, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default)]
#[serde(into = "i64")]
pub enum ExactTimes {
    /// Frequency-based trips
    #[derivative(Default)]
    FrequencyBased = 0,
    /// Schedule-based trips with the exact same headway throughout the day.
    ScheduleBased = 1,
}

impl Coded for ExactTimes {
    const VALUES: &'static [Self] = &[Self::FrequencyBased, Self::ScheduleBased];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Defines the type of a [Transfer]
#[derive(Debug, Serialize, Derivative, Copy, Clone, PartialEq, Eq, Hash)]
#[derivative(Default)]
#[serde(into = "i64")]
pub enum TransferType {
    /// Recommended transfer point between routes
    #[derivative(Default)]
    Recommended = 0,
    /// Departing vehicle waits for arriving one
    Timed = 1,
    /// Transfer requires a minimum amount of time between arrival and departure to ensure a connection.
    MinTime = 2,
    /// Transfer is not possible at this location
    Impossible = 3,
}

impl Coded for TransferType {
    const VALUES: &'static [Self] = &[
        Self::Recommended,
        Self::Timed,
        Self::MinTime,
        Self::Impossible,
    ];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Type of a [Pathway] between two locations of a station
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(into = "i64")]
pub enum PathwayMode {
    /// A walkway
    Walkway = 0,
    /// Stairs
    Stairs = 1,
    /// Moving sidewalk / travelator
    MovingSidewalk = 2,
    /// Escalator
    Escalator = 3,
    /// Elevator
    Elevator = 4,
    /// A pathway that crosses into an area of the station where a
    /// proof of payment is required (usually via a physical payment gate)
    FareGate = 5,
    /// Indicates a pathway exiting an area where proof-of-payment is required
    /// into an area where proof-of-payment is no longer required.
    ExitGate = 6,
}

impl Coded for PathwayMode {
    const VALUES: &'static [Self] = &[
        Self::Walkway,
        Self::Stairs,
        Self::MovingSidewalk,
        Self::Escalator,
        Self::Elevator,
        Self::FareGate,
        Self::ExitGate,
    ];

    fn code(self) -> i64 {
        self as i64
    }
}

/// Indicates in which direction the pathway can be used
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(into = "i64")]
pub enum PathwayDirectionType {
    /// Unidirectional pathway, it can only be used from `from_stop_id` to `to_stop_id`.
    Unidirectional = 0,
    /// Bidirectional pathway, it can be used in the two directions.
    Bidirectional = 1,
}

impl Coded for PathwayDirectionType {
    const VALUES: &'static [Self] = &[Self::Unidirectional, Self::Bidirectional];

    fn code(self) -> i64 {
        self as i64
    }
}

/// File whose content is translated by a [Translation]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TableName {
    /// agency.txt
    Agency,
    /// stops.txt
    Stops,
    /// routes.txt
    Routes,
    /// trips.txt
    Trips,
    /// stop_times.txt
    StopTimes,
    /// feed_info.txt
    FeedInfo,
}

impl TableName {
    /// Name as written in `translations.txt`
    pub fn as_str(self) -> &'static str {
        match self {
            TableName::Agency => "agency",
            TableName::Stops => "stops",
            TableName::Routes => "routes",
            TableName::Trips => "trips",
            TableName::StopTimes => "stop_times",
            TableName::FeedInfo => "feed_info",
        }
    }

    /// The table matching a `table_name` value, if it can be translated
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "agency" => TableName::Agency,
            "stops" => TableName::Stops,
            "routes" => TableName::Routes,
            "trips" => TableName::Trips,
            "stop_times" => TableName::StopTimes,
            "feed_info" => TableName::FeedInfo,
            _ => return None,
        })
    }
}

impl Serialize for TableName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

macro_rules! into_code {
    ($($t:ty),*) => {
        $(impl From<$t> for i64 {
            fn from(value: $t) -> i64 {
                value.code()
            }
        })*
    };
}

into_code!(
    LocationType,
    RouteType,
    PickupDropOffType,
    TimepointType,
    Availability,
    Exception,
    DirectionType,
    BikesAllowedType,
    ExceptionalType,
    PaymentMethod,
    ExactTimes,
    TransferType,
    PathwayMode,
    PathwayDirectionType
);
