use crate::error::RecordError;
use crate::objects::*;
use crate::{Error, GtfsReader};
use serde::ser::Serializer;

/// A line that was refused while reading with [GtfsReader::skip_invalid_records]
#[derive(Debug, Serialize)]
pub struct Rejected {
    /// File of the line
    pub file_name: String,
    /// Line number, the header being line 1
    pub line: usize,
    /// Why the line was refused
    #[serde(serialize_with = "serialize_display")]
    pub error: RecordError,
}

fn serialize_display<S>(error: &RecordError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(error)
}

/// Data structure with all the GTFS objects
///
/// Every collection keeps the order of the lines in its file. No relationship between
/// the objects is checked.
///
/// This is probably the entry point you want to use:
/// ```
/// let gtfs = gtfs_records::Gtfs::new("fixtures/basic")?;
/// assert_eq!(gtfs.stops.len(), 5);
/// # Ok::<(), gtfs_records::error::Error>(())
/// ```
///
/// If you want to configure the behaviour (e.g. skipping [StopTime]), see [crate::GtfsReader]
#[derive(Debug, Default, Serialize)]
pub struct Gtfs {
    /// Time needed to read and parse the archive in milliseconds
    pub read_duration: i64,
    /// All agencies
    pub agencies: Vec<Agency>,
    /// All stops
    pub stops: Vec<Stop>,
    /// All routes
    pub routes: Vec<Route>,
    /// All trips
    pub trips: Vec<Trip>,
    /// All stop times. Empty if they were not read
    pub stop_times: Vec<StopTime>,
    /// All services of calendar.txt
    pub services: Vec<Service>,
    /// All service exceptions of calendar_dates.txt
    pub service_exceptions: Vec<ServiceException>,
    /// All fare attributes
    pub fare_attributes: Vec<FareAttribute>,
    /// All fare rules
    pub fare_rules: Vec<FareRule>,
    /// All shape points
    pub shapes: Vec<Shape>,
    /// All frequencies
    pub frequencies: Vec<Frequency>,
    /// All transfers
    pub transfers: Vec<Transfer>,
    /// All pathways
    pub pathways: Vec<Pathway>,
    /// All levels
    pub levels: Vec<Level>,
    /// The feed information. Only the first line of feed_info.txt is considered
    pub feed_info: Option<FeedInfo>,
    /// All translations
    pub translations: Vec<Translation>,
    /// All the files names of the feed
    pub files: Vec<String>,
    /// sha256 sum of the archive (only when read from a zip)
    pub sha256: Option<String>,
    /// Lines that were refused, only filled with [GtfsReader::skip_invalid_records]
    pub rejected: Vec<Rejected>,
}

impl Gtfs {
    /// Prints on stdout some basic statistics about the GTFS file (numbers of elements for each object). Mostly to be sure that everything was read
    pub fn print_stats(&self) {
        println!("GTFS data:");
        println!("  Read in {} ms", self.read_duration);
        println!("  Agencies: {}", self.agencies.len());
        println!("  Stops: {}", self.stops.len());
        println!("  Routes: {}", self.routes.len());
        println!("  Trips: {}", self.trips.len());
        println!("  Stop times: {}", self.stop_times.len());
        println!("  Services: {}", self.services.len());
        println!("  Service exceptions: {}", self.service_exceptions.len());
        println!("  Fare attributes: {}", self.fare_attributes.len());
        println!("  Fare rules: {}", self.fare_rules.len());
        println!("  Shapes: {}", self.shapes.len());
        println!("  Frequencies: {}", self.frequencies.len());
        println!("  Transfers: {}", self.transfers.len());
        println!("  Pathways: {}", self.pathways.len());
        println!("  Levels: {}", self.levels.len());
        println!("  Feed info: {}", u8::from(self.feed_info.is_some()));
        println!("  Translations: {}", self.translations.len());
        if !self.rejected.is_empty() {
            println!("  Rejected lines: {}", self.rejected.len());
        }
    }

    /// Reads from an url (if starts with `"http"`), or a local path (either a directory or zipped file)
    ///
    /// To read from an url, build with read-url feature
    /// See also [Gtfs::from_url] and [Gtfs::from_path] if you don’t want the library to guess
    pub fn new(gtfs: &str) -> Result<Gtfs, Error> {
        GtfsReader::default().read(gtfs)
    }

    /// Reads the GTFS from a local zip archive or local directory
    pub fn from_path<P>(path: P) -> Result<Gtfs, Error>
    where
        P: AsRef<std::path::Path>,
    {
        GtfsReader::default().read_from_path(path)
    }

    /// Reads the GTFS from a remote url
    ///
    /// The library must be built with the read-url feature
    #[cfg(feature = "read-url")]
    pub fn from_url<U: reqwest::IntoUrl>(url: U) -> Result<Gtfs, Error> {
        GtfsReader::default().read_from_url(url)
    }

    /// Reads for any object implementing [std::io::Read] and [std::io::Seek]
    ///
    /// Mostly an internal function that abstracts reading from an url or local file
    pub fn from_reader<T: std::io::Read + std::io::Seek>(reader: T) -> Result<Gtfs, Error> {
        GtfsReader::default().read_from_reader(reader)
    }

    /// Number of objects of the feed
    pub fn len(&self) -> usize {
        self.agencies.len()
            + self.stops.len()
            + self.routes.len()
            + self.trips.len()
            + self.stop_times.len()
            + self.services.len()
            + self.service_exceptions.len()
            + self.fare_attributes.len()
            + self.fare_rules.len()
            + self.shapes.len()
            + self.frequencies.len()
            + self.transfers.len()
            + self.pathways.len()
            + self.levels.len()
            + usize::from(self.feed_info.is_some())
            + self.translations.len()
    }

    /// The feed has no object at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
