use chrono::Utc;
use log::{debug, info, warn};
use rayon::prelude::*;
use sha2::{Digest, Sha256};

use crate::enums::ObjectType;
use crate::error::{LineError, RecordError};
use crate::gtfs::Rejected;
use crate::objects::*;
use crate::record::Record;
use crate::transform::{Table, TableRow, Transform};
use crate::{Error, Gtfs};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Files read by the library, in reading order. The first five are mandatory
pub const GTFS_FILES: [&str; 16] = [
    "agency.txt",
    "stops.txt",
    "routes.txt",
    "trips.txt",
    "stop_times.txt",
    "calendar.txt",
    "calendar_dates.txt",
    "fare_attributes.txt",
    "fare_rules.txt",
    "shapes.txt",
    "frequencies.txt",
    "transfers.txt",
    "pathways.txt",
    "levels.txt",
    "feed_info.txt",
    "translations.txt",
];

/// Allows to parameterize how the parsing library behaves
///
/// ```
///let gtfs = gtfs_records::GtfsReader::default()
///    .read_stop_times(false) // Won’t read the stop times to save time and memory
///    .skip_invalid_records(true) // Invalid lines are reported in `gtfs.rejected` instead of failing
///    .read("fixtures/basic")?;
///assert_eq!(0, gtfs.stop_times.len());
///assert_eq!(2, gtfs.trips.len());
/// # Ok::<(), gtfs_records::error::Error>(())
///```
#[derive(Derivative)]
#[derivative(Default)]
pub struct GtfsReader {
    /// [StopTime] are very large and not always needed. This allows to skip reading them
    #[derivative(Default(value = "true"))]
    pub read_stop_times: bool,
    /// Trim the whitespaces around every value. Values are kept as written by default
    pub trim_fields: bool,
    /// Honour the `"` quoting of the CSV format. When false, every comma separates two values
    pub quoted_fields: bool,
    /// A line with more or less values than the header is an error
    pub strict_row_length: bool,
    /// Keep reading when a line is not a valid object
    pub skip_invalid_records: bool,
    /// Build the objects of a file on all the cores
    pub parallel: bool,
    cancel_flag: Option<Arc<AtomicBool>>,
    transforms: HashMap<String, Vec<Box<dyn Transform>>>,
}

impl GtfsReader {
    /// Configures the reader to read or not the stop times (default: true)
    ///
    /// This can be useful to save time and memory with large datasets when the timetable are not needed
    /// Returns Self and can be chained
    pub fn read_stop_times(mut self, read_stop_times: bool) -> Self {
        self.read_stop_times = read_stop_times;
        self
    }

    /// Should the fields be trimmed (default: false)
    ///
    /// Useful for producers padding their values with spaces. A value made only of spaces
    /// then becomes empty and is treated as absent
    pub fn trim_fields(mut self, trim_fields: bool) -> Self {
        self.trim_fields = trim_fields;
        self
    }

    /// Should `"` delimit values that can contain commas (default: false)
    ///
    /// When false, a line is split on every comma, even inside quotes
    pub fn quoted_fields(mut self, quoted_fields: bool) -> Self {
        self.quoted_fields = quoted_fields;
        self
    }

    /// Should a line with a different number of values than the header be refused (default: false)
    ///
    /// When false, values are matched to the headers by position and the extra ones are ignored
    pub fn strict_row_length(mut self, strict_row_length: bool) -> Self {
        self.strict_row_length = strict_row_length;
        self
    }

    /// Should the invalid lines be skipped (default: false)
    ///
    /// When true, they are logged and listed in [Gtfs::rejected]. When false, the first
    /// invalid line stops the reading with [Error::InvalidRecord]
    pub fn skip_invalid_records(mut self, skip_invalid_records: bool) -> Self {
        self.skip_invalid_records = skip_invalid_records;
        self
    }

    /// Should the lines of a file be validated in parallel (default: false)
    ///
    /// The objects keep the order of the file, and the reported error is the same as
    /// in a sequential reading
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Stops the reading with [Error::Cancelled] when the flag is set
    ///
    /// The flag is checked before each file
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Registers a [Transform] applied to the file `file_name` (e.g. `"trips.txt"`) before its lines are validated
    ///
    /// Transforms of the same file are applied in registration order
    pub fn transform<T: Transform + 'static>(mut self, file_name: &str, transform: T) -> Self {
        self.transforms
            .entry(file_name.to_owned())
            .or_default()
            .push(Box::new(transform));
        self
    }

    /// Reads from an url (if starts with `"http"`), or a local path (either a directory or zipped file)
    ///
    /// To read from an url, build with read-url feature
    /// See also [Gtfs::from_url] and [Gtfs::from_path] if you don’t want the library to guess
    pub fn read(self, gtfs: &str) -> Result<Gtfs, Error> {
        #[cfg(feature = "read-url")]
        if gtfs.starts_with("http") {
            return self.read_from_url(gtfs);
        }
        self.read_from_path(gtfs)
    }

    /// Reads the GTFS from a local zip archive or local directory
    pub fn read_from_path<P>(self, path: P) -> Result<Gtfs, Error>
    where
        P: AsRef<Path>,
    {
        let p = path.as_ref();
        if p.is_file() {
            let reader = File::open(p)?;
            self.read_from_reader(reader)
        } else if p.is_dir() {
            self.read_feed(DirectoryFiles(p.to_path_buf()), None)
        } else {
            Err(Error::NotFileNorDirectory(format!("{}", p.display())))
        }
    }

    /// Reads the GTFS from a remote url
    ///
    /// The library must be built with the read-url feature
    #[cfg(feature = "read-url")]
    pub fn read_from_url<U: reqwest::IntoUrl>(self, url: U) -> Result<Gtfs, Error> {
        let mut res = reqwest::blocking::get(url)?.error_for_status()?;
        let mut body = Vec::new();
        res.read_to_end(&mut body)?;
        let cursor = std::io::Cursor::new(body);
        self.read_from_reader(cursor)
    }

    /// Reads the GTFS from a zip archive
    ///
    /// The files can be in a sub-directory of the archive
    pub fn read_from_reader<T: std::io::Read + std::io::Seek>(self, reader: T) -> Result<Gtfs, Error> {
        let mut hasher = Sha256::new();
        let mut buf_reader = std::io::BufReader::new(reader);
        let _n = std::io::copy(&mut buf_reader, &mut hasher)?;
        let hash = hasher.finalize();
        let mut archive = zip::ZipArchive::new(buf_reader)?;
        let mut mapping = HashMap::new();
        let mut names = Vec::new();

        for i in 0..archive.len() {
            let archive_file = archive.by_index(i)?;
            let name = archive_file.name().to_owned();
            // resource forks added by macOS
            if name.starts_with("__MACOSX") {
                continue;
            }
            let path = Path::new(&name);
            if let Some(gtfs_file) = GTFS_FILES
                .iter()
                .find(|f| path.file_name() == Some(OsStr::new(f)))
            {
                mapping.entry(*gtfs_file).or_insert(i);
            }
            names.push(name);
        }

        self.read_feed(
            ZipFiles {
                archive,
                mapping,
                names,
            },
            Some(format!("{:x}", hash)),
        )
    }

    /// Reads the GTFS from the content of its files, by file name (e.g. `"stops.txt"`)
    pub fn read_from_blobs<K, I>(self, blobs: I) -> Result<Gtfs, Error>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Vec<u8>)>,
    {
        let blobs = blobs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.read_feed(BlobFiles(blobs), None)
    }

    fn read_feed<F: FeedFiles>(&self, mut files: F, sha256: Option<String>) -> Result<Gtfs, Error> {
        let now = Utc::now();
        let mut gtfs = Gtfs {
            files: files.names()?,
            sha256,
            ..Default::default()
        };
        let rejected = &mut gtfs.rejected;

        gtfs.agencies = self.read_required(&mut files, "agency.txt", rejected)?;
        gtfs.stops = self.read_required(&mut files, "stops.txt", rejected)?;
        gtfs.routes = self.read_required(&mut files, "routes.txt", rejected)?;
        gtfs.trips = self.read_required(&mut files, "trips.txt", rejected)?;
        if self.read_stop_times {
            gtfs.stop_times = self.read_required(&mut files, "stop_times.txt", rejected)?;
        } else {
            debug!("stop_times.txt skipped");
        }
        gtfs.services = self.read_optional(&mut files, "calendar.txt", rejected)?;
        gtfs.service_exceptions = self.read_optional(&mut files, "calendar_dates.txt", rejected)?;
        gtfs.fare_attributes = self.read_optional(&mut files, "fare_attributes.txt", rejected)?;
        gtfs.fare_rules = self.read_optional(&mut files, "fare_rules.txt", rejected)?;
        gtfs.shapes = self.read_optional(&mut files, "shapes.txt", rejected)?;
        gtfs.frequencies = self.read_optional(&mut files, "frequencies.txt", rejected)?;
        gtfs.transfers = self.read_optional(&mut files, "transfers.txt", rejected)?;
        gtfs.pathways = self.read_optional(&mut files, "pathways.txt", rejected)?;
        gtfs.levels = self.read_optional(&mut files, "levels.txt", rejected)?;
        let feed_infos: Vec<FeedInfo> = self.read_optional(&mut files, "feed_info.txt", rejected)?;
        gtfs.feed_info = feed_infos.into_iter().next();
        gtfs.translations = self.read_optional(&mut files, "translations.txt", rejected)?;

        gtfs.read_duration = Utc::now().signed_duration_since(now).num_milliseconds();
        info!(
            "read {} objects in {} ms ({} lines rejected)",
            gtfs.len(),
            gtfs.read_duration,
            gtfs.rejected.len()
        );
        Ok(gtfs)
    }

    fn read_required<O, F>(
        &self,
        files: &mut F,
        file_name: &str,
        rejected: &mut Vec<Rejected>,
    ) -> Result<Vec<O>, Error>
    where
        O: Record + Send,
        F: FeedFiles,
    {
        self.read_file(files, file_name, rejected)?
            .ok_or_else(|| Error::MissingFile(file_name.to_owned()))
    }

    fn read_optional<O, F>(
        &self,
        files: &mut F,
        file_name: &str,
        rejected: &mut Vec<Rejected>,
    ) -> Result<Vec<O>, Error>
    where
        O: Record + Send,
        F: FeedFiles,
    {
        let objs = self.read_file(files, file_name, rejected)?;
        if objs.is_none() {
            debug!("{} is not in the feed", file_name);
        }
        Ok(objs.unwrap_or_default())
    }

    fn read_file<O, F>(
        &self,
        files: &mut F,
        file_name: &str,
        rejected: &mut Vec<Rejected>,
    ) -> Result<Option<Vec<O>>, Error>
    where
        O: Record + Send,
        F: FeedFiles,
    {
        if let Some(flag) = &self.cancel_flag {
            if flag.load(Ordering::Relaxed) {
                return Err(Error::Cancelled);
            }
        }
        match files.open(file_name)? {
            Some(content) => self.read_objs(&content, file_name, rejected).map(Some),
            None => Ok(None),
        }
    }

    fn read_table(&self, content: &[u8], file_name: &str) -> Result<Table, Error> {
        let content = content
            .strip_prefix(&[0xefu8, 0xbbu8, 0xbfu8][..])
            .unwrap_or(content);
        let text = std::str::from_utf8(content).map_err(|e| Error::InvalidUtf8 {
            file_name: file_name.to_owned(),
            source: e,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .quoting(self.quoted_fields)
            .trim(if self.trim_fields {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(text.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| Error::CSVError {
                file_name: file_name.to_owned(),
                source: e,
                line_in_error: None,
            })?
            .iter()
            .map(String::from)
            .collect();

        // Pre-allocate a StringRecord for performance reasons
        let mut rec = csv::StringRecord::new();
        let mut rows = Vec::new();
        while reader.read_record(&mut rec).map_err(|e| Error::CSVError {
            file_name: file_name.to_owned(),
            source: e,
            line_in_error: None,
        })? {
            let line = rec
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(rows.len() + 2);
            rows.push(TableRow {
                line,
                values: rec.iter().map(String::from).collect(),
            });
        }
        Ok(Table { headers, rows })
    }

    fn read_objs<O>(
        &self,
        content: &[u8],
        file_name: &str,
        rejected: &mut Vec<Rejected>,
    ) -> Result<Vec<O>, Error>
    where
        O: Record + Send,
    {
        let mut table = self.read_table(content, file_name)?;
        for transform in self.transforms.get(file_name).into_iter().flatten() {
            table = transform.apply(table);
        }
        // a feed has a single feed_info, the following lines are not even built
        if O::OBJECT_TYPE == ObjectType::FeedInfo && table.rows.len() > 1 {
            warn!("{} has {} lines, only the first one is kept", file_name, table.rows.len());
            table.rows.truncate(1);
        }
        if self.strict_row_length {
            if let Some(row) = table
                .rows
                .iter()
                .find(|r| r.values.len() != table.headers.len())
            {
                return Err(Error::RowLength {
                    file_name: file_name.to_owned(),
                    line: row.line,
                    line_in_error: LineError {
                        headers: table.headers.clone(),
                        values: row.values.clone(),
                    },
                });
            }
        }

        let headers = &table.headers;
        let build = |row: &TableRow| O::from_gtfs(headers.as_slice(), row.values.as_slice());
        let results: Vec<Result<O, RecordError>> = if self.parallel {
            table.rows.par_iter().map(build).collect()
        } else {
            table.rows.iter().map(build).collect()
        };

        let mut objs = Vec::with_capacity(results.len());
        for (row, result) in table.rows.iter().zip(results) {
            match result {
                Ok(obj) => objs.push(obj),
                Err(error) if self.skip_invalid_records => {
                    warn!("{} line {} skipped: {}", file_name, row.line, error);
                    rejected.push(Rejected {
                        file_name: file_name.to_owned(),
                        line: row.line,
                        error,
                    });
                }
                Err(source) => {
                    return Err(Error::InvalidRecord {
                        file_name: file_name.to_owned(),
                        line: row.line,
                        source,
                    })
                }
            }
        }
        debug!("{}: {} {:?} read", file_name, objs.len(), O::OBJECT_TYPE);
        Ok(objs)
    }
}

/// The files of a feed, wherever they are stored
trait FeedFiles {
    /// Names of all the files of the feed
    fn names(&self) -> Result<Vec<String>, Error>;
    /// Content of a file, `None` if the feed does not have it
    fn open(&mut self, file_name: &str) -> Result<Option<Vec<u8>>, Error>;
}

fn named_io<E>(file_name: &str, e: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::NamedFileIO {
        file_name: file_name.to_owned(),
        source: Box::new(e),
    }
}

struct DirectoryFiles(PathBuf);

impl FeedFiles for DirectoryFiles {
    fn names(&self) -> Result<Vec<String>, Error> {
        let mut names: Vec<String> = std::fs::read_dir(&self.0)?
            .filter_map(|d| d.ok().and_then(|p| p.file_name().to_str().map(|s| s.to_owned())))
            .collect();
        names.sort();
        Ok(names)
    }

    fn open(&mut self, file_name: &str) -> Result<Option<Vec<u8>>, Error> {
        let path = self.0.join(file_name);
        if !path.is_file() {
            return Ok(None);
        }
        std::fs::read(path)
            .map(Some)
            .map_err(|e| named_io(file_name, e))
    }
}

struct ZipFiles<R> {
    archive: zip::ZipArchive<R>,
    mapping: HashMap<&'static str, usize>,
    names: Vec<String>,
}

impl<R: std::io::Read + std::io::Seek> FeedFiles for ZipFiles<R> {
    fn names(&self) -> Result<Vec<String>, Error> {
        Ok(self.names.clone())
    }

    fn open(&mut self, file_name: &str) -> Result<Option<Vec<u8>>, Error> {
        let index = match self.mapping.get(file_name) {
            Some(i) => *i,
            None => return Ok(None),
        };
        let mut file = self
            .archive
            .by_index(index)
            .map_err(|e| named_io(file_name, e))?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| named_io(file_name, e))?;
        Ok(Some(content))
    }
}

struct BlobFiles(HashMap<String, Vec<u8>>);

impl FeedFiles for BlobFiles {
    fn names(&self) -> Result<Vec<String>, Error> {
        let mut names: Vec<String> = self.0.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn open(&mut self, file_name: &str) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.0.remove(file_name))
    }
}
