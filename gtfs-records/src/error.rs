//! Module for the error management
use thiserror::Error;

/// Reason why a single record could not be built
///
/// Building is all or nothing: the first problem found is reported and no partial record is kept.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A required field was absent, or only given as an empty string
    #[error("missing field {0}")]
    MissingField(String),
    /// A field was given but its value is outside of the legal domain
    #[error("invalid value for field {0}")]
    InvalidValue(String),
    /// The column is not part of the schema of the record
    #[error("unrecognized field {0}")]
    UnrecognizedField(String),
    /// A numeric field holds text that is not a number
    #[error("'{value}' is not a valid number for field {field}")]
    InvalidNumber {
        /// Name of the field
        field: String,
        /// The raw value
        value: String,
        /// The error of the number parser
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RecordError {
    /// Name of the field responsible for the error
    pub fn field(&self) -> &str {
        match self {
            RecordError::MissingField(f)
            | RecordError::InvalidValue(f)
            | RecordError::UnrecognizedField(f) => f,
            RecordError::InvalidNumber { field, .. } => field,
        }
    }
}

/// Specific line from a CSV file that could not be read
#[derive(Debug)]
pub struct LineError {
    /// Headers of the CSV file
    pub headers: Vec<String>,
    /// Values of the line that could not be parsed
    pub values: Vec<String>,
}

/// An error that can occur when processing GTFS data.
#[derive(Error, Debug)]
pub enum Error {
    /// A mandatory file is not present in the archive
    #[error("Could not find file {0}")]
    MissingFile(String),
    /// The given path to the GTFS is neither a file nor a directory
    #[error("Could not read GTFS: {0} is neither a file nor a directory")]
    NotFileNorDirectory(String),
    /// A line of a file does not make a valid record
    #[error("invalid record in '{file_name}' at line {line}")]
    InvalidRecord {
        /// File containing the record
        file_name: String,
        /// Line number in the file, the header being line 1
        line: usize,
        /// Why the record was refused
        #[source]
        source: RecordError,
    },
    /// A row does not have as many values as the header (only in strict mode)
    #[error("'{file_name}' line {line} has {} values for {} headers", .line_in_error.values.len(), .line_in_error.headers.len())]
    RowLength {
        /// File containing the row
        file_name: String,
        /// Line number in the file, the header being line 1
        line: usize,
        /// The offending row
        line_in_error: LineError,
    },
    /// A file is not valid UTF-8 text
    #[error("'{file_name}' is not valid UTF-8")]
    InvalidUtf8 {
        /// The file name that could not be decoded
        file_name: String,
        /// The decoding error
        #[source]
        source: std::str::Utf8Error,
    },
    /// The reading was cancelled between two files
    #[error("reading of the GTFS was cancelled")]
    Cancelled,
    /// Generic Input/Output error while reading a file
    #[error("impossible to read file")]
    IO(#[from] std::io::Error),
    /// Impossible to read a file
    #[error("impossible to read '{file_name}'")]
    NamedFileIO {
        /// The file name that could not be read
        file_name: String,
        /// The inital error that caused the unability to read the file
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Impossible to fetch the remote archive by the URL
    #[cfg(feature = "read-url")]
    #[error("impossible to remotely access file")]
    Fetch(#[from] reqwest::Error),
    /// Impossible to read a CSV file
    #[error("impossible to read csv file '{file_name}'")]
    CSVError {
        /// File name that could not be parsed as CSV
        file_name: String,
        /// The initial error by the csv library
        #[source]
        source: csv::Error,
        /// The line that could not be parsed by the csv library
        line_in_error: Option<LineError>,
    },
    /// Error when trying to unzip the GTFS archive
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    /// The record error wrapped in [Error::InvalidRecord], if any
    pub fn record_error(&self) -> Option<&RecordError> {
        match self {
            Error::InvalidRecord { source, .. } => Some(source),
            _ => None,
        }
    }
}
