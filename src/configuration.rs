use clap::Parser;

/// Environment variable used when `--database` is not given
pub const DATABASE_ENV: &str = "GTFS_DATABASE";

#[derive(Parser, Debug, PartialEq)]
#[command(name = "gtfs-loader")]
#[command(about = "Reads and validates a static GTFS feed", long_about = None)]
pub struct Configuration {
    /// Zip archive, directory or url of the feed
    #[arg(value_name = "FEED")]
    pub feed: String,

    /// SQLite database the feed is written to
    #[arg(long, env = DATABASE_ENV)]
    pub database: Option<String>,

    /// Drop the tables before writing the feed
    #[arg(long)]
    pub reset: bool,

    /// Print the feed as json on stdout
    #[arg(long)]
    pub json: bool,

    /// Skip the invalid lines instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Cells may be enclosed in double quotes
    #[arg(long)]
    pub quoted: bool,

    /// Build the objects of each file on several threads
    #[arg(long)]
    pub parallel: bool,

    /// Fix the files of producers using the Belgian railways layout
    #[arg(long)]
    pub legacy_nmbs: bool,
}
