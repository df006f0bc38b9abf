use gtfs_records::{DropColumn, GtfsReader};

fn main() {
    /* GtfsReader::read will try to guess if you provide a path, a local zip file or a remote zip file.
       You can also use read_from_path, read_from_url or read_from_blobs
    */
    let gtfs = GtfsReader::default()
        .read_stop_times(false)
        .skip_invalid_records(true)
        .transform("trips.txt", DropColumn::new("trip_type"))
        .read("fixtures/basic")
        .expect("impossible to read gtfs");
    gtfs.print_stats();

    println!("there are {} stops in the gtfs", gtfs.stops.len());

    let route_1 = gtfs.routes.first().expect("no route");
    println!("{}: {:?}", route_1, route_1);

    for rejected in &gtfs.rejected {
        println!("{} line {}: {}", rejected.file_name, rejected.line, rejected.error);
    }
}
