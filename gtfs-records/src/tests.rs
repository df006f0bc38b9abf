use crate::error::RecordError;
use crate::{
    DropColumn, Error, Exception, Gtfs, GtfsReader, LegacyTranslations, LocationType,
    PathwayMode, RouteType, Table, TableName, TimepointType,
};
use rgb::RGB8;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn basic_blobs() -> HashMap<String, Vec<u8>> {
    std::fs::read_dir("fixtures/basic")
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_owned();
            (name, std::fs::read(&path).unwrap())
        })
        .collect()
}

fn blobs_with(replaced: &[(&str, &str)]) -> HashMap<String, Vec<u8>> {
    let mut blobs = basic_blobs();
    for (name, content) in replaced {
        blobs.insert(name.to_string(), content.as_bytes().to_vec());
    }
    blobs
}

fn stop_times_with_errors(lines: usize, invalid: &[usize]) -> String {
    let mut content = "trip_id,arrival_time,departure_time,stop_id,stop_sequence,pickup_type\n".to_owned();
    for line in 2..lines + 2 {
        let pickup = if invalid.contains(&line) { "9" } else { "0" };
        content.push_str(&format!("T1,08:00:00,08:00:00,PL1,{},{}\n", line, pickup));
    }
    content
}

#[test]
fn read_basic() {
    let gtfs = Gtfs::from_path("fixtures/basic").expect("impossible to read gtfs");
    assert_eq!(1, gtfs.agencies.len());
    assert_eq!(5, gtfs.stops.len());
    assert_eq!(2, gtfs.routes.len());
    assert_eq!(2, gtfs.trips.len());
    assert_eq!(4, gtfs.stop_times.len());
    assert_eq!(2, gtfs.services.len());
    assert_eq!(2, gtfs.service_exceptions.len());
    assert_eq!(2, gtfs.fare_attributes.len());
    assert_eq!(2, gtfs.fare_rules.len());
    assert_eq!(3, gtfs.shapes.len());
    assert_eq!(2, gtfs.frequencies.len());
    assert_eq!(2, gtfs.transfers.len());
    assert_eq!(3, gtfs.pathways.len());
    assert_eq!(2, gtfs.levels.len());
    assert!(gtfs.feed_info.is_some());
    assert_eq!(4, gtfs.translations.len());
    assert_eq!(39, gtfs.len());
    assert_eq!(16, gtfs.files.len());
    assert!(gtfs.rejected.is_empty());
    assert_eq!(None, gtfs.sha256);
}

#[test]
fn keeps_file_order() {
    let gtfs = Gtfs::from_path("fixtures/basic").unwrap();
    let ids: Vec<&str> = gtfs.stops.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(vec!["STA1", "PL1", "EN1", "NODE1", "S2"], ids);
    let sequences: Vec<u64> = gtfs.shapes.iter().map(|s| s.sequence).collect();
    assert_eq!(vec![0, 1, 2], sequences);
}

#[test]
fn read_agency_with_bom() {
    let gtfs = Gtfs::from_path("fixtures/basic").unwrap();
    let agency = &gtfs.agencies[0];
    assert_eq!(Some("STM".to_owned()), agency.id);
    assert_eq!("Société de transport de Montréal", agency.name);
    assert_eq!("America/Montreal", agency.timezone);
    assert_eq!("Société de transport de Montréal", format!("{}", agency));
}

#[test]
fn read_stops() {
    let gtfs = Gtfs::from_path("fixtures/basic").unwrap();
    let station = &gtfs.stops[0];
    assert_eq!(LocationType::StopArea, station.location_type);
    assert_eq!(None, station.parent_station);

    let platform = &gtfs.stops[1];
    assert_eq!(LocationType::StopPoint, platform.location_type);
    assert_eq!(Some("STA1".to_owned()), platform.parent_station);
    assert_eq!(Some("L0".to_owned()), platform.level_id);
    assert_eq!(Some(45.5151), platform.latitude);

    let node = &gtfs.stops[3];
    assert_eq!(LocationType::GenericNode, node.location_type);
    assert_eq!(None, node.name);
    assert_eq!(None, node.latitude);
    assert_eq!("NODE1", format!("{}", node));
}

#[test]
fn read_routes() {
    let gtfs = Gtfs::from_path("fixtures/basic").unwrap();
    let metro = &gtfs.routes[0];
    assert_eq!(RouteType::Subway, metro.route_type);
    assert_eq!(RGB8::new(0x00, 0x8E, 0x4F), metro.color);
    assert_eq!(RGB8::new(255, 255, 255), metro.text_color);
    assert_eq!(1, metro.sort_order);

    let bus = &gtfs.routes[1];
    assert_eq!(RouteType::Bus, bus.route_type);
    assert_eq!(RGB8::new(255, 255, 255), bus.color);
    assert_eq!(RGB8::new(0, 0, 0), bus.text_color);
    assert_eq!(0, bus.sort_order);
}

#[test]
fn read_stop_times() {
    let gtfs = Gtfs::from_path("fixtures/basic").unwrap();
    let first = &gtfs.stop_times[0];
    assert_eq!("T1", first.trip_id);
    assert_eq!(Some("08:00:00".to_owned()), first.arrival_time);
    assert_eq!(TimepointType::Exact, first.timepoint);

    let second = &gtfs.stop_times[1];
    assert_eq!(None, second.departure_time);
    assert_eq!(Some(1200.5), second.shape_dist_traveled);
    assert_eq!(TimepointType::Approximate, second.timepoint);

    // times after midnight stay as written
    assert_eq!(Some("25:10:00".to_owned()), gtfs.stop_times[2].departure_time);
}

#[test]
fn read_calendar() {
    let gtfs = Gtfs::from_path("fixtures/basic").unwrap();
    let week = &gtfs.services[0];
    assert_eq!("WEEK", week.id);
    assert!(week.monday);
    assert!(!week.saturday);
    assert_eq!("20240101", week.start_date);

    assert_eq!(Exception::Deleted, gtfs.service_exceptions[0].exception_type);
    assert_eq!(Exception::Added, gtfs.service_exceptions[1].exception_type);
}

#[test]
fn read_pathways() {
    let gtfs = Gtfs::from_path("fixtures/basic").unwrap();
    assert_eq!(PathwayMode::MovingSidewalk, gtfs.pathways[0].mode);
    assert_eq!(Some(0.05), gtfs.pathways[0].max_slope);
    assert_eq!(Some(-20), gtfs.pathways[1].stair_count);
    assert_eq!(PathwayMode::ExitGate, gtfs.pathways[2].mode);
}

#[test]
fn read_feed_info_and_translations() {
    let gtfs = Gtfs::from_path("fixtures/basic").unwrap();
    let feed_info = gtfs.feed_info.unwrap();
    assert_eq!("STM", feed_info.name);
    assert_eq!(Some("2024.1".to_owned()), feed_info.version);

    assert_eq!(TableName::StopTimes, gtfs.translations[2].table_name);
    assert_eq!(Some("1".to_owned()), gtfs.translations[2].record_sub_id);
    assert_eq!(Some("Angrignon".to_owned()), gtfs.translations[3].field_value);
}

#[test]
fn only_first_feed_info() {
    let blobs = blobs_with(&[(
        "feed_info.txt",
        "feed_publisher_name,feed_publisher_url,feed_lang\nSTM,http://www.stm.info,fr\nSTM bis,http://www.stm.info,en\n",
    )]);
    let gtfs = GtfsReader::default().read_from_blobs(blobs).unwrap();
    assert_eq!("STM", gtfs.feed_info.unwrap().name);
}

#[test]
fn invalid_second_feed_info() {
    let blobs = blobs_with(&[(
        "feed_info.txt",
        "feed_publisher_name,feed_publisher_url,feed_lang\nSTM,http://www.stm.info,fr\n,http://www.stm.info,en\n",
    )]);
    let gtfs = GtfsReader::default().read_from_blobs(blobs).unwrap();
    assert_eq!("STM", gtfs.feed_info.unwrap().name);
    assert!(gtfs.rejected.is_empty());
}

#[test]
fn skip_stop_times() {
    let mut blobs = basic_blobs();
    blobs.remove("stop_times.txt");
    let gtfs = GtfsReader::default()
        .read_stop_times(false)
        .read_from_blobs(blobs)
        .unwrap();
    assert!(gtfs.stop_times.is_empty());
    assert_eq!(2, gtfs.trips.len());
}

#[test]
fn only_required_files() {
    let blobs: HashMap<String, Vec<u8>> = basic_blobs()
        .into_iter()
        .filter(|(name, _)| crate::GTFS_FILES[..5].contains(&name.as_str()))
        .collect();
    let gtfs = GtfsReader::default().read_from_blobs(blobs).unwrap();
    assert_eq!(5, gtfs.stops.len());
    assert!(gtfs.services.is_empty());
    assert!(gtfs.translations.is_empty());
    assert!(gtfs.feed_info.is_none());
    assert_eq!(5, gtfs.files.len());
}

#[test]
fn missing_required_file() {
    let mut blobs = basic_blobs();
    blobs.remove("routes.txt");
    let err = GtfsReader::default().read_from_blobs(blobs).unwrap_err();
    assert!(matches!(err, Error::MissingFile(ref f) if f == "routes.txt"));
}

#[test]
fn not_a_path() {
    let err = Gtfs::from_path("fixtures/nowhere").unwrap_err();
    assert!(matches!(err, Error::NotFileNorDirectory(_)));
}

#[test]
fn invalid_record() {
    let blobs = blobs_with(&[(
        "routes.txt",
        "route_id,route_short_name,route_type,route_color\n1,1,1,008E4F\n2,2,3,GREEN\n3,3,3,FF0000\n",
    )]);
    let err = GtfsReader::default().read_from_blobs(blobs).unwrap_err();
    match err {
        Error::InvalidRecord {
            ref file_name,
            line,
            source: RecordError::InvalidValue(ref field),
        } => {
            assert_eq!("routes.txt", file_name);
            assert_eq!(3, line);
            assert_eq!("route_color", field);
        }
        ref e => panic!("unexpected error {:?}", e),
    }
    assert_eq!(Some("route_color"), err.record_error().map(|e| e.field()));
}

#[test]
fn skip_invalid_records() {
    let blobs = blobs_with(&[(
        "routes.txt",
        "route_id,route_short_name,route_type,route_color\n1,1,1,008E4F\n2,2,3,GREEN\n3,,3,FF0000\n",
    )]);
    let gtfs = GtfsReader::default()
        .skip_invalid_records(true)
        .read_from_blobs(blobs)
        .unwrap();
    assert_eq!(1, gtfs.routes.len());
    assert_eq!(2, gtfs.rejected.len());
    assert_eq!("routes.txt", gtfs.rejected[0].file_name);
    assert_eq!(3, gtfs.rejected[0].line);
    assert!(matches!(gtfs.rejected[0].error, RecordError::InvalidValue(_)));
    assert_eq!(4, gtfs.rejected[1].line);
    assert!(matches!(gtfs.rejected[1].error, RecordError::MissingField(_)));
}

#[test]
fn parallel_same_as_sequential() {
    let content = stop_times_with_errors(500, &[50, 320]);
    let read = |parallel: bool, skip: bool| {
        GtfsReader::default()
            .parallel(parallel)
            .skip_invalid_records(skip)
            .read_from_blobs(blobs_with(&[("stop_times.txt", content.as_str())]))
    };

    for parallel in [false, true] {
        match read(parallel, false) {
            Err(Error::InvalidRecord { line, source, .. }) => {
                assert_eq!(50, line);
                assert_eq!("pickup_type", source.field());
            }
            r => panic!("unexpected result {:?}", r.map(|g| g.len())),
        }
    }

    let sequential = read(false, true).unwrap();
    let parallel = read(true, true).unwrap();
    assert_eq!(498, parallel.stop_times.len());
    assert_eq!(sequential.stop_times, parallel.stop_times);
    let lines: Vec<usize> = parallel.rejected.iter().map(|r| r.line).collect();
    assert_eq!(vec![50, 320], lines);
}

#[test]
fn cancelled() {
    let flag = Arc::new(AtomicBool::new(true));
    let err = GtfsReader::default()
        .cancel_flag(flag)
        .read_from_path("fixtures/basic")
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

#[test]
fn cancelled_between_files() {
    let flag = Arc::new(AtomicBool::new(false));
    let setter = flag.clone();
    let err = GtfsReader::default()
        .cancel_flag(flag)
        .transform("stops.txt", move |table: Table| {
            setter.store(true, Ordering::Relaxed);
            table
        })
        .read_from_path("fixtures/basic")
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

#[test]
fn row_length() {
    let stops = "stop_id,stop_name,stop_lat,stop_lon\nS1,Berri,45.5,-73.5\nS2,Sherbrooke,45.5,-73.5,extra\n";
    let gtfs = GtfsReader::default()
        .read_from_blobs(blobs_with(&[("stops.txt", stops)]))
        .unwrap();
    assert_eq!(2, gtfs.stops.len());

    let err = GtfsReader::default()
        .strict_row_length(true)
        .read_from_blobs(blobs_with(&[("stops.txt", stops)]))
        .unwrap_err();
    match err {
        Error::RowLength {
            file_name,
            line,
            line_in_error,
        } => {
            assert_eq!("stops.txt", file_name);
            assert_eq!(3, line);
            assert_eq!(5, line_in_error.values.len());
            assert_eq!(4, line_in_error.headers.len());
        }
        e => panic!("unexpected error {:?}", e),
    }
}

#[test]
fn invalid_utf8() {
    let mut blobs = basic_blobs();
    blobs.insert(
        "agency.txt".to_owned(),
        b"agency_name,agency_url,agency_timezone\nSoci\xe9t\xe9,http://www.stm.info,America/Montreal\n".to_vec(),
    );
    let err = GtfsReader::default().read_from_blobs(blobs).unwrap_err();
    assert!(matches!(err, Error::InvalidUtf8 { ref file_name, .. } if file_name == "agency.txt"));
}

#[test]
fn quoted_fields() {
    let stops = "stop_id,stop_name,stop_lat,stop_lon\nS1,\"Berri, UQAM\",45.5,-73.5\n";

    let err = GtfsReader::default()
        .read_from_blobs(blobs_with(&[("stops.txt", stops)]))
        .unwrap_err();
    assert!(matches!(
        err.record_error(),
        Some(RecordError::InvalidNumber { field, .. }) if field == "stop_lat"
    ));

    let gtfs = GtfsReader::default()
        .quoted_fields(true)
        .read_from_blobs(blobs_with(&[("stops.txt", stops)]))
        .unwrap();
    assert_eq!(Some("Berri, UQAM".to_owned()), gtfs.stops[0].name);
}

#[test]
fn trim_fields() {
    let stops = "stop_id,stop_name,stop_lat,stop_lon\nS1, Berri ,45.5, -73.5\n";
    let raw = GtfsReader::default()
        .read_from_blobs(blobs_with(&[("stops.txt", stops)]))
        .unwrap();
    assert_eq!(Some(" Berri ".to_owned()), raw.stops[0].name);
    assert_eq!(Some(-73.5), raw.stops[0].longitude);

    let trimmed = GtfsReader::default()
        .trim_fields(true)
        .read_from_blobs(blobs_with(&[("stops.txt", stops)]))
        .unwrap();
    assert_eq!(Some("Berri".to_owned()), trimmed.stops[0].name);
}

#[test]
fn whitespace_only_value() {
    let stops = "stop_id,stop_name,stop_lat,stop_lon\nS1,   ,50.0,4.0\n";
    let gtfs = GtfsReader::default()
        .read_from_blobs(blobs_with(&[("stops.txt", stops)]))
        .unwrap();
    assert_eq!(Some("   ".to_owned()), gtfs.stops[0].name);

    let err = GtfsReader::default()
        .trim_fields(true)
        .read_from_blobs(blobs_with(&[("stops.txt", stops)]))
        .unwrap_err();
    assert!(matches!(
        err.record_error(),
        Some(RecordError::MissingField(field)) if field == "stop_name"
    ));
}

#[test]
fn legacy_producer() {
    let nmbs = |name: &str| std::fs::read_to_string(format!("fixtures/nmbs/{}", name)).unwrap();
    let trips = nmbs("trips.txt");
    let translations = nmbs("translations.txt");
    let blobs = || {
        blobs_with(&[
            ("trips.txt", trips.as_str()),
            ("translations.txt", translations.as_str()),
        ])
    };

    let err = GtfsReader::default().read_from_blobs(blobs()).unwrap_err();
    match err {
        Error::InvalidRecord {
            file_name,
            line,
            source: RecordError::UnrecognizedField(field),
        } => {
            assert_eq!("trips.txt", file_name);
            assert_eq!(2, line);
            assert_eq!("trip_type", field);
        }
        e => panic!("unexpected error {:?}", e),
    }

    let gtfs = GtfsReader::default()
        .transform("trips.txt", DropColumn::new("trip_type"))
        .transform("translations.txt", LegacyTranslations)
        .read_from_blobs(blobs())
        .unwrap();
    assert_eq!(2, gtfs.trips.len());
    assert_eq!(6, gtfs.translations.len());
    let first = &gtfs.translations[0];
    assert_eq!(TableName::Stops, first.table_name);
    assert_eq!("stop_name", first.field_name);
    assert_eq!(Some("Brussel-Zuid".to_owned()), first.field_value);
    assert_eq!("Bruxelles-Midi", first.translation);
    assert_eq!(TableName::Trips, gtfs.translations[1].table_name);
}

#[test]
fn read_zip() {
    let gtfs = Gtfs::from_path("fixtures/zips/gtfs.zip").expect("impossible to read zip");
    assert_eq!(5, gtfs.stops.len());
    assert_eq!(4, gtfs.stop_times.len());
    assert_eq!(1, gtfs.agencies.len());
    assert_eq!(16, gtfs.files.len());
    assert!(gtfs.files.contains(&"gtfs/stops.txt".to_owned()));
    assert!(!gtfs.files.iter().any(|f| f.starts_with("__MACOSX")));
    assert_eq!(
        Some("7da600ffce488489593619b245f802fc5414c367cbefc476fd4c647b03afed1a".to_owned()),
        gtfs.sha256
    );
}

#[test]
fn zip_same_as_directory() {
    let zip = Gtfs::from_path("fixtures/zips/gtfs.zip").unwrap();
    let dir = Gtfs::from_path("fixtures/basic").unwrap();
    assert_eq!(dir.stops, zip.stops);
    assert_eq!(dir.routes, zip.routes);
    assert_eq!(dir.translations, zip.translations);
}

#[test]
fn serialize() {
    let gtfs = GtfsReader::default()
        .skip_invalid_records(true)
        .read_from_blobs(blobs_with(&[(
            "levels.txt",
            "level_id,level_index\nL0,0\nL1,first\n",
        )]))
        .unwrap();
    let json = serde_json::to_value(&gtfs).unwrap();
    assert_eq!("008E4F", json["routes"][0]["route_color"]);
    assert_eq!(1, json["routes"][0]["route_type"]);
    assert_eq!("STA1", json["stops"][0]["stop_id"]);
    assert_eq!(1, json["stops"][0]["location_type"]);
    assert_eq!("stop_times", json["translations"][2]["table_name"]);
    assert_eq!("levels.txt", json["rejected"][0]["file_name"]);
    assert_eq!(3, json["rejected"][0]["line"]);
    assert_eq!(
        "'first' is not a valid number for field level_index",
        json["rejected"][0]["error"]
    );
}
