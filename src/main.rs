use std::error::Error;
use std::path::{Path, PathBuf};

use campusnav;
use clap::Parser;

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct DirectoryLoadError(PathBuf, #[source] campusnav::osm::Error);

#[derive(Parser)]
struct Cli {
    /// The path to the campus OSM extract (.osm, .osm.gz or .osm.bz2)
    extract_file: PathBuf,

    /// Latitude of the current position
    start_lat: f64,

    /// Longitude of the current position
    start_lon: f64,

    /// Id or name of the destination point of interest
    destination: String,

    /// Print the route polyline as GeoJSON instead of guidance text
    #[arg(long)]
    geojson: bool,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let directory = load_directory(&cli.extract_file)?;

    let origin = campusnav::Coordinate::new(cli.start_lat, cli.start_lon)?;
    let destination = directory
        .get_poi(&cli.destination)
        .or_else(|| directory.find_by_name(&cli.destination))
        .expect("no point of interest with the given id or name")
        .clone();

    let route = campusnav::generate_route(origin, &destination, &directory)?;

    if cli.geojson {
        print_geojson(&route);
        return Ok(());
    }

    let mut session = campusnav::NavigationSession::new();
    session.start(destination, route);

    println!(
        "Navigating to {} ({}, about {})",
        session.destination().unwrap().name,
        format_distance(session.remaining_distance()),
        format_time(session.estimated_time()),
    );
    for (i, step) in session.route().iter().enumerate() {
        if step.distance > 0.0 {
            println!(
                "{:2}. {} ({})",
                i + 1,
                step.instruction,
                format_distance(step.distance)
            );
        } else {
            println!("{:2}. {}", i + 1, step.instruction);
        }
    }

    Ok(())
}

fn load_directory<P: AsRef<Path>>(path: P) -> Result<campusnav::Directory, DirectoryLoadError> {
    let mut d = campusnav::Directory::default();
    let options = campusnav::osm::Options {
        profile: &campusnav::osm::CAMPUS_PROFILE,
        file_format: campusnav::osm::FileFormat::from_path(path.as_ref()),
        bbox: [0.0; 4],
    };
    match campusnav::osm::add_pois_from_file(&mut d, &options, path.as_ref()) {
        Ok(()) => Ok(d),
        Err(e) => Err(DirectoryLoadError(PathBuf::from(path.as_ref()), e)),
    }
}

fn print_geojson(route: &[campusnav::RouteStep]) {
    println!("{{");
    println!("  \"type\": \"FeatureCollection\",");
    println!("  \"features\": [");
    println!("    {{");
    println!("      \"type\": \"Feature\",");
    println!("      \"properties\": {{}},");

    println!("      \"geometry\": {{");
    println!("        \"type\": \"LineString\",");
    println!("        \"coordinates\": [");

    let mut positions = route.iter().map(|step| step.position).peekable();
    while let Some(position) = positions.next() {
        let suffix = if positions.peek().is_some() { "," } else { "" };
        println!(
            "          [{}, {}]{}",
            position.longitude, position.latitude, suffix
        );
    }

    println!("        ]");
    println!("      }}");
    println!("    }}");
    println!("  ]");
    println!("}}");
}

fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round() as i64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

fn format_time(seconds: f64) -> String {
    let minutes = (seconds / 60.0).round() as i64;
    if minutes < 60 {
        format!("{} min", minutes)
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}
