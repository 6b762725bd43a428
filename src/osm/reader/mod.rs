// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io;
use std::path::Path;

use builder::DirectoryBuilder;

use crate::osm::Profile;
use crate::Directory;

mod builder;
mod model;
mod xml;

/// Error conditions which may occur while loading points of interest from
/// an OSM extract.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("xml parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Format of the input OSM file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Uncompressed [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    Xml,

    /// [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    /// with [gzip](https://en.wikipedia.org/wiki/Gzip) compression
    XmlGz,

    /// [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    /// with [bzip2](https://en.wikipedia.org/wiki/Bzip2) compression
    XmlBz2,
}

impl FileFormat {
    /// Guesses the format from a file's extension. Defaults to
    /// [FileFormat::Xml] when the extension is not recognized.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("gz") => Self::XmlGz,
            Some("bz2") => Self::XmlBz2,
            _ => Self::Xml,
        }
    }
}

/// Additional controls for interpreting OSM data as a [Directory].
#[derive(Debug)]
pub struct Options<'a> {
    /// How OSM nodes should be interpreted and converted into
    /// [PointsOfInterest](crate::PointOfInterest).
    pub profile: &'a Profile<'a>,

    /// Format of the input data.
    pub file_format: FileFormat,

    /// Filter nodes by a specific bounding box. In order: left (min lon),
    /// bottom (min lat), right (max lon), top (max lat). Ignored if all
    /// values are set to zero, or at least one of them is not finite.
    pub bbox: [f64; 4],
}

/// Parse points of interest from a reader into a [Directory] as per the
/// provided [Options].
///
/// The provided stream will be automatically wrapped in a buffered reader when needed.
pub fn add_pois_from_io<R: io::Read>(
    d: &mut Directory,
    options: &Options<'_>,
    reader: R,
) -> Result<(), Error> {
    match options.file_format {
        FileFormat::Xml => {
            let b = io::BufReader::new(reader);
            let r = xml::nodes_from_io(b);
            DirectoryBuilder::new(d, options).add_nodes(r)
        }

        FileFormat::XmlGz => {
            let dec = flate2::read::MultiGzDecoder::new(reader);
            let b = io::BufReader::new(dec);
            let r = xml::nodes_from_io(b);
            DirectoryBuilder::new(d, options).add_nodes(r)
        }

        FileFormat::XmlBz2 => {
            let dec = bzip2::read::MultiBzDecoder::new(reader);
            let b = io::BufReader::new(dec);
            let r = xml::nodes_from_io(b);
            DirectoryBuilder::new(d, options).add_nodes(r)
        }
    }
}

/// Parse points of interest from a file at the provided path into a
/// [Directory] as per the provided [Options].
pub fn add_pois_from_file<P: AsRef<Path>>(
    d: &mut Directory,
    options: &Options<'_>,
    path: P,
) -> Result<(), Error> {
    let f = File::open(path)?;
    add_pois_from_io(d, options, f)
}

/// Parse points of interest from a static buffer into a [Directory] as per
/// the provided [Options].
pub fn add_pois_from_buffer(
    d: &mut Directory,
    options: &Options<'_>,
    data: &[u8],
) -> Result<(), Error> {
    if options.file_format == FileFormat::Xml {
        // Fast path is available for in-memory XML data
        let r = xml::nodes_from_buffer(data);
        DirectoryBuilder::new(d, options).add_nodes(r)
    } else {
        // Wrap the buffer in a cursor and use the IO path
        let cursor = io::Cursor::new(data);
        add_pois_from_io(d, options, cursor)
    }
}
