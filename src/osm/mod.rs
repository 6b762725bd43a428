// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod profile;
mod reader;

pub use profile::{CategoryRule, Profile, CAMPUS_PROFILE};
pub use reader::{
    add_pois_from_buffer, add_pois_from_file, add_pois_from_io, Error, FileFormat, Options,
};
