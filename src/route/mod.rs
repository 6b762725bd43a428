// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod generator;
mod step;

pub use generator::{generate_route, WALKING_SPEED};
pub use step::{Maneuver, RouteStep};
