// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{Maneuver, PointOfInterest, RouteStep};

/// State of a [NavigationSession].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Idle,
    Navigating,
}

/// Owns the active route and tracks progress through its steps.
///
/// A session is a plain state machine with explicit commands: the caller
/// (typically a navigation controller reacting to location fixes) decides
/// when to [advance](NavigationSession::advance) and when to
/// [stop](NavigationSession::stop). The session performs no I/O, registers
/// no callbacks, and defines no internal synchronization, so it must be
/// driven by a single logical caller at a time.
///
/// Calling a command in the wrong state is a contract violation and panics.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NavigationSession {
    status: SessionStatus,
    destination: Option<PointOfInterest>,
    route: Vec<RouteStep>,
    current_step: usize,
}

impl NavigationSession {
    /// Creates a new, idle session with no route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the session.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Destination of the active route, if navigating.
    pub fn destination(&self) -> Option<&PointOfInterest> {
        self.destination.as_ref()
    }

    /// Steps of the active route, in order. Empty while idle.
    pub fn route(&self) -> &[RouteStep] {
        &self.route
    }

    /// Index of the current step within [route](NavigationSession::route).
    pub fn current_step_index(&self) -> usize {
        self.current_step
    }

    /// The step currently being navigated, if any.
    pub fn current_step(&self) -> Option<&RouteStep> {
        self.route.get(self.current_step)
    }

    /// Begins navigating `route` towards `destination`, resetting progress
    /// to the first step. Starting while already navigating discards the
    /// prior route.
    ///
    /// Panics when `route` is empty: a route always carries at least its
    /// depart and arrive steps.
    pub fn start(&mut self, destination: PointOfInterest, route: Vec<RouteStep>) {
        assert!(!route.is_empty(), "a route must have at least one step");
        debug_assert_eq!(route.first().unwrap().maneuver, Maneuver::Depart);
        debug_assert_eq!(route.last().unwrap().maneuver, Maneuver::Arrive);

        self.status = SessionStatus::Navigating;
        self.destination = Some(destination);
        self.route = route;
        self.current_step = 0;
    }

    /// Moves to the next step, saturating at the final one. Reaching the
    /// arrive step does not end the session; stopping remains an explicit
    /// caller decision.
    ///
    /// Panics when the session is idle.
    pub fn advance(&mut self) {
        assert_eq!(
            self.status,
            SessionStatus::Navigating,
            "advance() requires an active session"
        );
        self.current_step = (self.current_step + 1).min(self.route.len() - 1);
    }

    /// Ends navigation, clearing the route and destination.
    ///
    /// Panics when the session is idle.
    pub fn stop(&mut self) {
        assert_eq!(
            self.status,
            SessionStatus::Navigating,
            "stop() requires an active session"
        );
        self.status = SessionStatus::Idle;
        self.destination = None;
        self.route.clear();
        self.current_step = 0;
    }

    /// Sum of step distances from the current step to the end of the route,
    /// in meters. Recomputed on every call; zero while idle.
    pub fn remaining_distance(&self) -> f64 {
        self.route[self.current_step..]
            .iter()
            .map(|step| step.distance)
            .sum()
    }

    /// Walking time over the remaining steps, in seconds. Recomputed on
    /// every call; zero while idle.
    pub fn estimated_time(&self) -> f64 {
        self.route[self.current_step..]
            .iter()
            .map(|step| step.duration)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_route, Category, Coordinate, Directory};

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr, $eps:expr) => {
            assert!(
                (($a - $b).abs() < $eps),
                "assertion failed: {} ≈ {}",
                $a,
                $b
            )
        };
    }

    fn library() -> PointOfInterest {
        PointOfInterest {
            id: "lib".to_string(),
            name: "Library".to_string(),
            coordinate: Coordinate {
                latitude: 0.0,
                longitude: 0.005,
            },
            category: Category::Academic,
            description: String::new(),
        }
    }

    fn navigating_session() -> NavigationSession {
        let origin = Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        };
        let destination = library();
        let route = generate_route(origin, &destination, &Directory::default()).unwrap();
        let mut session = NavigationSession::new();
        session.start(destination, route);
        session
    }

    #[test]
    fn new_session_is_idle() {
        let session = NavigationSession::new();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.destination().is_none());
        assert!(session.route().is_empty());
        assert!(session.current_step().is_none());
        assert_eq!(session.remaining_distance(), 0.0);
        assert_eq!(session.estimated_time(), 0.0);
    }

    #[test]
    fn start_resets_progress() {
        let session = navigating_session();
        assert_eq!(session.status(), SessionStatus::Navigating);
        assert_eq!(session.destination().unwrap().id, "lib");
        assert_eq!(session.current_step_index(), 0);
        assert_eq!(session.current_step().unwrap().maneuver, Maneuver::Depart);
        assert_almost_eq!(session.remaining_distance(), 555.975, 0.001);
        assert_almost_eq!(session.estimated_time(), 397.125, 0.001);
    }

    #[test]
    fn advance_saturates_at_final_step() {
        let mut session = navigating_session();
        let last = session.route().len() - 1;

        for _ in 0..20 {
            session.advance();
            assert!(session.current_step_index() <= last);
        }
        assert_eq!(session.current_step_index(), last);
        assert_eq!(session.current_step().unwrap().maneuver, Maneuver::Arrive);
        // Reaching the arrive step does not stop the session.
        assert_eq!(session.status(), SessionStatus::Navigating);
    }

    #[test]
    fn remaining_metrics_never_increase() {
        let mut session = navigating_session();
        let mut previous_distance = session.remaining_distance();
        let mut previous_time = session.estimated_time();

        for _ in 0..10 {
            session.advance();
            let distance = session.remaining_distance();
            let time = session.estimated_time();
            assert!(distance <= previous_distance);
            assert!(time <= previous_time);
            previous_distance = distance;
            previous_time = time;
        }

        // At the final step only that step's own segment remains.
        assert_almost_eq!(previous_distance, 111.195, 0.001);
    }

    #[test]
    fn stop_clears_the_session() {
        let mut session = navigating_session();
        session.advance();
        session.stop();

        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.destination().is_none());
        assert!(session.route().is_empty());
        assert_eq!(session.remaining_distance(), 0.0);
    }

    #[test]
    fn restart_discards_prior_route() {
        let mut session = navigating_session();
        session.advance();
        session.advance();

        let origin = Coordinate {
            latitude: 0.0,
            longitude: 0.005,
        };
        let destination = PointOfInterest {
            id: "gate".to_string(),
            name: "Main Gate".to_string(),
            coordinate: Coordinate {
                latitude: 0.0,
                longitude: 0.006,
            },
            category: Category::Facility,
            description: String::new(),
        };
        let route = generate_route(origin, &destination, &Directory::default()).unwrap();
        session.start(destination, route);

        assert_eq!(session.current_step_index(), 0);
        assert_eq!(session.destination().unwrap().id, "gate");
        assert_eq!(session.route().len(), 3);
    }

    #[test]
    #[should_panic]
    fn advance_while_idle_is_a_contract_violation() {
        let mut session = NavigationSession::new();
        session.advance();
    }

    #[test]
    #[should_panic]
    fn stop_while_idle_is_a_contract_violation() {
        let mut session = NavigationSession::new();
        session.stop();
    }

    #[test]
    #[should_panic]
    fn start_with_empty_route_is_a_contract_violation() {
        let mut session = NavigationSession::new();
        session.start(library(), vec![]);
    }
}
