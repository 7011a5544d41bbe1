//! Airports connected by outbound flights.
//!
//! Structurally a vertex graph whose labels are airport codes, with a code
//! index so callers can address airports by name while building routes.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

use super::adjacency::Adjacency;

/// Handle to an airport inside a [`FlightNetwork`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportId(usize);

impl AirportId {
    /// Returns the arena slot of this airport.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AirportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An airport and its outbound flights, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    code: String,
    outbound_flights: Vec<AirportId>,
}

impl Airport {
    /// Returns the airport code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the destinations of this airport's outbound flights.
    #[must_use]
    pub fn outbound_flights(&self) -> &[AirportId] {
        &self.outbound_flights
    }
}

/// In-memory flight network with O(1) lookup by code.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::FlightNetwork;
///
/// let mut network = FlightNetwork::new();
/// let jfk = network.add_airport("JFK").unwrap();
/// let lhr = network.add_airport("LHR").unwrap();
/// network.add_flight(jfk, lhr).unwrap();
///
/// assert_eq!(network.find("LHR"), Some(lhr));
/// assert_eq!(network[jfk].outbound_flights(), &[lhr]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    airports: Vec<Airport>,
    by_code: FxHashMap<String, AirportId>,
}

impl FlightNetwork {
    /// Creates an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an airport. Surrounding whitespace in the code is ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAirportCode` for blank codes and
    /// `Error::AirportExists` if the code is already registered.
    pub fn add_airport(&mut self, code: &str) -> Result<AirportId> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidAirportCode(code.to_string()));
        }
        if self.by_code.contains_key(trimmed) {
            tracing::warn!(code = trimmed, "Airport registered twice");
            return Err(Error::AirportExists(trimmed.to_string()));
        }

        let id = AirportId(self.airports.len());
        self.airports.push(Airport {
            code: trimmed.to_string(),
            outbound_flights: Vec::new(),
        });
        self.by_code.insert(trimmed.to_string(), id);
        Ok(id)
    }

    /// Adds a flight from one airport to another.
    ///
    /// # Errors
    ///
    /// Returns `Error::AirportNotFound` if either handle is not part of this network.
    pub fn add_flight(&mut self, from: AirportId, to: AirportId) -> Result<()> {
        if !self.contains(to) {
            tracing::warn!(from = %from, to = %to, "Flight destination is not in the network");
            return Err(Error::AirportNotFound(to.to_string()));
        }
        let airport = self.airports.get_mut(from.0).ok_or_else(|| {
            tracing::warn!(from = %from, to = %to, "Flight origin is not in the network");
            Error::AirportNotFound(from.to_string())
        })?;
        airport.outbound_flights.push(to);
        Ok(())
    }

    /// Adds a flight between two airports addressed by code.
    ///
    /// # Errors
    ///
    /// Returns `Error::AirportNotFound` naming the first unknown code.
    pub fn add_route(&mut self, from: &str, to: &str) -> Result<()> {
        let source = self
            .find(from)
            .ok_or_else(|| Error::AirportNotFound(from.trim().to_string()))?;
        let target = self
            .find(to)
            .ok_or_else(|| Error::AirportNotFound(to.trim().to_string()))?;
        self.add_flight(source, target)
    }

    /// Looks up an airport by code.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<AirportId> {
        self.by_code.get(code.trim()).copied()
    }

    /// Returns true if the handle belongs to this network.
    #[must_use]
    pub fn contains(&self, id: AirportId) -> bool {
        id.0 < self.airports.len()
    }

    /// Gets an airport by handle.
    #[must_use]
    pub fn airport(&self, id: AirportId) -> Option<&Airport> {
        self.airports.get(id.0)
    }

    /// Returns the number of airports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Returns true if no airport is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Returns the total number of flights.
    #[must_use]
    pub fn flight_count(&self) -> usize {
        self.airports.iter().map(|a| a.outbound_flights.len()).sum()
    }
}

impl std::ops::Index<AirportId> for FlightNetwork {
    type Output = Airport;

    fn index(&self, id: AirportId) -> &Airport {
        &self.airports[id.0]
    }
}

impl Adjacency for FlightNetwork {
    type Node = AirportId;

    fn successors(&self, node: &AirportId) -> &[AirportId] {
        self.airport(*node).map_or(&[], Airport::outbound_flights)
    }

    fn contains_node(&self, node: &AirportId) -> bool {
        self.contains(*node)
    }
}
