//! Scenario files: named shapes plus the queries to run against them

use std::collections::BTreeMap;

use collision2d::config::{Config, ConfigError};
use collision2d::prelude::*;
use serde::{Deserialize, Serialize};

/// Errors raised while running a probe
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    /// Scenario could not be loaded
    #[error("Scenario error: {0}")]
    Config(#[from] ConfigError),

    /// A query names a shape the scenario does not define
    #[error("Query {query} references unknown shape '{name}'")]
    UnknownShape {
        /// Which query failed, e.g. "overlap #2"
        query: String,
        /// The missing shape name
        name: String,
    },
}

/// Overlap test between two named shapes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapQuery {
    /// First shape
    pub a: String,
    /// Second shape
    pub b: String,
}

/// Point containment test against a named shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointQuery {
    /// Shape to test
    pub shape: String,
    /// Point to test
    pub point: Vec2,
}

/// Ray cast against a named shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RayQuery {
    /// Shape to cast against
    pub target: String,
    /// The ray
    pub ray: Ray,
}

/// A probe scenario as loaded from TOML or RON
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Label used in log output
    #[serde(default)]
    pub name: String,
    /// Shapes by name
    #[serde(default)]
    pub shapes: BTreeMap<String, Shape>,
    /// Overlap queries
    #[serde(default)]
    pub overlaps: Vec<OverlapQuery>,
    /// Point queries
    #[serde(default)]
    pub points: Vec<PointQuery>,
    /// Ray queries
    #[serde(default)]
    pub rays: Vec<RayQuery>,
}

impl Config for Scenario {}

/// Outcome of a single query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Overlap or point query result
    Contact(bool),
    /// Ray query result
    Ray(Option<RayHit>),
}

/// Tallies for a full scenario run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProbeReport {
    /// Every outcome in evaluation order: overlaps, then points, then rays
    pub outcomes: Vec<Outcome>,
    /// Overlap and point queries that reported contact
    pub contacts: usize,
    /// Ray queries that hit
    pub hits: usize,
}

impl Scenario {
    /// Load a scenario file, picking TOML or RON by extension
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ProbeError> {
        Ok(Self::load_from_file(path)?)
    }

    fn shape(&self, query: impl FnOnce() -> String, name: &str) -> Result<&Shape, ProbeError> {
        self.shapes.get(name).ok_or_else(|| ProbeError::UnknownShape {
            query: query(),
            name: name.to_string(),
        })
    }

    /// Evaluate every query, logging each result
    ///
    /// All names are resolved before any query runs, so a typo fails the
    /// whole scenario rather than producing a partial report.
    pub fn evaluate(&self) -> Result<ProbeReport, ProbeError> {
        let mut overlaps = Vec::with_capacity(self.overlaps.len());
        for (i, query) in self.overlaps.iter().enumerate() {
            let label = || format!("overlap #{i}");
            overlaps.push((query, self.shape(label, &query.a)?, self.shape(label, &query.b)?));
        }
        let mut points = Vec::with_capacity(self.points.len());
        for (i, query) in self.points.iter().enumerate() {
            points.push((query, self.shape(|| format!("point #{i}"), &query.shape)?));
        }
        let mut rays = Vec::with_capacity(self.rays.len());
        for (i, query) in self.rays.iter().enumerate() {
            rays.push((query, self.shape(|| format!("ray #{i}"), &query.target)?));
        }

        let mut report = ProbeReport::default();

        for (query, a, b) in overlaps {
            let colliding = a.intersects(b);
            log::info!(
                "{} '{}' vs {} '{}': {}",
                a.kind(),
                query.a,
                b.kind(),
                query.b,
                if colliding { "colliding" } else { "clear" }
            );
            report.contacts += usize::from(colliding);
            report.outcomes.push(Outcome::Contact(colliding));
        }

        for (query, shape) in points {
            let inside = shape.collide_point(query.point);
            log::info!(
                "point ({}, {}) in {} '{}': {}",
                query.point.x,
                query.point.y,
                shape.kind(),
                query.shape,
                inside
            );
            report.contacts += usize::from(inside);
            report.outcomes.push(Outcome::Contact(inside));
        }

        for (query, shape) in rays {
            let hit = query.ray.cast(shape);
            match hit {
                Some(hit) if hit.origin_inside => log::info!(
                    "ray into '{}': origin inside, reported at ({}, {}) t = {}",
                    query.target,
                    hit.point.x,
                    hit.point.y,
                    hit.distance
                ),
                Some(hit) => log::info!(
                    "ray into '{}': hit at ({}, {}) t = {}",
                    query.target,
                    hit.point.x,
                    hit.point.y,
                    hit.distance
                ),
                None => log::info!("ray into '{}': miss", query.target),
            }
            report.hits += usize::from(hit.is_some());
            report.outcomes.push(Outcome::Ray(hit));
        }

        Ok(report)
    }
}
