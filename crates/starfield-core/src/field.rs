//! The marker collection owned by one decorator instance.

use crate::config::{ConfigError, StarFieldConfig};
use crate::marker::Marker;
use crate::physics::{self, StepOutcome};
use crate::placement::PlacementEngine;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub moved: usize,
    pub settled: usize,
}

pub struct StarField {
    config: StarFieldConfig,
    regions: FnvHashMap<String, Vec<Marker>>,
    next_index: usize,
    rng: StdRng,
}

impl StarField {
    /// Field with entropy-seeded placement; every page load looks different.
    pub fn new(config: StarFieldConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: StarFieldConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: StarFieldConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            regions: FnvHashMap::default(),
            next_index: 0,
            rng,
        })
    }

    pub fn config(&self) -> &StarFieldConfig {
        &self.config
    }

    /// Index the next placed marker will receive.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Clear and repopulate one region, continuing the global index sequence.
    /// Returns `None` (leaving the index untouched) for unknown regions.
    pub fn populate(&mut self, key: &str) -> Option<&[Marker]> {
        let spec = self.config.region(key)?.clone();
        self.regions.remove(key);
        let engine = PlacementEngine::new(
            &self.config.palette,
            self.config.max_attempts,
            self.config.viewport,
        );
        let placement = engine.place(&mut self.rng, &spec, self.next_index);
        self.next_index = placement.next_index;
        let markers = self.regions.entry(spec.key).or_default();
        *markers = placement.markers;
        Some(markers.as_slice())
    }

    /// Drop every marker and restart numbering at zero.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.next_index = 0;
    }

    /// Clear the field and swap in a new configuration (e.g. after the
    /// viewport class changed).
    pub fn reconfigure(&mut self, config: StarFieldConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.clear();
        Ok(())
    }

    pub fn region(&self, key: &str) -> &[Marker] {
        self.regions.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.regions.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.regions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply pointer repulsion to every marker whose rendered center the host
    /// can resolve. Returns how many markers were pushed.
    pub fn pointer_moved<F>(&mut self, pointer: Vec2, mut center_of: F) -> usize
    where
        F: FnMut(&Marker) -> Option<Vec2>,
    {
        let params = self.config.physics;
        let mut pushed = 0;
        for marker in self.regions.values_mut().flatten() {
            let Some(center) = center_of(marker) else {
                continue;
            };
            if physics::apply_pointer(&mut marker.body, pointer, center, &params) {
                pushed += 1;
            }
        }
        pushed
    }

    /// Advance every displaced marker one step, calling `on_moved` for each
    /// marker whose offset changed this tick.
    pub fn tick_with<F>(&mut self, mut on_moved: F) -> TickSummary
    where
        F: FnMut(&Marker),
    {
        let params = self.config.physics;
        let mut summary = TickSummary::default();
        for marker in self.regions.values_mut().flatten() {
            match physics::step(&mut marker.body, &params) {
                StepOutcome::Idle => continue,
                StepOutcome::Moved => summary.moved += 1,
                StepOutcome::Settled => summary.settled += 1,
            }
            on_moved(marker);
        }
        summary
    }

    pub fn tick(&mut self) -> TickSummary {
        self.tick_with(|_| {})
    }
}
