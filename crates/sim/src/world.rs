//! The simulated field: one boy walking in a circle and a pack of zombies.
use std::f32::consts::TAU;

use behavior_tree::Status;
use zombie::error::Result;
use zombie::{Boy, Point, Zombie, ZombieError, load_def, presets, registry};

use crate::config::{BoyConfig, SimConfig};

/// Count of tree outcomes for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub success: usize,
    pub failure: usize,
    pub running: usize,
}

impl Tally {
    fn record(&mut self, status: Status) {
        match status {
            Status::Success => self.success += 1,
            Status::Failure => self.failure += 1,
            Status::Running => self.running += 1,
        }
    }
}

pub struct World {
    boy: Boy,
    walk: BoyConfig,
    zombies: Vec<Zombie>,
    frame: u64,
    elapsed: f32,
}

impl World {
    /// Spawns `config.zombies` zombies, zombie `i` seeded with `seed + i`.
    ///
    /// Every zombie gets its own tree, built from `config.tree_file` when
    /// set and from the named preset otherwise.
    pub fn new(config: &SimConfig) -> Result<Self> {
        let mut zombies = Vec::with_capacity(config.zombies);

        if let Some(path) = &config.tree_file {
            let def = load_def(path)?;
            let registry = registry();
            for i in 0..config.zombies {
                let tree = registry.build_tree(&def)?;
                zombies.push(Zombie::with_tree(seed_for(config.seed, i), None, tree));
            }
        } else {
            for i in 0..config.zombies {
                let brain = presets::by_name(&config.preset)
                    .ok_or_else(|| ZombieError::UnknownPreset(config.preset.clone()))?;
                zombies.push(Zombie::new(seed_for(config.seed, i), None, brain)?);
            }
        }

        let walk = config.boy.clone();
        let boy = Boy::new(orbit_point(&walk, 0.0), walk.balls);
        tracing::info!(
            zombies = zombies.len(),
            tree = config
                .tree_file
                .as_ref()
                .map_or(config.preset.clone(), |p| p.display().to_string()),
            "world ready"
        );

        Ok(Self {
            boy,
            walk,
            zombies,
            frame: 0,
            elapsed: 0.0,
        })
    }

    /// Moves the boy along his walk, then updates every zombie once.
    pub fn step(&mut self, dt: f32) -> Tally {
        self.frame += 1;
        self.elapsed += dt;
        self.boy.position = orbit_point(&self.walk, self.elapsed);

        let mut tally = Tally::default();
        for zombie in &mut self.zombies {
            tally.record(zombie.update(&self.boy, dt));
        }
        tally
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn boy(&self) -> &Boy {
        &self.boy
    }

    pub fn zombies(&self) -> &[Zombie] {
        &self.zombies
    }
}

fn seed_for(base: u64, index: usize) -> u64 {
    base.wrapping_add(index as u64)
}

fn orbit_point(walk: &BoyConfig, elapsed: f32) -> Point {
    if walk.orbit == 0.0 || walk.lap_time <= 0.0 {
        return walk.center;
    }
    let angle = TAU * elapsed / walk.lap_time;
    Point::new(
        walk.center.x + walk.orbit * angle.cos(),
        walk.center.y + walk.orbit * angle.sin(),
    )
}
