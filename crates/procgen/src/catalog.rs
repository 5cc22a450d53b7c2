//! The star catalog: a fixed set of archetypes with display color, spawn
//! weight, and whether collection grants fuel.

use glam::Vec3;
use rand::Rng;

/// Sum of all spawn weights. Kept as a constant so sampling avoids a walk
/// per draw; a test asserts it matches the catalog.
pub const TOTAL_SPAWN_WEIGHT: u32 = 101;

/// Types of stars. Weights define a discrete spawn distribution; only red
/// dwarfs refuel the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarKind {
    BlueGiant,
    WhiteDwarf,
    YellowSun,
    OrangeStar,
    RedDwarf,
}

impl StarKind {
    /// Every kind, in catalog order. Weighted sampling walks this list and
    /// falls back to the first entry.
    pub const ALL: [StarKind; 5] = [
        StarKind::BlueGiant,
        StarKind::WhiteDwarf,
        StarKind::YellowSun,
        StarKind::OrangeStar,
        StarKind::RedDwarf,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StarKind::BlueGiant => "Blue Giant",
            StarKind::WhiteDwarf => "White Dwarf",
            StarKind::YellowSun => "Yellow Sun",
            StarKind::OrangeStar => "Orange Star",
            StarKind::RedDwarf => "Red Dwarf",
        }
    }

    /// Display color (RGB, 0–1).
    pub fn color(&self) -> Vec3 {
        match self {
            StarKind::BlueGiant => Vec3::new(0.6, 0.8, 1.0),
            StarKind::WhiteDwarf => Vec3::new(0.9, 0.9, 1.0),
            StarKind::YellowSun => Vec3::new(1.0, 1.0, 0.7),
            StarKind::OrangeStar => Vec3::new(1.0, 0.85, 0.4),
            StarKind::RedDwarf => Vec3::new(1.0, 0.4, 0.2),
        }
    }

    /// Relative spawn weight within the catalog.
    pub fn spawn_weight(&self) -> u32 {
        match self {
            StarKind::BlueGiant => 9,
            StarKind::WhiteDwarf => 23,
            StarKind::YellowSun => 41,
            StarKind::OrangeStar => 26,
            StarKind::RedDwarf => 2,
        }
    }

    /// Whether collecting this star grants fuel.
    pub fn provides_fuel(&self) -> bool {
        matches!(self, StarKind::RedDwarf)
    }

    /// Draw a kind from the weighted distribution.
    pub fn sample(rng: &mut impl Rng) -> StarKind {
        let mut remaining = rng.gen::<f32>() * TOTAL_SPAWN_WEIGHT as f32;
        for kind in StarKind::ALL {
            remaining -= kind.spawn_weight() as f32;
            if remaining <= 0.0 {
                return kind;
            }
        }
        // Float round-off can leave a sliver above zero after the walk.
        StarKind::ALL[0]
    }
}
