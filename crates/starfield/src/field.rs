//! The star field store: fixed-size SoA arrays for every star in the
//! session, with respawn, collect, and fade operations.

use glam::Vec3;
use procgen::{point_in_sphere, point_on_sphere, star_rng, StarKind};

/// Every star in the session, stored structure-of-arrays. Slots are never
/// destroyed; collection and recycling rewrite them in place.
///
/// Invariant per slot: either collected (pushed far out of render range,
/// color zeroed) or live within the field radius of its placement origin.
pub struct StarField {
    field_seed: u64,
    radius: f32,
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    kinds: Vec<StarKind>,
    collected: Vec<bool>,
    /// Per-star respawn counter, mixed into the placement seed so each
    /// respawn of the same slot lands somewhere new.
    nonces: Vec<u32>,
}

impl StarField {
    /// Populate `count` stars inside the radius sphere about the origin.
    pub fn new(count: usize, radius: f32, field_seed: u64) -> Self {
        let mut field = Self {
            field_seed,
            radius,
            positions: vec![Vec3::ZERO; count],
            colors: vec![Vec3::ZERO; count],
            kinds: vec![StarKind::ALL[0]; count],
            collected: vec![false; count],
            nonces: vec![0; count],
        };
        for i in 0..count {
            field.place_in_volume(i);
        }
        field
    }

    /// Re-roll every star for a fresh session. Nonces are bumped rather
    /// than reset so the new layout differs from the previous one.
    pub fn reset(&mut self) {
        for i in 0..self.len() {
            self.nonces[i] += 1;
            self.place_in_volume(i);
        }
        log::info!("star field reset: {} stars re-rolled", self.len());
    }

    /// Draw position and kind for one star at its current nonce, inside
    /// the sphere about the origin. Position comes first, then kind, from
    /// the same seeded stream.
    fn place_in_volume(&mut self, index: usize) {
        let mut rng = star_rng(self.field_seed, index, self.nonces[index]);
        self.positions[index] = point_in_sphere(&mut rng, self.radius);
        let kind = StarKind::sample(&mut rng);
        self.kinds[index] = kind;
        self.colors[index] = kind.color();
        self.collected[index] = false;
    }

    /// Relocate a star that left the field: fresh kind and a point on the
    /// radius shell centered at `origin` (ahead of travel, never behind).
    /// Clears the collected flag regardless of prior state.
    pub fn respawn(&mut self, index: usize, origin: Vec3) {
        self.nonces[index] += 1;
        let mut rng = star_rng(self.field_seed, index, self.nonces[index]);
        self.positions[index] = origin + point_on_sphere(&mut rng, self.radius);
        let kind = StarKind::sample(&mut rng);
        self.kinds[index] = kind;
        self.colors[index] = kind.color();
        self.collected[index] = false;
    }

    /// Mark a star collected: push it `push_distance` along each axis from
    /// the camera (outside render range) and zero its displayed color. The
    /// slot stays allocated and recycles once it exceeds the field radius.
    pub fn mark_collected(&mut self, index: usize, camera_pos: Vec3, push_distance: f32) {
        self.collected[index] = true;
        self.positions[index] = camera_pos + Vec3::splat(push_distance);
        self.colors[index] = Vec3::ZERO;
    }

    /// Raise a live star's displayed color toward its kind color at `rate`
    /// per second, clamped componentwise (never overshoots).
    pub fn fade_in(&mut self, index: usize, dt: f32, rate: f32) {
        if self.collected[index] {
            return;
        }
        let target = self.kinds[index].color();
        self.colors[index] = (self.colors[index] + Vec3::splat(dt * rate)).min(target);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn position(&self, index: usize) -> Vec3 {
        self.positions[index]
    }

    pub fn color(&self, index: usize) -> Vec3 {
        self.colors[index]
    }

    pub fn kind(&self, index: usize) -> StarKind {
        self.kinds[index]
    }

    pub fn is_collected(&self, index: usize) -> bool {
        self.collected[index]
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }
}
