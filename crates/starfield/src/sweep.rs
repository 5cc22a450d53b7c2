//! Per-frame proximity pass over the star field: collection, recycling of
//! stars that drifted out of range, and color fade, plus the shared
//! display-size pulse.

use crate::field::StarField;
use glam::Vec3;

/// Running session totals. The sweep is the sole writer of the score,
/// counter, and chain-timer fields; the session accrues distance from the
/// integrator's motion.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    /// Total distance flown, in world units.
    pub total_distance: f64,
    /// Fuel stars collected this session.
    pub fuel_stars_collected: u32,
    /// Score accumulated from fuel-star chains.
    pub total_score: f64,
    /// Timestamp (seconds) of the last fuel-star touch. Chain scoring
    /// divides by the gap since this, so fast chains score higher.
    pub last_fuel_touch: f64,
}

impl SessionStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Display distance in AU (display-only scaling of world units).
    pub fn distance_au(&self) -> f64 {
        self.total_distance / 1000.0
    }
}

/// Tunables the sweep reads each frame.
#[derive(Debug, Clone, Copy)]
pub struct SweepParams {
    /// Camera-to-star distance below which an uncollected star collects.
    pub collection_radius: f32,
    /// Beyond this distance from the camera a star recycles ahead.
    pub field_radius: f32,
    /// Offset pushing collected stars out of render range.
    pub push_distance: f32,
    /// Color fade-in rate, per second.
    pub fade_rate: f32,
    /// Score scale for fuel-star chains.
    pub chain_score_scale: f64,
}

/// What one sweep changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepOutcome {
    /// Stars collected this frame, any kind.
    pub collected: u32,
    /// How many of those grant fuel. The session applies the grant so the
    /// integrator keeps sole ownership of the flight state.
    pub fuel_stars: u32,
}

impl SweepOutcome {
    pub fn any_collected(&self) -> bool {
        self.collected > 0
    }
}

/// Run the proximity pass for one frame. `now` is the frame timestamp in
/// seconds, `speed` the current flight speed (chain scoring reads it).
pub fn sweep(
    field: &mut StarField,
    stats: &mut SessionStats,
    camera_pos: Vec3,
    speed: f32,
    now: f64,
    dt: f32,
    params: &SweepParams,
) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();

    for i in 0..field.len() {
        let dist = camera_pos.distance(field.position(i));

        if dist < params.collection_radius {
            if !field.is_collected(i) {
                let kind = field.kind(i);
                field.mark_collected(i, camera_pos, params.push_distance);
                outcome.collected += 1;

                if kind.provides_fuel() {
                    outcome.fuel_stars += 1;
                    stats.fuel_stars_collected += 1;
                    let gap = now - stats.last_fuel_touch;
                    if gap > 0.0 {
                        stats.total_score += speed as f64 / gap * params.chain_score_scale;
                    }
                    stats.last_fuel_touch = now;
                }
                log::debug!("collected {} (star {})", kind.name(), i);
            }
        } else if dist > params.field_radius {
            field.respawn(i, camera_pos);
        } else if !field.is_collected(i) {
            field.fade_in(i, dt, params.fade_rate);
        }
    }

    outcome
}

/// The shared display size for every star: bursts to a multiple of the
/// base size on any collection, then decays linearly back. One scalar for
/// the whole field, not per star.
#[derive(Debug, Clone, Copy)]
pub struct StarPulse {
    size: f32,
    base_size: f32,
    burst_scale: f32,
    shrink_speed: f32,
}

impl StarPulse {
    pub fn new(base_size: f32, burst_scale: f32, shrink_speed: f32) -> Self {
        Self {
            size: base_size,
            base_size,
            burst_scale,
            shrink_speed,
        }
    }

    /// Advance one frame: burst if anything was collected, else shrink.
    pub fn update(&mut self, collected_any: bool, dt: f32) {
        if collected_any {
            self.size = self.base_size * self.burst_scale;
        } else {
            self.size = (self.size - dt * self.shrink_speed).max(self.base_size);
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn reset(&mut self) {
        self.size = self.base_size;
    }
}
