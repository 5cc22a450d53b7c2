//! The session controller: lifecycle, the per-frame step, and terminal
//! handling. Owns every simulation subsystem; the frame driver only sees
//! [`Session::advance`] and the lifecycle methods.

use engine_core::{FrameClock, Transform};
use input::FlightControls;
use starfield::{sweep, SessionStats, StarField, StarPulse};

use crate::config::Tuning;
use crate::effects::VisualEffects;
use crate::flight::FlightState;
use crate::hud::{FinalStats, FuelBand, HudFrame, HudSink};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Built or restarted, waiting for the first start.
    Ready,
    Flying,
    Paused,
    /// Fuel ran out. Stats stay inspectable until restart.
    GameOver,
}

/// One playthrough of the starfield. All simulation state lives here; the
/// shell feeds input events between frames and calls `advance` once per
/// display refresh with a monotonic timestamp in seconds.
pub struct Session {
    tuning: Tuning,
    phase: SessionPhase,
    clock: FrameClock,
    controls: FlightControls,
    flight: FlightState,
    camera: Transform,
    field: StarField,
    pulse: StarPulse,
    stats: SessionStats,
    effects: VisualEffects,
}

impl Session {
    pub fn new(tuning: Tuning) -> Self {
        let field = StarField::new(tuning.star_count, tuning.field_radius, tuning.field_seed);
        let pulse = StarPulse::new(
            tuning.base_star_size,
            tuning.burst_scale,
            tuning.burst_shrink_speed,
        );
        let flight = FlightState::new(tuning.max_fuel);
        Self {
            phase: SessionPhase::Ready,
            clock: FrameClock::new(),
            controls: FlightControls::new(),
            flight,
            camera: Transform::default(),
            field,
            pulse,
            stats: SessionStats::default(),
            effects: VisualEffects::new(),
            tuning,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn camera(&self) -> &Transform {
        &self.camera
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn flight(&self) -> &FlightState {
        &self.flight
    }

    /// Input events land here between frames.
    pub fn controls_mut(&mut self) -> &mut FlightControls {
        &mut self.controls
    }

    /// Shared star display size for the renderer.
    pub fn star_display_size(&self) -> f32 {
        self.pulse.size()
    }

    /// Collection flash opacity for the renderer.
    pub fn flash_opacity(&self) -> f32 {
        self.effects.flash_opacity()
    }

    /// Begin flying from the start screen.
    pub fn start(&mut self, now: f64) {
        self.resume(now);
    }

    /// Resume from Ready or Paused. Rebaselines the clock and restarts the
    /// fuel-chain timer so neither sees the idle interval.
    pub fn resume(&mut self, now: f64) {
        if matches!(self.phase, SessionPhase::Ready | SessionPhase::Paused) {
            self.phase = SessionPhase::Flying;
            self.clock.rebase(now);
            self.stats.last_fuel_touch = now;
            log::info!("session running");
        }
    }

    pub fn pause(&mut self) {
        if self.phase == SessionPhase::Flying {
            self.phase = SessionPhase::Paused;
            log::info!("session paused");
        }
    }

    /// Back to a fresh session: new star layout, full tank, zeroed stats.
    /// Catalog weights and the field radius are unchanged.
    pub fn restart(&mut self) {
        self.field.reset();
        self.flight.reset(self.tuning.max_fuel);
        self.camera = Transform::default();
        self.stats.reset();
        self.pulse.reset();
        self.effects.reset();
        self.controls.reset();
        self.clock.reset();
        self.phase = SessionPhase::Ready;
        log::info!("session restarted");
    }

    /// One frame. Integrates flight, pushes HUD readouts, handles fuel
    /// exhaustion, then sweeps the star field. Outside the Flying phase
    /// the step only keeps the time baseline current.
    pub fn advance(&mut self, now: f64, hud: &mut dyn HudSink) {
        if self.controls.take_pause_request() {
            match self.phase {
                SessionPhase::Flying => self.pause(),
                SessionPhase::Ready | SessionPhase::Paused => self.resume(now),
                SessionPhase::GameOver => {}
            }
        }

        if self.phase != SessionPhase::Flying {
            // Keep the baseline current and drop stale input so neither
            // leaks into the first frame after resume.
            self.clock.rebase(now);
            let _ = self.controls.take_look_delta();
            self.controls.end_frame();
            return;
        }

        let dt = self.clock.tick(now);

        let look = self.controls.take_look_delta();
        self.flight.apply_look(look, &self.tuning);
        let distance = self
            .flight
            .advance(&mut self.camera, &self.controls, dt, &self.tuning);
        self.controls.end_frame();
        self.stats.total_distance += distance as f64;

        hud.frame(&self.hud_frame());

        if self.flight.fuel <= 0.0 {
            self.finish(hud);
            return;
        }

        let outcome = sweep(
            &mut self.field,
            &mut self.stats,
            self.camera.position,
            self.flight.speed,
            now,
            dt,
            &self.tuning.sweep_params(),
        );
        if outcome.fuel_stars > 0 {
            self.flight.grant_fuel(
                outcome.fuel_stars as f32 * self.tuning.fuel_gain,
                self.tuning.max_fuel,
            );
        }
        if outcome.any_collected() {
            self.effects.trigger_flash();
        }
        self.pulse.update(outcome.any_collected(), dt);
        self.effects.update(dt);
    }

    fn hud_frame(&self) -> HudFrame {
        let fuel_fraction = self.flight.fuel / self.tuning.max_fuel;
        HudFrame {
            speed_fraction: self.flight.speed / self.tuning.max_speed,
            fuel_fraction,
            fuel_band: FuelBand::from_fraction(fuel_fraction),
            distance: self.stats.total_distance,
            fuel_stars: self.stats.fuel_stars_collected,
        }
    }

    fn finish(&mut self, hud: &mut dyn HudSink) {
        self.phase = SessionPhase::GameOver;
        let finals = FinalStats {
            distance: self.stats.total_distance,
            fuel_stars: self.stats.fuel_stars_collected,
            score: self.stats.total_score as u64,
        };
        log::info!(
            "game over: {:.1} AU, {} fuel stars, score {}",
            self.stats.distance_au(),
            finals.fuel_stars,
            finals.score
        );
        hud.game_over(&finals);
    }
}
