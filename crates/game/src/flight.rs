//! Flight dynamics: orientation, speed, and fuel advanced once per frame
//! from the control state.

use engine_core::Transform;
use glam::{Quat, Vec2, Vec3};
use input::{Control, FlightControls};

use crate::config::Tuning;

/// Roll velocity below this snaps to zero while damping.
const ROLL_EPSILON: f32 = 1e-4;
/// Per-frame growth factor of an active roll.
const ROLL_RAMP: f32 = 1.05;
/// Per-frame decay factor of a released roll.
const ROLL_DAMPING: f32 = 0.9;

/// The craft: orientation, speed, fuel, and the angular velocity filters.
/// The integrator is the only writer; fuel grants come back through
/// [`FlightState::grant_fuel`].
#[derive(Debug, Clone, Copy)]
pub struct FlightState {
    pub orientation: Quat,
    pub speed: f32,
    pub fuel: f32,
    pub roll_velocity: f32,
    pub yaw_velocity: f32,
    pub pitch_velocity: f32,
}

impl FlightState {
    /// A craft at rest with a full tank.
    pub fn new(max_fuel: f32) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            speed: 0.0,
            fuel: max_fuel,
            roll_velocity: 0.0,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }

    pub fn reset(&mut self, max_fuel: f32) {
        *self = Self::new(max_fuel);
    }

    /// Feed one frame of pointer motion into the yaw/pitch filters.
    pub fn apply_look(&mut self, look: Vec2, tuning: &Tuning) {
        self.yaw_velocity -= look.x * tuning.yaw_speed;
        self.pitch_velocity -= look.y * tuning.pitch_speed;
    }

    /// Advance one frame. Returns the distance moved, for stats accrual.
    ///
    /// Rotation composes roll about the current forward axis, then pitch
    /// about the current right axis, then yaw about the current up axis,
    /// each premultiplied onto the running orientation. The order is part
    /// of the flight feel and must not be rearranged. Axes come from the
    /// orientation before this frame's update.
    pub fn advance(
        &mut self,
        camera: &mut Transform,
        controls: &FlightControls,
        dt: f32,
        tuning: &Tuning,
    ) -> f32 {
        let up = (self.orientation * Vec3::Y).normalize();
        let right = (self.orientation * Vec3::X).normalize();
        let forward = (self.orientation * -Vec3::Z).normalize();

        self.update_roll(controls, tuning);

        if self.roll_velocity != 0.0 {
            self.orientation =
                Quat::from_axis_angle(forward, self.roll_velocity * dt) * self.orientation;
        }
        self.orientation =
            Quat::from_axis_angle(right, self.pitch_velocity * dt) * self.orientation;
        self.orientation =
            (Quat::from_axis_angle(up, self.yaw_velocity * dt) * self.orientation).normalize();

        // First-order filters: the pointer writes velocity directly and it
        // bleeds off every frame.
        self.yaw_velocity *= tuning.control_damping;
        self.pitch_velocity *= tuning.control_damping;

        if controls.is_held(Control::Accelerate) {
            self.speed = (self.speed.max(1.0) * tuning.acceleration).min(tuning.max_speed);
        }
        if controls.is_held(Control::Decelerate) {
            self.speed /= tuning.acceleration;
            if self.speed < 1.0 {
                self.speed = 0.0;
            }
        }

        camera.rotation = self.orientation;
        let distance = self.speed * dt;
        camera.position += camera.forward() * distance;

        if self.speed > 0.0 && dt > 0.0 {
            // Drain rides speed/dt; the handling is tuned around this
            // exact law, frame-rate coupling included.
            self.fuel = (self.fuel - tuning.fuel_depletion * (self.speed / dt)).max(0.0);
        }

        distance
    }

    /// Roll regimes: damp when released, ramp while held (with an
    /// instantaneous direction flip when the active key opposes the
    /// current spin), clamp at the cap. Left is checked before right, so
    /// conflicting keys resolve leftward.
    fn update_roll(&mut self, controls: &FlightControls, tuning: &Tuning) {
        if controls.just_pressed(Control::RollLeft) {
            self.roll_velocity = -tuning.initial_roll_speed;
        }
        if controls.just_pressed(Control::RollRight) {
            self.roll_velocity = tuning.initial_roll_speed;
        }

        let left = controls.is_held(Control::RollLeft);
        let right = controls.is_held(Control::RollRight);

        if controls.roll_released() {
            self.roll_velocity *= ROLL_DAMPING;
            if self.roll_velocity.abs() < ROLL_EPSILON {
                self.roll_velocity = 0.0;
            }
            return;
        }

        if left && self.roll_velocity <= 0.0 {
            self.roll_velocity *= ROLL_RAMP;
        } else if right && self.roll_velocity >= 0.0 {
            self.roll_velocity *= ROLL_RAMP;
        } else if left && self.roll_velocity > 0.0 {
            self.roll_velocity = -tuning.initial_roll_speed;
        } else if right && self.roll_velocity < 0.0 {
            self.roll_velocity = tuning.initial_roll_speed;
        }
        self.roll_velocity = self
            .roll_velocity
            .clamp(-tuning.max_roll_velocity, tuning.max_roll_velocity);
    }

    /// Apply a fuel grant, clamped to capacity.
    pub fn grant_fuel(&mut self, amount: f32, max_fuel: f32) {
        self.fuel = (self.fuel + amount).min(max_fuel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn setup() -> (FlightState, Transform, FlightControls, Tuning) {
        let tuning = Tuning::default();
        (
            FlightState::new(tuning.max_fuel),
            Transform::default(),
            FlightControls::new(),
            tuning,
        )
    }

    fn hold(controls: &mut FlightControls, control: Control) {
        controls.process_control(control, true);
    }

    fn step(
        flight: &mut FlightState,
        camera: &mut Transform,
        controls: &mut FlightControls,
        tuning: &Tuning,
    ) -> f32 {
        let d = flight.advance(camera, controls, DT, tuning);
        controls.end_frame();
        d
    }

    #[test]
    fn accelerate_ramps_monotonically_to_max() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        hold(&mut controls, Control::Accelerate);
        let mut last = 0.0;
        for _ in 0..1200 {
            step(&mut flight, &mut camera, &mut controls, &tuning);
            assert!(flight.speed >= last);
            assert!(flight.speed <= tuning.max_speed);
            last = flight.speed;
        }
        assert_eq!(flight.speed, tuning.max_speed);
    }

    #[test]
    fn first_throttle_frame_matches_the_ramp_law() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        hold(&mut controls, Control::Accelerate);
        step(&mut flight, &mut camera, &mut controls, &tuning);
        // speed = max(0, 1) * 1.02 on the first frame
        assert!((flight.speed - 1.02).abs() < 1e-6);
    }

    #[test]
    fn decelerate_snaps_to_rest_below_one() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        flight.speed = 1.5;
        hold(&mut controls, Control::Decelerate);
        for _ in 0..40 {
            step(&mut flight, &mut camera, &mut controls, &tuning);
        }
        assert_eq!(flight.speed, 0.0);
    }

    #[test]
    fn roll_ramps_and_clamps_at_the_cap() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        hold(&mut controls, Control::RollRight);
        for _ in 0..600 {
            step(&mut flight, &mut camera, &mut controls, &tuning);
            assert!(flight.roll_velocity.abs() <= tuning.max_roll_velocity + 1e-6);
        }
        assert!((flight.roll_velocity - tuning.max_roll_velocity).abs() < 1e-4);
    }

    #[test]
    fn opposing_roll_key_flips_direction_instantly() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        hold(&mut controls, Control::RollRight);
        for _ in 0..30 {
            step(&mut flight, &mut camera, &mut controls, &tuning);
        }
        assert!(flight.roll_velocity > 0.0);

        // Keep right held and press left: left wins and the spin flips
        // without decelerating through zero.
        hold(&mut controls, Control::RollLeft);
        step(&mut flight, &mut camera, &mut controls, &tuning);
        assert!(flight.roll_velocity < 0.0);
        assert!(flight.roll_velocity.abs() <= tuning.initial_roll_speed * ROLL_RAMP + 1e-6);
    }

    #[test]
    fn releasing_the_opposing_key_returns_the_spin() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        hold(&mut controls, Control::RollRight);
        for _ in 0..30 {
            step(&mut flight, &mut camera, &mut controls, &tuning);
        }
        hold(&mut controls, Control::RollLeft);
        step(&mut flight, &mut camera, &mut controls, &tuning);
        assert!(flight.roll_velocity < 0.0);

        // Let go of left with right still held: the spin flips back to
        // the initial speed rightward, not decelerating through zero.
        controls.process_control(Control::RollLeft, false);
        step(&mut flight, &mut camera, &mut controls, &tuning);
        assert!(flight.roll_velocity > 0.0);
        assert!(flight.roll_velocity <= tuning.initial_roll_speed * ROLL_RAMP + 1e-6);
    }

    #[test]
    fn released_roll_damps_and_snaps_to_zero() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        hold(&mut controls, Control::RollLeft);
        for _ in 0..10 {
            step(&mut flight, &mut camera, &mut controls, &tuning);
        }
        controls.process_control(Control::RollLeft, false);
        for _ in 0..200 {
            step(&mut flight, &mut camera, &mut controls, &tuning);
        }
        assert_eq!(flight.roll_velocity, 0.0);
    }

    #[test]
    fn look_impulses_decay_through_the_damping_filter() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        flight.apply_look(Vec2::new(10.0, -4.0), &tuning);
        let yaw0 = flight.yaw_velocity;
        let pitch0 = flight.pitch_velocity;
        assert!(yaw0 < 0.0 && pitch0 > 0.0);

        step(&mut flight, &mut camera, &mut controls, &tuning);
        assert!((flight.yaw_velocity - yaw0 * tuning.control_damping).abs() < 1e-7);
        assert!((flight.pitch_velocity - pitch0 * tuning.control_damping).abs() < 1e-7);
    }

    #[test]
    fn motion_follows_the_forward_axis() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        flight.speed = 600.0;
        let d = step(&mut flight, &mut camera, &mut controls, &tuning);
        assert!((d - 10.0).abs() < 1e-4);
        assert!((camera.position - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-4);
    }

    #[test]
    fn fuel_depletes_with_speed_and_floors_at_zero() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        flight.speed = 2000.0;
        let before = flight.fuel;
        step(&mut flight, &mut camera, &mut controls, &tuning);
        let expected = tuning.fuel_depletion * (2000.0 / DT);
        assert!((before - flight.fuel - expected).abs() < 1e-4);

        flight.fuel = expected * 0.5;
        step(&mut flight, &mut camera, &mut controls, &tuning);
        assert_eq!(flight.fuel, 0.0);
    }

    #[test]
    fn fuel_is_untouched_at_rest() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        for _ in 0..100 {
            step(&mut flight, &mut camera, &mut controls, &tuning);
        }
        assert_eq!(flight.fuel, tuning.max_fuel);
    }

    #[test]
    fn grant_fuel_clamps_at_capacity() {
        let (mut flight, _, _, tuning) = setup();
        flight.fuel = 95.0;
        flight.grant_fuel(10.0, tuning.max_fuel);
        assert_eq!(flight.fuel, tuning.max_fuel);
    }

    #[test]
    fn orientation_stays_unit_length() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        hold(&mut controls, Control::RollLeft);
        flight.apply_look(Vec2::new(300.0, 150.0), &tuning);
        for _ in 0..2000 {
            step(&mut flight, &mut camera, &mut controls, &tuning);
        }
        assert!((flight.orientation.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn pure_roll_keeps_the_forward_axis() {
        let (mut flight, mut camera, mut controls, tuning) = setup();
        hold(&mut controls, Control::RollRight);
        for _ in 0..120 {
            step(&mut flight, &mut camera, &mut controls, &tuning);
        }
        // Rolling about forward must not change where the nose points.
        assert!((camera.forward() - -Vec3::Z).length() < 1e-3);
    }
}
