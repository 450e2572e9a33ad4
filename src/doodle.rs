use crate::constants::*;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Shape variant a doodle renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DoodleKind {
    Reel,
    Popcorn,
    Ticket,
    Clapperboard,
    Star,
    Handset,
}

impl DoodleKind {
    pub const ALL: [DoodleKind; 6] = [
        DoodleKind::Reel,
        DoodleKind::Popcorn,
        DoodleKind::Ticket,
        DoodleKind::Clapperboard,
        DoodleKind::Star,
        DoodleKind::Handset,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// One floating particle of the doodle field.
///
/// Everything except `rotation_angle` is fixed at creation. The angle is
/// advanced once per rendered frame by `rotation_speed`.
#[derive(Clone, Debug, PartialEq)]
pub struct Doodle {
    pub position: DVec2,
    pub size: f64,
    pub kind: DoodleKind,
    pub rotation_angle: f64,
    pub rotation_speed: f64,
    pub float_phase_offset: f64,
    pub float_speed: f64,
    pub opacity: f64,
}

impl Doodle {
    /// Draw a doodle with every parameter uniformly randomized inside a
    /// `width` x `height` area.
    ///
    /// Values are `rng.gen::<f64>() * span` rather than `gen_range` so an
    /// empty (zero-sized) surface still yields doodles at the origin.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let x = rng.gen::<f64>() * width;
        let y = rng.gen::<f64>() * height;
        let size = DOODLE_SIZE_MIN + rng.gen::<f64>() * DOODLE_SIZE_SPAN;
        let kind = DoodleKind::random(rng);
        let rotation_angle = rng.gen::<f64>() * TAU;
        let rotation_speed = (rng.gen::<f64>() - 0.5) * ROTATION_SPEED_SPAN;
        let float_phase_offset = rng.gen::<f64>() * TAU;
        let float_speed = FLOAT_SPEED_MIN + rng.gen::<f64>() * FLOAT_SPEED_SPAN;
        let opacity = OPACITY_MIN + rng.gen::<f64>() * OPACITY_SPAN;
        Self {
            position: DVec2::new(x, y),
            size,
            kind,
            rotation_angle,
            rotation_speed,
            float_phase_offset,
            float_speed,
            opacity,
        }
    }

    /// Vertical floating offset at `now_sec`.
    #[inline]
    pub fn floating_offset(&self, now_sec: f64) -> f64 {
        (now_sec * self.float_speed + self.float_phase_offset).sin() * FLOAT_AMPLITUDE
    }

    /// Where the doodle is drawn at `now_sec`. X never moves.
    #[inline]
    pub fn drawn_position(&self, now_sec: f64) -> DVec2 {
        DVec2::new(self.position.x, self.position.y + self.floating_offset(now_sec))
    }

    #[inline]
    pub fn advance_rotation(&mut self) {
        self.rotation_angle += self.rotation_speed;
    }
}
