use crate::constants::DEFAULT_DOODLE_COUNT;
use crate::doodle::Doodle;
use crate::shapes;
use crate::surface::DrawingSurface;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Options used when the field is created from the page.
///
/// - `count`: number of doodles, fixed for the field's lifetime
/// - `seed`: when set, doodle generation is reproducible
#[derive(Clone, Debug)]
pub struct FieldOptions {
    pub count: usize,
    pub seed: Option<u64>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_DOODLE_COUNT,
            seed: None,
        }
    }
}

impl FieldOptions {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Decorative layer of floating doodles rendered onto a [`DrawingSurface`].
///
/// The doodle set is generated once; frames only advance rotation angles.
/// Resizing touches the surface and nothing else.
pub struct DoodleField<S: DrawingSurface> {
    surface: S,
    doodles: Vec<Doodle>,
    frames: u64,
}

impl<S: DrawingSurface> DoodleField<S> {
    /// Size `surface` to the viewport and scatter `count` random doodles
    /// across it.
    pub fn new<R: Rng + ?Sized>(
        mut surface: S,
        viewport: (u32, u32),
        count: usize,
        rng: &mut R,
    ) -> Self {
        surface.set_size(viewport.0, viewport.1);
        let (w, h) = (surface.width() as f64, surface.height() as f64);
        let doodles = (0..count).map(|_| Doodle::random(rng, w, h)).collect();
        Self::from_doodles(surface, doodles)
    }

    /// Build a field around an explicit doodle set.
    pub fn from_doodles(surface: S, doodles: Vec<Doodle>) -> Self {
        log::debug!(
            "[doodles] field ready: {} doodles on {}x{}",
            doodles.len(),
            surface.width(),
            surface.height()
        );
        Self {
            surface,
            doodles,
            frames: 0,
        }
    }

    pub fn doodles(&self) -> &[Doodle] {
        &self.doodles
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Follow a viewport change. Doodles keep their positions even if they
    /// now fall outside the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.set_size(width, height);
        log::debug!("[doodles] surface resized to {}x{}", width, height);
    }

    /// Clear and redraw every doodle for time `now_sec` (seconds).
    pub fn render_frame(&mut self, now_sec: f64) {
        let surface = &mut self.surface;
        surface.clear();
        for doodle in self.doodles.iter_mut() {
            let at = doodle.drawn_position(now_sec);
            doodle.advance_rotation();
            let (kind, size, rotation) = (doodle.kind, doodle.size, doodle.rotation_angle);
            surface.with_alpha(doodle.opacity, |s| {
                shapes::draw_doodle(s, kind, at, size, rotation);
            });
        }
        surface.set_global_alpha(1.0);
        self.frames += 1;
    }
}
