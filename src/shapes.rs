//! Stroke routines for the six doodle kinds.
//!
//! Every routine draws around the local origin after translating to `center`
//! and rotating by `rotation`, so the rotation pivot is the shape's center.
//! Dimensions are fractions of `size`.
use crate::constants::{CORNER_RADIUS, STROKE_COLOR, STROKE_WIDTH, TICKET_DASH};
use crate::doodle::DoodleKind;
use crate::surface::DrawingSurface;
use glam::DVec2;
use smallvec::SmallVec;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub const REEL_SPROCKETS: usize = 6;
pub const STAR_SPIKES: usize = 5;
pub const CLAPPER_STRIPES: usize = 4;

/// Draw a doodle of `kind` centered on `center`.
pub fn draw_doodle<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    kind: DoodleKind,
    center: DVec2,
    size: f64,
    rotation: f64,
) {
    match kind {
        DoodleKind::Reel => draw_reel(surface, center, size, rotation),
        DoodleKind::Popcorn => draw_popcorn(surface, center, size, rotation),
        DoodleKind::Ticket => draw_ticket(surface, center, size, rotation),
        DoodleKind::Clapperboard => draw_clapperboard(surface, center, size, rotation),
        DoodleKind::Star => draw_star(surface, center, size, rotation),
        DoodleKind::Handset => draw_handset(surface, center, size, rotation),
    }
}

fn in_local_frame<S, F>(surface: &mut S, center: DVec2, rotation: f64, draw: F)
where
    S: DrawingSurface + ?Sized,
    F: FnOnce(&mut S),
{
    surface.save();
    surface.translate(center.x, center.y);
    surface.rotate(rotation);
    surface.set_stroke_style(STROKE_COLOR);
    surface.set_line_width(STROKE_WIDTH);
    draw(surface);
    surface.restore();
}

/// Centers of the reel's sprocket holes, evenly spaced at 60 degrees.
pub fn reel_sprocket_centers(size: f64) -> SmallVec<[DVec2; REEL_SPROCKETS]> {
    let ring = size / 3.0;
    (0..REEL_SPROCKETS)
        .map(|i| {
            let angle = (i as f64 / REEL_SPROCKETS as f64) * TAU;
            DVec2::new(angle.cos() * ring, angle.sin() * ring)
        })
        .collect()
}

/// Outline vertices of a five-pointed star with a 2:1 outer/inner radius
/// ratio, alternating outer and inner every 36 degrees from -90 degrees.
pub fn star_vertices(size: f64) -> SmallVec<[DVec2; STAR_SPIKES * 2]> {
    let outer = size / 2.0;
    let inner = size / 4.0;
    (0..STAR_SPIKES * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = (i as f64 * PI) / STAR_SPIKES as f64 - FRAC_PI_2;
            DVec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

pub fn draw_reel<S: DrawingSurface + ?Sized>(s: &mut S, center: DVec2, size: f64, rotation: f64) {
    in_local_frame(s, center, rotation, |s| {
        s.stroke_circle(0.0, 0.0, size / 2.0);
        s.stroke_circle(0.0, 0.0, size / 4.0);
        for hole in reel_sprocket_centers(size) {
            s.stroke_circle(hole.x, hole.y, size / 12.0);
        }
    });
}

pub fn draw_popcorn<S: DrawingSurface + ?Sized>(
    s: &mut S,
    center: DVec2,
    size: f64,
    rotation: f64,
) {
    in_local_frame(s, center, rotation, |s| {
        // bucket
        s.begin_path();
        s.move_to(-size / 3.0, size / 2.0);
        s.line_to(-size / 4.0, -size / 4.0);
        s.line_to(size / 4.0, -size / 4.0);
        s.line_to(size / 3.0, size / 2.0);
        s.close_path();
        s.stroke();

        s.begin_path();
        s.move_to(-size / 12.0, -size / 4.0);
        s.line_to(-size / 6.0, size / 2.0);
        s.move_to(size / 12.0, -size / 4.0);
        s.line_to(size / 6.0, size / 2.0);
        s.stroke();

        let puffs = [
            (0.0, -size / 3.0),
            (-size / 5.0, -size / 2.5),
            (size / 5.0, -size / 2.5),
            (-size / 8.0, -size / 2.0),
            (size / 8.0, -size / 2.0),
        ];
        for (x, y) in puffs {
            s.stroke_circle(x, y, size / 8.0);
        }
    });
}

pub fn draw_ticket<S: DrawingSurface + ?Sized>(
    s: &mut S,
    center: DVec2,
    size: f64,
    rotation: f64,
) {
    in_local_frame(s, center, rotation, |s| {
        let w = size * 0.8;
        let h = size * 0.4;

        s.begin_path();
        s.round_rect(-w / 2.0, -h / 2.0, w, h, CORNER_RADIUS);
        s.stroke();

        // perforation
        s.set_line_dash(&TICKET_DASH);
        s.begin_path();
        s.move_to(w / 4.0, -h / 2.0);
        s.line_to(w / 4.0, h / 2.0);
        s.stroke();
        s.set_line_dash(&[]);

        s.stroke_circle(-w / 8.0, 0.0, h / 4.0);
    });
}

pub fn draw_clapperboard<S: DrawingSurface + ?Sized>(
    s: &mut S,
    center: DVec2,
    size: f64,
    rotation: f64,
) {
    in_local_frame(s, center, rotation, |s| {
        let w = size * 0.8;
        let h = size * 0.6;

        s.stroke_rect(-w / 2.0, -h / 4.0, w, h / 1.5);

        // flap
        s.begin_path();
        s.move_to(-w / 2.0, -h / 4.0);
        s.line_to(-w / 3.0, -h / 2.0);
        s.line_to(w / 2.5, -h / 2.0);
        s.line_to(w / 2.0, -h / 4.0);
        s.close_path();
        s.stroke();

        for i in 0..CLAPPER_STRIPES {
            let start_x = -w / 3.0 + (i as f64 * w / 5.0);
            s.begin_path();
            s.move_to(start_x, -h / 2.0);
            s.line_to(start_x + w / 10.0, -h / 4.0);
            s.stroke();
        }
    });
}

pub fn draw_star<S: DrawingSurface + ?Sized>(s: &mut S, center: DVec2, size: f64, rotation: f64) {
    in_local_frame(s, center, rotation, |s| {
        let vertices = star_vertices(size);
        s.begin_path();
        for (i, v) in vertices.iter().enumerate() {
            if i == 0 {
                s.move_to(v.x, v.y);
            } else {
                s.line_to(v.x, v.y);
            }
        }
        s.close_path();
        s.stroke();
    });
}

pub fn draw_handset<S: DrawingSurface + ?Sized>(
    s: &mut S,
    center: DVec2,
    size: f64,
    rotation: f64,
) {
    in_local_frame(s, center, rotation, |s| {
        let w = size * 0.4;
        let h = size * 0.7;

        s.begin_path();
        s.round_rect(-w / 2.0, -h / 2.0, w, h, CORNER_RADIUS);
        s.stroke();

        // screen
        s.stroke_rect(-w / 2.0 + 3.0, -h / 2.0 + 6.0, w - 6.0, h - 15.0);

        // home button
        s.stroke_circle(0.0, h / 2.0 - 5.0, 3.0);
    });
}
