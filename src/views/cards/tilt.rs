// Pointer-driven tilt/shine transform for the card hover effect.
// All math is pure and painter-free so it can be tested headless.

use eframe::egui::{Pos2, Rect};

use crate::ui_constants::tilt::{HOVER_SCALE, MAX_TILT_DEG, PERSPECTIVE};

/// Derived transform for one pointer sample over a card. Each sample
/// overwrites the previous one; nothing accumulates between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Rotation around the horizontal axis, degrees. Pointer above the
    /// centre gives a positive value (top of the card leans toward the
    /// viewer).
    pub rotate_x: f32,
    /// Rotation around the vertical axis, degrees.
    pub rotate_y: f32,
    /// Shine centre as a percentage of the box width.
    pub shine_x: f32,
    /// Shine centre as a percentage of the box height.
    pub shine_y: f32,
    /// Uniform scale of the card plane.
    pub scale: f32,
    /// Opacity of the shine overlay, 0..=1.
    pub shine_opacity: f32,
}

impl Tilt {
    /// Resting transform: no rotation, unit scale, shine hidden.
    pub fn rest() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            shine_x: 50.0,
            shine_y: 50.0,
            scale: 1.0,
            shine_opacity: 0.0,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0 && self.scale == 1.0
    }
}

/// Compute the transform for a pointer position over `rect`.
/// Returns `None` for a zero-extent rect (element not laid out yet),
/// skipping the computation instead of dividing by zero.
pub fn tilt_for_pointer(rect: Rect, pointer: Pos2) -> Option<Tilt> {
    let w = rect.width();
    let h = rect.height();
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let local_x = pointer.x - rect.left();
    let local_y = pointer.y - rect.top();

    Some(Tilt {
        rotate_x: -MAX_TILT_DEG * (local_y - h / 2.0) / (h / 2.0),
        rotate_y: MAX_TILT_DEG * (local_x - w / 2.0) / (w / 2.0),
        shine_x: 100.0 * local_x / w,
        shine_y: 100.0 * local_y / h,
        scale: HOVER_SCALE,
        shine_opacity: 1.0,
    })
}

/// Project the card plane under `tilt` onto screen space.
/// Corners come back in order: top-left, top-right, bottom-right,
/// bottom-left. At rest this is the identity on the rect corners.
pub fn project_corners(rect: Rect, tilt: &Tilt) -> [Pos2; 4] {
    let c = rect.center();
    let (sin_rx, cos_rx) = tilt.rotate_x.to_radians().sin_cos();
    let (sin_ry, cos_ry) = tilt.rotate_y.to_radians().sin_cos();

    let project = |p: Pos2| -> Pos2 {
        // Centre-relative plane coordinates, scaled. Screen y grows down,
        // z grows toward the viewer.
        let x = (p.x - c.x) * tilt.scale;
        let y = (p.y - c.y) * tilt.scale;

        // Rotate around the vertical axis: positive rotate_y brings the
        // right edge toward the viewer.
        let (x1, z1) = (x * cos_ry, x * sin_ry);
        // Rotate around the horizontal axis: positive rotate_x (pointer
        // above the centre) pulls the top edge toward the viewer.
        let (y2, z2) = (y * cos_rx, z1 - y * sin_rx);

        let depth = (PERSPECTIVE - z2).max(1.0);
        let f = PERSPECTIVE / depth;
        Pos2::new(c.x + x1 * f, c.y + y2 * f)
    };

    [
        project(rect.left_top()),
        project(rect.right_top()),
        project(rect.right_bottom()),
        project(rect.left_bottom()),
    ]
}

/// Bilinear interpolation of normalized (u, v) into a projected quad.
pub fn quad_point(corners: &[Pos2; 4], u: f32, v: f32) -> Pos2 {
    let top = corners[0] + (corners[1] - corners[0]) * u;
    let bottom = corners[3] + (corners[2] - corners[3]) * u;
    top + (bottom - top) * v
}

/// Map a normalized sub-rectangle of the card into the projected quad.
pub fn quad_sub(corners: &[Pos2; 4], u0: f32, v0: f32, u1: f32, v1: f32) -> [Pos2; 4] {
    [
        quad_point(corners, u0, v0),
        quad_point(corners, u1, v0),
        quad_point(corners, u1, v1),
        quad_point(corners, u0, v1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn approx(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    fn card_box() -> Rect {
        // The 200x300 box from the interaction contract, offset from the
        // origin so local/viewport conversion is exercised.
        Rect::from_min_size(pos2(40.0, 60.0), eframe::egui::vec2(200.0, 300.0))
    }

    #[test]
    fn centre_maps_to_zero_rotation() {
        let t = tilt_for_pointer(card_box(), pos2(40.0 + 100.0, 60.0 + 150.0)).unwrap();
        approx(t.rotate_x, 0.0);
        approx(t.rotate_y, 0.0);
        approx(t.shine_x, 50.0);
        approx(t.shine_y, 50.0);
        approx(t.scale, HOVER_SCALE);
    }

    #[test]
    fn top_right_corner_hits_the_extremes() {
        let t = tilt_for_pointer(card_box(), pos2(40.0 + 200.0, 60.0)).unwrap();
        approx(t.rotate_y, 15.0);
        approx(t.rotate_x, 15.0);
        approx(t.shine_x, 100.0);
        approx(t.shine_y, 0.0);
    }

    #[test]
    fn bottom_left_corner_hits_the_extremes() {
        let t = tilt_for_pointer(card_box(), pos2(40.0, 60.0 + 300.0)).unwrap();
        approx(t.rotate_y, -15.0);
        approx(t.rotate_x, -15.0);
        approx(t.shine_x, 0.0);
        approx(t.shine_y, 100.0);
    }

    #[test]
    fn pointer_above_centre_tilts_top_toward_viewer() {
        let rect = card_box();
        let t = tilt_for_pointer(rect, pos2(rect.center().x, rect.top() + 30.0)).unwrap();
        assert!(t.rotate_x > 0.0, "got {}", t.rotate_x);
        approx(t.rotate_y, 0.0);
    }

    #[test]
    fn interior_samples_stay_within_bounds() {
        let rect = card_box();
        for ix in 1..20 {
            for iy in 1..20 {
                let p = pos2(
                    rect.left() + rect.width() * ix as f32 / 20.0,
                    rect.top() + rect.height() * iy as f32 / 20.0,
                );
                let t = tilt_for_pointer(rect, p).unwrap();
                assert!(t.rotate_x > -MAX_TILT_DEG && t.rotate_x < MAX_TILT_DEG);
                assert!(t.rotate_y > -MAX_TILT_DEG && t.rotate_y < MAX_TILT_DEG);
            }
        }
    }

    #[test]
    fn rest_resets_everything() {
        let t = Tilt::rest();
        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.shine_opacity, 0.0);
        assert!(t.is_rest());
    }

    #[test]
    fn zero_extent_box_skips_computation() {
        let empty = Rect::from_min_size(pos2(0.0, 0.0), eframe::egui::vec2(0.0, 120.0));
        assert!(tilt_for_pointer(empty, pos2(0.0, 0.0)).is_none());
        let flat = Rect::from_min_size(pos2(0.0, 0.0), eframe::egui::vec2(120.0, 0.0));
        assert!(tilt_for_pointer(flat, pos2(0.0, 0.0)).is_none());
    }

    #[test]
    fn projection_at_rest_is_identity() {
        let rect = card_box();
        let corners = project_corners(rect, &Tilt::rest());
        let expected = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ];
        for (got, want) in corners.iter().zip(expected.iter()) {
            approx(got.x, want.x);
            approx(got.y, want.y);
        }
    }

    #[test]
    fn positive_rotate_y_pulls_right_edge_closer() {
        let rect = card_box();
        let mut tilt = Tilt::rest();
        tilt.rotate_y = 15.0;
        tilt.scale = 1.0;
        let corners = project_corners(rect, &tilt);
        // The right edge comes toward the viewer and is magnified; the left
        // edge recedes and shrinks.
        let right_h = corners[2].y - corners[1].y;
        let left_h = corners[3].y - corners[0].y;
        assert!(right_h > rect.height());
        assert!(left_h < rect.height());
    }

    #[test]
    fn quad_point_interpolates_corners_and_centre() {
        let rect = card_box();
        let corners = project_corners(rect, &Tilt::rest());
        let c = quad_point(&corners, 0.5, 0.5);
        approx(c.x, rect.center().x);
        approx(c.y, rect.center().y);
        let tl = quad_point(&corners, 0.0, 0.0);
        approx(tl.x, rect.left());
        approx(tl.y, rect.top());
    }
}
