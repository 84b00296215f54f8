//! Integer-only 2D rasterization primitives
//!
//! All primitives draw into the [`Framebuffer`] and clip per plotted point,
//! so shapes may legally overhang the panel edges. Everything except the
//! low-frequency arc/pie path stays in integer arithmetic.

use crate::framebuffer::{Framebuffer, HEIGHT, WIDTH};
use core::f64::consts::PI;

impl Framebuffer {
    /// Plot a point, silently dropping anything off-panel
    fn plot(&mut self, x: i16, y: i16) {
        if (0..WIDTH as i16).contains(&x) && (0..HEIGHT as i16).contains(&y) {
            self.draw_point(x, y);
        }
    }

    /// Draw a straight line between two points
    ///
    /// Bresenham with two branches chosen by the dominant axis, so the
    /// stepped axis always advances by one pixel and stair-stepping error
    /// stays minimal. Both endpoints are always plotted.
    pub fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16) {
        if (x1 - x0).abs() > (y1 - y0).abs() {
            self.line_shallow(x0, y0, x1, y1);
        } else {
            self.line_steep(x0, y0, x1, y1);
        }
    }

    /// |dx| > |dy|: step X, accumulate error in Y
    fn line_shallow(&mut self, mut x0: i16, mut y0: i16, mut x1: i16, mut y1: i16) {
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let dx = (x1 - x0) as i32;
        let mut dy = (y1 - y0) as i32;
        let dir: i16 = if dy >= 0 { 1 } else { -1 };
        dy *= dir as i32;

        let mut y = y0;
        let mut d = 2 * dy - dx;
        for i in 0..=dx as i16 {
            self.plot(x0 + i, y);
            if d >= 0 {
                y += dir;
                d -= 2 * dx;
            }
            d += 2 * dy;
        }
    }

    /// |dy| >= |dx|: step Y, accumulate error in X
    fn line_steep(&mut self, mut x0: i16, mut y0: i16, mut x1: i16, mut y1: i16) {
        if y0 > y1 {
            core::mem::swap(&mut y0, &mut y1);
            core::mem::swap(&mut x0, &mut x1);
        }

        let dy = (y1 - y0) as i32;
        let mut dx = (x1 - x0) as i32;
        let dir: i16 = if dx >= 0 { 1 } else { -1 };
        dx *= dir as i32;

        let mut x = x0;
        let mut d = 2 * dx - dy;
        for i in 0..=dy as i16 {
            self.plot(x, y0 + i);
            if d >= 0 {
                x += dir;
                d -= 2 * dy;
            }
            d += 2 * dx;
        }
    }

    /// Draw a rectangle with top-left corner at `(x, y)`
    pub fn draw_rectangle(&mut self, x: i16, y: i16, width: u8, height: u8, filled: bool) {
        if width == 0 || height == 0 {
            return;
        }
        let w = width as i16;
        let h = height as i16;

        if filled {
            for i in 0..h {
                self.draw_line(x, y + i, x + w - 1, y + i);
            }
        } else {
            self.draw_line(x, y, x + w - 1, y);
            self.draw_line(x, y + h - 1, x + w - 1, y + h - 1);
            self.draw_line(x, y, x, y + h - 1);
            self.draw_line(x + w - 1, y, x + w - 1, y + h - 1);
        }
    }

    /// Draw a triangle given its three vertices
    ///
    /// The filled variant walks every scan line between the vertical
    /// extremes and fills between the leftmost and rightmost intersection
    /// of the three edges with that line. Horizontal edges contribute both
    /// their endpoints directly instead of interpolating.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        filled: bool,
    ) {
        if !filled {
            self.draw_line(x0, y0, x1, y1);
            self.draw_line(x1, y1, x2, y2);
            self.draw_line(x2, y2, x0, y0);
            return;
        }

        let min_y = y0.min(y1).min(y2);
        let max_y = y0.max(y1).max(y2);
        let edges = [(x0, y0, x1, y1), (x1, y1, x2, y2), (x2, y2, x0, y0)];

        for y in min_y..=max_y {
            let mut x_start = WIDTH as i16;
            let mut x_end = -1;

            for &(xa, ya, xb, yb) in &edges {
                if ya == yb {
                    // A horizontal edge on this scan line spans directly
                    if y == ya {
                        x_start = x_start.min(xa.min(xb));
                        x_end = x_end.max(xa.max(xb));
                    }
                    continue;
                }

                if (ya <= y && yb >= y) || (yb <= y && ya >= y) {
                    let x_int =
                        xa + ((xb - xa) as i32 * (y - ya) as i32 / (yb - ya) as i32) as i16;
                    x_start = x_start.min(x_int);
                    x_end = x_end.max(x_int);
                }
            }

            if x_start <= x_end {
                self.draw_line(x_start, y, x_end, y);
            }
        }
    }

    /// Draw a circle centered at `(cx, cy)`
    ///
    /// Midpoint algorithm computed over one 45-degree octant starting at
    /// the top of the circle, mirrored into eight points (outline) or four
    /// horizontal spans (filled).
    pub fn draw_circle(&mut self, cx: i16, cy: i16, r: u8, filled: bool) {
        let mut x: i16 = 0;
        let mut y: i16 = -(r as i16);
        let mut d: i32 = -(r as i32);

        while x < -y {
            if d > 0 {
                y += 1;
                d += 2 * y as i32;
            }
            d += 2 * x as i32 + 1;

            if filled {
                self.draw_line(cx - x, cy + y, cx + x, cy + y);
                self.draw_line(cx - x, cy - y, cx + x, cy - y);
                self.draw_line(cx - y, cy + x, cx + y, cy + x);
                self.draw_line(cx - y, cy - x, cx + y, cy - x);
            } else {
                self.plot(cx + x, cy + y);
                self.plot(cx - x, cy + y);
                self.plot(cx + x, cy - y);
                self.plot(cx - x, cy - y);
                self.plot(cx + y, cy + x);
                self.plot(cx - y, cy + x);
                self.plot(cx + y, cy - x);
                self.plot(cx - y, cy - x);
            }

            x += 1;
        }
    }

    /// Draw an ellipse with semi-axes `a` (horizontal) and `b` (vertical)
    ///
    /// Two-region midpoint algorithm: region 1 steps X from the top vertex
    /// while the tangent slope magnitude is below one, region 2 steps Y
    /// from the right vertex for the rest. The decision variable is scaled
    /// by `a²`/`b²` and kept in 64-bit.
    pub fn draw_ellipse(&mut self, cx: i16, cy: i16, a: u8, b: u8, filled: bool) {
        if a == 0 && b == 0 {
            // Degenerate ellipse: a single point
            self.plot(cx, cy);
            return;
        }

        let a2 = (a as i64) * (a as i64);
        let b2 = (b as i64) * (b as i64);

        // Region 1: from the top vertex rightwards
        let mut px: i16 = 0;
        let mut py: i16 = b as i16;
        let mut delta: i64 = 2 * b2 + a2 * (1 - 2 * b as i64);

        while b2 * px as i64 <= a2 * py as i64 {
            self.ellipse_points(cx, cy, px, py, filled);

            if delta < 0 {
                delta += 2 * b2 * (2 * px as i64 + 3);
            } else {
                delta += 2 * a2 * (3 - 2 * py as i64) + 2 * b2 * (2 * px as i64 + 3);
                py -= 1;
            }
            px += 1;
        }

        // Region 2: from the right vertex downwards
        px = a as i16;
        py = 0;
        delta = 2 * a2 + b2 * (1 - 2 * a as i64);

        while a2 * py as i64 <= b2 * px as i64 {
            self.ellipse_points(cx, cy, px, py, filled);

            if delta < 0 {
                delta += 2 * a2 * (2 * py as i64 + 3);
            } else {
                delta += 2 * b2 * (3 - 2 * px as i64) + 2 * a2 * (2 * py as i64 + 3);
                px -= 1;
            }
            py += 1;
        }
    }

    /// One step of the ellipse walk: four symmetric points or two spans
    fn ellipse_points(&mut self, cx: i16, cy: i16, px: i16, py: i16, filled: bool) {
        if filled {
            self.draw_line(cx - px, cy - py, cx + px, cy - py);
            self.draw_line(cx - px, cy + py, cx + px, cy + py);
        } else {
            self.plot(cx + px, cy - py);
            self.plot(cx - px, cy - py);
            self.plot(cx + px, cy + py);
            self.plot(cx - px, cy + py);
        }
    }

    /// Draw a circular arc (outline) or pie slice (filled)
    ///
    /// Angles are degrees, normalized into `[0, 360)`; a range with
    /// `start > end` wraps through zero. The filled variant sweeps the
    /// angle in one-degree steps and draws a radial line per sample, which
    /// is the one place floating point enters the rasterizer; arcs are
    /// rare, low-frequency operations. The outline variant generates the
    /// full midpoint-circle point set and keeps the points whose angle
    /// falls inside the range.
    pub fn draw_arc(
        &mut self,
        cx: i16,
        cy: i16,
        r: u8,
        start_angle: i16,
        end_angle: i16,
        filled: bool,
    ) {
        let mut start = start_angle % 360;
        let mut end = end_angle % 360;
        if start < 0 {
            start += 360;
        }
        if end < 0 {
            end += 360;
        }

        if filled {
            let mut angle = start;
            while angle != end {
                let rad = angle as f64 * PI / 180.0;
                let px = (r as f64 * libm::cos(rad) + 0.5) as i16;
                let py = (r as f64 * libm::sin(rad) + 0.5) as i16;
                self.draw_line(cx, cy, cx + px, cy + py);

                angle += 1;
                if angle > 360 {
                    angle -= 360;
                }
                if (start < end && angle > end)
                    || (start > end && angle > end && angle < start)
                {
                    break;
                }
            }
        } else {
            let mut px: i16 = 0;
            let mut py: i16 = r as i16;
            let mut d: i32 = 3 - 2 * r as i32;

            while px <= py {
                let points = [
                    (px, py),
                    (py, px),
                    (py, -px),
                    (px, -py),
                    (-px, -py),
                    (-py, -px),
                    (-py, px),
                    (-px, py),
                ];

                for &(ox, oy) in &points {
                    let mut angle = libm::atan2(oy as f64, ox as f64);
                    if angle < 0.0 {
                        angle += 2.0 * PI;
                    }
                    let deg = angle * 180.0 / PI;

                    let in_range = if start <= end {
                        deg >= start as f64 && deg <= end as f64
                    } else {
                        // Range wraps through zero
                        deg >= start as f64 || deg <= end as f64
                    };
                    if in_range {
                        self.plot(cx + ox, cy + oy);
                    }
                }

                if d < 0 {
                    d += 4 * px as i32 + 6;
                } else {
                    d += 4 * (px - py) as i32 + 10;
                    py -= 1;
                }
                px += 1;
            }
        }
    }
}
