//! Starfield background widget.

use ratatui::prelude::*;

use mystic_core::{ColorBucket, Particle, Starfield};

use crate::shared::{BACKGROUND, CYAN, PURPLE, fade, rgb};

/// Pixels per terminal column when mapping particle sizes and drift.
const PX_PER_COLUMN: f32 = 8.0;
/// Pixels per terminal row.
const PX_PER_ROW: f32 = 16.0;
/// Peak opacity of a floating orb's glow.
const ORB_GLOW: f32 = 0.25;

/// Draws a [`Starfield`] at a point in time.
#[derive(Debug, Clone, Copy)]
pub struct StarfieldWidget<'a> {
    field: &'a Starfield,
    elapsed: f32,
}

impl<'a> StarfieldWidget<'a> {
    /// Draw `field` as it looks `elapsed` seconds after mount.
    pub fn new(field: &'a Starfield, elapsed: f32) -> Self {
        Self { field, elapsed }
    }
}

impl Widget for StarfieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(rgb(BACKGROUND)));
        if area.is_empty() {
            return;
        }

        for orb in self.field.orbs() {
            render_orb(orb, self.elapsed, area, buf);
        }
        for star in self.field.stars() {
            let (column, row) = anchor(star, area);
            let Some(cell) = buf.cell_mut((column, row)) else {
                continue;
            };
            cell.set_symbol(star_glyph(star.size))
                .set_fg(fade(tint(star.color), star.opacity(self.elapsed)));
        }
    }
}

/// Cell under a particle's position in percent.
fn anchor(p: &Particle, area: Rect) -> (u16, u16) {
    let column = (p.x / 100.0 * f32::from(area.width)) as u16;
    let row = (p.y / 100.0 * f32::from(area.height)) as u16;
    (
        area.x + column.min(area.width - 1),
        area.y + row.min(area.height - 1),
    )
}

fn render_orb(orb: &Particle, elapsed: f32, area: Rect, buf: &mut Buffer) {
    let (column, row) = anchor(orb, area);
    let (drift_x, drift_y) = orb.drift(elapsed);
    let cx = f32::from(column) + drift_x / PX_PER_COLUMN;
    let cy = f32::from(row) + drift_y / PX_PER_ROW;
    let rx = orb.size / 2.0 / PX_PER_COLUMN;
    let ry = orb.size / 2.0 / PX_PER_ROW;

    let left = (cx - rx).floor().max(f32::from(area.x)) as u16;
    let right = (cx + rx).ceil().min(f32::from(area.right())) as u16;
    let top = (cy - ry).floor().max(f32::from(area.y)) as u16;
    let bottom = (cy + ry).ceil().min(f32::from(area.bottom())) as u16;

    for y in top..bottom {
        for x in left..right {
            let dx = (f32::from(x) + 0.5 - cx) / rx;
            let dy = (f32::from(y) + 0.5 - cy) / ry;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance >= 1.0 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(fade(tint(orb.color), ORB_GLOW * (1.0 - distance)));
            }
        }
    }
}

fn tint(color: ColorBucket) -> (u8, u8, u8) {
    match color {
        ColorBucket::Purple => PURPLE,
        ColorBucket::Cyan => CYAN,
        ColorBucket::White => (255, 255, 255),
    }
}

fn star_glyph(size: f32) -> &'static str {
    if size < 1.67 {
        "\u{b7}"
    } else if size < 2.33 {
        "\u{2219}"
    } else {
        "\u{2726}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field() -> Starfield {
        Starfield::generate(&mut StdRng::seed_from_u64(42))
    }

    fn glyph_count(buf: &Buffer) -> usize {
        buf.content()
            .iter()
            .filter(|c| ["\u{b7}", "\u{2219}", "\u{2726}"].contains(&c.symbol()))
            .count()
    }

    #[test]
    fn draws_stars_inside_area() {
        let field = field();
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        StarfieldWidget::new(&field, 1.0).render(area, &mut buf);
        let count = glyph_count(&buf);
        assert!(count > 50, "only {count} stars visible");
        assert!(count <= 100);
    }

    #[test]
    fn rendering_does_not_change_the_field() {
        let field = field();
        let before = field.particles().to_vec();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        StarfieldWidget::new(&field, 3.0).render(area, &mut buf);
        StarfieldWidget::new(&field, 4.0).render(area, &mut buf);
        assert_eq!(field.particles(), before.as_slice());
    }

    #[test]
    fn empty_area_is_fine() {
        let field = field();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        StarfieldWidget::new(&field, 0.0).render(area, &mut buf);
    }
}
