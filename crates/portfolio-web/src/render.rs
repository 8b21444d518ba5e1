use std::f64::consts::PI;

use portfolio_core::{Connection, ParticleField};
use web_sys as web;

use crate::constants::{CONNECTION_LINE_WIDTH, TRAIL_FILL};

/// Paints the field into a 2D canvas context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    // Reused across frames so the connection pass allocates only on growth.
    connections: Vec<Connection>,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            connections: Vec::new(),
        }
    }

    /// One frame: translucent wash, particle discs, then connection lines.
    pub fn paint(&mut self, field: &ParticleField) {
        self.ctx.set_fill_style_str(TRAIL_FILL);
        self.ctx
            .fill_rect(0.0, 0.0, field.width() as f64, field.height() as f64);

        for p in field.particles() {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                p.position.x as f64,
                p.position.y as f64,
                p.radius as f64,
                0.0,
                PI * 2.0,
            );
            self.ctx.set_fill_style_str(&p.color.css());
            self.ctx.fill();
        }

        field.connections(&mut self.connections);
        self.ctx.set_line_width(CONNECTION_LINE_WIDTH);
        for seg in &self.connections {
            self.ctx.begin_path();
            self.ctx
                .set_stroke_style_str(&format!("rgba(50, 100, 200, {})", seg.opacity));
            self.ctx.move_to(seg.from.x as f64, seg.from.y as f64);
            self.ctx.line_to(seg.to.x as f64, seg.to.y as f64);
            self.ctx.stroke();
        }
    }
}
