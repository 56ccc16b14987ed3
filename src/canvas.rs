// Surface backed by a <canvas> element and its 2d context.

use crate::color::Color;
use crate::error::Error;
use crate::particle::Bounds;
use crate::surface::Surface;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
    bounds: Bounds,
}

impl CanvasSurface {
    // Grabs the 2d context from a canvas on the DOM
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let context = canvas
            .get_context("2d")
            .map_err(|err| Error::host("getContext('2d') threw", err))?
            .ok_or_else(|| Error::Host("canvas has no 2d context".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|obj| Error::host("context is not a CanvasRenderingContext2d", obj.into()))?;
        let bounds = Bounds::new(canvas.width(), canvas.height());

        Ok(CanvasSurface {
            canvas,
            context,
            bounds,
        })
    }

    fn ensure_connected(&self) -> Result<(), Error> {
        if self.canvas.is_connected() {
            Ok(())
        } else {
            Err(Error::SurfaceDetached)
        }
    }
}

impl Surface for CanvasSurface {
    // The backing store follows the element's layout box, not its width/height
    // attributes, so the drawing stays 1:1 with CSS pixels.
    fn fit_to_display(&mut self) -> Result<Bounds, Error> {
        self.ensure_connected()?;
        let width = self.canvas.offset_width().max(0) as u32;
        let height = self.canvas.offset_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.bounds = Bounds::new(width, height);
        Ok(self.bounds)
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.ensure_connected()?;
        self.context.clear_rect(
            0.0,
            0.0,
            self.bounds.width as f64,
            self.bounds.height as f64,
        );
        Ok(())
    }

    fn draw_line(
        &mut self,
        color: Color,
        opacity: f64,
        width: f64,
        from: Vector2<f64>,
        to: Vector2<f64>,
    ) -> Result<(), Error> {
        self.context
            .set_stroke_style(&JsValue::from_str(&color.css(opacity)));
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
        Ok(())
    }

    fn fill_circle(
        &mut self,
        color: Color,
        center: Vector2<f64>,
        radius: f64,
    ) -> Result<(), Error> {
        self.context
            .set_fill_style(&JsValue::from_str(&color.css(1.0)));
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, PI * 2.0)
            .map_err(Error::draw)?;
        self.context.fill();
        Ok(())
    }
}
