use crate::color::Color;
use crate::error::Error;
use crate::particle::Bounds;
use vecmath::Vector2;

/// A 2D drawing target owned by the host.
///
/// Returning [`Error::SurfaceDetached`] from any method ends the animation;
/// any other error only skips the current frame.
pub trait Surface {
    /// Sync the surface to its rendered size on screen and report it.
    fn fit_to_display(&mut self) -> Result<Bounds, Error>;

    fn clear(&mut self) -> Result<(), Error>;

    fn draw_line(
        &mut self,
        color: Color,
        opacity: f64,
        width: f64,
        from: Vector2<f64>,
        to: Vector2<f64>,
    ) -> Result<(), Error>;

    fn fill_circle(&mut self, color: Color, center: Vector2<f64>, radius: f64)
        -> Result<(), Error>;
}
