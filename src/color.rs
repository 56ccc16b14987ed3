// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const CYAN: Color = Color::from_u32(0x00ffffff);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    /// CSS `rgba()` string for this color with its alpha scaled by `opacity`.
    pub fn css(&self, opacity: f64) -> String {
        let alpha = opacity * (self.a as f64 / 255.0);
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}
