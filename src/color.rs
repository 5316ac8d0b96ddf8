// Simple color struct, created from an unsigned 32 representing RRGGBBAA
// or from hue/saturation/lightness, and rendered as a CSS color string

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    /// Opaque color from hue in degrees (taken mod 360), saturation and
    /// lightness in `[0, 1]`.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = lightness - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let channel = |v: f64| ((v + m) * 255.0).round().max(0.0).min(255.0) as u8;

        Color {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: 0xff,
        }
    }

    /// Fully saturated, mid-lightness color for a hue counter value.
    pub fn from_hue(hue: u32) -> Color {
        Color::from_hsl((hue % 360) as f64, 1.0, 0.5)
    }

    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    // #rrggbbaa, which every canvas fill/stroke style accepts
    pub fn to_css(self) -> String {
        format!("#{:08x}", self.to_u32())
    }
}
