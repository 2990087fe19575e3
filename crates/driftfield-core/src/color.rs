use fnv::FnvHashMap;

/// The fixed particle palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Blue,
    Red,
    Amber,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 3] = [PaletteColor::Blue, PaletteColor::Red, PaletteColor::Amber];

    pub fn rgb(self) -> Rgb {
        match self {
            PaletteColor::Blue => Rgb::new(0x00, 0x66, 0xff),
            PaletteColor::Red => Rgb::new(0xff, 0x00, 0x22),
            PaletteColor::Amber => Rgb::new(0xff, 0xc0, 0x00),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Add `amount` to every channel, saturating at 255.
    pub fn lighten(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Memoized CSS strings for lightened palette colors, so gradient stops do
/// not allocate every frame.
#[derive(Default)]
pub struct ColorStops {
    cache: FnvHashMap<(PaletteColor, u8), String>,
}

impl ColorStops {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, color: PaletteColor, lighten: u8) -> &str {
        self.cache
            .entry((color, lighten))
            .or_insert_with(|| color.rgb().lighten(lighten).css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let [a, b, c] = PaletteColor::ALL.map(PaletteColor::rgb);
        assert!(a != b && b != c && a != c);
        assert_eq!(PaletteColor::Blue.rgb().css(), "rgb(0,102,255)");
    }

    #[test]
    fn lighten_saturates() {
        let c = PaletteColor::Amber.rgb().lighten(85);
        assert_eq!(c, Rgb::new(255, 255, 85));
        assert_eq!(c.css(), "rgb(255,255,85)");
    }

    #[test]
    fn color_stops_are_cached() {
        let mut stops = ColorStops::new();
        assert_eq!(stops.get(PaletteColor::Blue, 55), "rgb(55,157,255)");
        stops.get(PaletteColor::Blue, 55);
        stops.get(PaletteColor::Red, 55);
        assert_eq!(stops.cache.len(), 2);
    }
}
