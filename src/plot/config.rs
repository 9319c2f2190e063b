use plotters::style::RGBColor;

/// Google colour scheme, cycled over vehicles.
pub const GOOGLE_COLORS: [RGBColor; 6] = [
    RGBColor(0x42, 0x85, 0xF4),
    RGBColor(0xEA, 0x43, 0x35),
    RGBColor(0xFB, 0xBC, 0x05),
    RGBColor(0x34, 0xA8, 0x53),
    RGBColor(0x10, 0x10, 0x10),
    RGBColor(0xFF, 0xFF, 0xFF),
];

/// Arrow geometry in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    /// Shaft width.
    pub width: f64,
    /// Head width.
    pub head_width: f64,
    /// Head length, included in the arrow length.
    pub head_length: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            width: 5.0,
            head_width: 20.0,
            head_length: 20.0,
        }
    }
}

/// Plot dimensions and styling.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Canvas of the locations plot, in pixels.
    pub locations_size: (u32, u32),
    /// Canvas of the solution plot, in pixels.
    pub solution_size: (u32, u32),
    /// Blank border around the chart, in pixels.
    pub margin: u32,
    /// Radius of a location disc, in pixels.
    pub marker_radius: u32,
    /// Label font size, in pixels.
    pub font_size: u32,
    /// Arrows stop `marker_size / 2` short of both nodes (data units).
    pub marker_size: f64,
    pub arrow: ArrowStyle,
    /// Vehicle colours, cycled.
    pub palette: Vec<RGBColor>,
    pub grid_color: RGBColor,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            locations_size: (1190, 700),
            solution_size: (1360, 800),
            margin: 20,
            marker_radius: 18,
            font_size: 16,
            marker_size: 50.0,
            arrow: ArrowStyle::default(),
            palette: GOOGLE_COLORS.to_vec(),
            grid_color: RGBColor(0xDD, 0xDD, 0xDD),
        }
    }
}

impl PlotConfig {
    /// Colour of the given vehicle.
    pub fn vehicle_color(&self, vehicle: usize) -> RGBColor {
        if self.palette.is_empty() {
            return GOOGLE_COLORS[vehicle % GOOGLE_COLORS.len()];
        }
        self.palette[vehicle % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let config = PlotConfig::default();
        assert_eq!(config.locations_size, (1190, 700));
        assert_eq!(config.solution_size, (1360, 800));
        assert_eq!(config.marker_size, 50.0);
    }

    #[test]
    fn test_vehicle_color_cycles() {
        let config = PlotConfig::default();
        assert_eq!(config.vehicle_color(0), RGBColor(0x42, 0x85, 0xF4));
        assert_eq!(config.vehicle_color(6), config.vehicle_color(0));

        let empty = PlotConfig {
            palette: Vec::new(),
            ..PlotConfig::default()
        };
        assert_eq!(empty.vehicle_color(1), GOOGLE_COLORS[1]);
    }
}
