// Scatterplot view model
pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 450.0;
pub const MARKER_RADIUS: f64 = 6.0;

pub const MARGIN: Margin = Margin {
    top: 40.0,
    right: 60.0,
    bottom: 60.0,
    left: 60.0,
};

/// Shamrock, for riders without doping allegations
pub const NO_DOPING_COLOR: &str = "#03ac13";
/// Crimson, for riders with doping allegations
pub const DOPING_COLOR: &str = "#b90e0a";

pub const NO_DOPING_LEGEND: &str = "No doping allegations";
pub const DOPING_LEGEND: &str = "Riders with doping allegations";

#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub fn plot_width(&self) -> f64 {
        CHART_WIDTH - self.left - self.right
    }

    pub fn plot_height(&self) -> f64 {
        CHART_HEIGHT - self.top - self.bottom
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Pixel offset along the axis
    pub offset: f64,
    pub label: String,
}

impl AxisTick {
    pub fn new(offset: f64, label: String) -> Self {
        Self { offset, label }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub title: String,
    pub ticks: Vec<AxisTick>,
}

impl Axis {
    pub fn new(title: String, ticks: Vec<AxisTick>) -> Self {
        Self { title, ticks }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub color: &'static str,
    pub year: i32,
    pub time_iso: String,
}

impl Marker {
    pub fn new(cx: f64, cy: f64, color: &'static str, year: i32, time_iso: String) -> Self {
        Self {
            cx,
            cy,
            color,
            year,
            time_iso,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: &'static str,
    /// Horizontal offset of the entry from the legend anchor
    pub dx: f64,
}

impl LegendEntry {
    pub fn new(color: &'static str, label: &'static str, dx: f64) -> Self {
        Self { color, label, dx }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scatterplot {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub markers: Vec<Marker>,
    pub legend: Vec<LegendEntry>,
}

impl Scatterplot {
    pub fn new(x_axis: Axis, y_axis: Axis, markers: Vec<Marker>, legend: Vec<LegendEntry>) -> Self {
        Self {
            x_axis,
            y_axis,
            markers,
            legend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_area_dimensions() {
        assert_eq!(MARGIN.plot_width(), 680.0);
        assert_eq!(MARGIN.plot_height(), 350.0);
    }
}
