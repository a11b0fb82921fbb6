// SVG and HTML encoding of the scatterplot view model
use crate::domain::chart::{Scatterplot, CHART_HEIGHT, CHART_WIDTH, MARGIN, MARKER_RADIUS};
use crate::domain::tooltip::Tooltip;

/// Render the chart as a standalone SVG document
pub fn render_svg(chart: &Scatterplot) -> String {
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CHART_WIDTH}\" height=\"{CHART_HEIGHT}\" viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\">"
    ));

    // Axis name labels
    svg.push_str(&format!(
        "<text id=\"x-axis-label\" x=\"{}\" y=\"{}\" fill=\"#fff\" font-size=\"0.8rem\" text-anchor=\"middle\">{}</text>",
        CHART_WIDTH - MARGIN.right + 30.0,
        CHART_HEIGHT - MARGIN.bottom + 4.0,
        chart.x_axis.title
    ));
    svg.push_str(&format!(
        "<text id=\"y-axis-label\" x=\"{}\" y=\"{}\" fill=\"#fff\" font-size=\"0.8rem\" text-anchor=\"middle\">{}</text>",
        MARGIN.left,
        MARGIN.top - 16.0,
        chart.y_axis.title
    ));

    // Bottom axis: domain line, then one tick group per formatted year
    svg.push_str(&format!(
        "<g id=\"x-axis\" transform=\"translate({}, {})\">",
        MARGIN.left,
        CHART_HEIGHT - MARGIN.bottom
    ));
    svg.push_str(&format!(
        "<path class=\"domain\" stroke=\"#fff\" fill=\"none\" d=\"M0,0H{}\"/>",
        MARGIN.plot_width()
    ));
    for tick in &chart.x_axis.ticks {
        svg.push_str(&format!(
            "<g class=\"tick\" transform=\"translate({:.2}, 0)\"><line stroke=\"#fff\" y2=\"6\"/><text fill=\"#fff\" y=\"9\" dy=\"0.71em\" text-anchor=\"middle\">{}</text></g>",
            tick.offset, tick.label
        ));
    }
    svg.push_str("</g>");

    // Left axis
    svg.push_str(&format!(
        "<g id=\"y-axis\" transform=\"translate({}, {})\">",
        MARGIN.left, MARGIN.top
    ));
    svg.push_str(&format!(
        "<path class=\"domain\" stroke=\"#fff\" fill=\"none\" d=\"M0,0V{}\"/>",
        MARGIN.plot_height()
    ));
    for tick in &chart.y_axis.ticks {
        svg.push_str(&format!(
            "<g class=\"tick\" transform=\"translate(0, {:.2})\"><line stroke=\"#fff\" x2=\"-6\"/><text fill=\"#fff\" x=\"-9\" dy=\"0.32em\" text-anchor=\"end\">{}</text></g>",
            tick.offset, tick.label
        ));
    }
    svg.push_str("</g>");

    // Legend, one swatch + text per category
    svg.push_str(&format!(
        "<g id=\"legend\" transform=\"translate({}, {})\">",
        MARGIN.plot_width() / 2.0,
        CHART_HEIGHT - 28.0
    ));
    for entry in &chart.legend {
        svg.push_str(&format!(
            "<g transform=\"translate({}, 0)\"><rect width=\"16\" height=\"16\" stroke=\"#fff\" fill=\"{}\"/><text fill=\"#fff\" font-size=\"0.7rem\" transform=\"translate(24, 12)\">{}</text></g>",
            entry.dx, entry.color, entry.label
        ));
    }
    svg.push_str("</g>");

    // Markers
    for marker in &chart.markers {
        svg.push_str(&format!(
            "<circle class=\"dot\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{MARKER_RADIUS}\" data-xvalue=\"{}\" data-yvalue=\"{}\" stroke=\"#fff\" fill=\"{}\"/>",
            marker.cx, marker.cy, marker.year, marker.time_iso, marker.color
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Wrap the rendered SVG in the chart page: the container element with the
/// drawing surface and its sibling tooltip panel, initially hidden
pub fn render_page(svg: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html>\
         <head>\
         <title>Doping in Professional Bicycle Racing</title>\
         <style>body {{ background: #222; margin: 0; }} #tooltip {{ position: absolute; }}</style>\
         </head>\
         <body>\
         <div id=\"scatterplot-graph-container\">{svg}{}</div>\
         </body>\
         </html>",
        render_tooltip(&Tooltip::Hidden)
    )
}

/// Render the tooltip panel element for its current state
pub fn render_tooltip(tooltip: &Tooltip) -> String {
    match tooltip {
        Tooltip::Hidden => "<div id=\"tooltip\" style=\"opacity: 0;\"></div>".to_string(),
        Tooltip::Visible(panel) => format!(
            "<div id=\"tooltip\" class=\"{}\" data-year=\"{}\" style=\"opacity: 1; top: {}px; left: {}px; width: max-content; transform: {};\">{}</div>",
            panel.class, panel.year, panel.top, panel.left, panel.transform, panel.html
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_service::ChartService;
    use crate::domain::record::{parse_race_time, RaceRecord};
    use crate::domain::tooltip::{PointerEvent, TooltipPanel};

    fn chart() -> Scatterplot {
        let records = vec![
            RaceRecord::new(
                1994,
                parse_race_time("36:50").unwrap(),
                "Marco Pantani".to_string(),
                "ITA".to_string(),
                String::new(),
            ),
            RaceRecord::new(
                2015,
                parse_race_time("38:01").unwrap(),
                "Nairo Quintana".to_string(),
                "COL".to_string(),
                "Confessed in 2015".to_string(),
            ),
        ];
        ChartService::assemble(&records).unwrap()
    }

    #[test]
    fn test_svg_carries_one_tagged_marker_per_record() {
        let svg = render_svg(&chart());
        assert_eq!(svg.matches("class=\"dot\"").count(), 2);
        assert!(svg.contains("data-xvalue=\"1994\""));
        assert!(svg.contains("data-yvalue=\"1970-01-01T00:36:50.000Z\""));
        assert!(svg.contains("data-xvalue=\"2015\""));
    }

    #[test]
    fn test_svg_contains_axes_legend_and_labels() {
        let svg = render_svg(&chart());
        assert!(svg.contains("id=\"x-axis\""));
        assert!(svg.contains("id=\"y-axis\""));
        assert!(svg.contains("id=\"legend\""));
        assert!(svg.contains(">Year</text>"));
        assert!(svg.contains(">Time (in minutes)</text>"));
        assert!(svg.contains(">No doping allegations</text>"));
        assert!(svg.contains(">Riders with doping allegations</text>"));
    }

    #[test]
    fn test_rendering_twice_is_structurally_identical() {
        let chart = chart();
        assert_eq!(render_svg(&chart), render_svg(&chart));
    }

    #[test]
    fn test_page_nests_svg_and_sibling_tooltip_in_container() {
        let page = render_page(&render_svg(&chart()));
        assert!(page.contains("id=\"scatterplot-graph-container\""));
        assert!(page.contains("</svg><div id=\"tooltip\" style=\"opacity: 0;\"></div>"));
    }

    #[test]
    fn test_visible_tooltip_renders_placement_and_content() {
        let record = RaceRecord::new(
            2015,
            parse_race_time("38:01").unwrap(),
            "Nairo Quintana".to_string(),
            "COL".to_string(),
            "Confessed in 2015".to_string(),
        );
        let panel = TooltipPanel::anchored(&record, PointerEvent::new(640.0, 300.0));
        let html = render_tooltip(&Tooltip::Visible(panel));
        assert!(html.contains("class=\"tooltip-left\""));
        assert!(html.contains("data-year=\"2015\""));
        assert!(html.contains("left: 635px;"));
        assert!(html.contains("transform: translate(-100%, -50%);"));
        assert!(html.contains("Confessed in 2015"));
    }
}
