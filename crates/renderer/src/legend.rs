//! Map legend for the hazard color scale.

use glof_common::ColorScale;

/// Caption shown above the legend gradient.
pub const LEGEND_CAPTION: &str = "Hazard Probability";

/// Render the legend as a positioned overlay div.
///
/// The gradient bar is an inline SVG whose stops mirror the color scale,
/// with a tick label under each stop value.
pub fn legend_html(scale: &ColorScale) -> String {
    let (lo, hi) = scale.domain();
    let span = if hi > lo { hi - lo } else { 1.0 };

    let mut gradient_stops = String::new();
    for stop in &scale.stops {
        let offset = (stop.value - lo) / span * 100.0;
        gradient_stops.push_str(&format!(
            "<stop offset=\"{:.0}%\" stop-color=\"{}\"/>",
            offset,
            stop.color.to_hex()
        ));
    }

    let mut ticks = String::new();
    for stop in &scale.stops {
        ticks.push_str(&format!("<span>{:.2}</span>", stop.value));
    }

    let mut html = String::with_capacity(1024);
    html.push_str(
        "<div id=\"legend\" style=\"position: absolute; top: 10px; right: 10px; z-index: 1000; \
         background: white; padding: 8px 12px; border-radius: 4px; \
         box-shadow: 0 1px 4px rgba(0,0,0,0.3); font: 12px sans-serif;\">",
    );
    html.push_str(&format!("<div style=\"margin-bottom: 4px;\"><b>{}</b></div>", LEGEND_CAPTION));
    html.push_str("<svg width=\"220\" height=\"12\"><defs>");
    html.push_str(&format!(
        "<linearGradient id=\"hazard-ramp\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"0\">{}</linearGradient>",
        gradient_stops
    ));
    html.push_str("</defs><rect width=\"220\" height=\"12\" fill=\"url(#hazard-ramp)\"/></svg>");
    html.push_str(&format!(
        "<div style=\"display: flex; justify-content: space-between;\">{}</div>",
        ticks
    ));
    html.push_str("</div>");
    html
}
