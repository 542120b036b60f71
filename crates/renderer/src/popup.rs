//! Popup rendering for lake markers.
//!
//! Field order, labels and numeric precision are fixed. Absent attributes
//! render as the literal `N/A` rather than dropping out of the layout, so
//! every popup reads the same way.

use glof_common::LakeRecord;
use serde::{Deserialize, Serialize};

/// Which descriptive rows the popup carries.
///
/// `Compact` drops the glacier-geometry rows (slope, contact, touch count)
/// for embedding contexts where popup space is tight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopupFields {
    #[default]
    Full,
    Compact,
}

/// Render the popup body for one record.
///
/// `fill_color` is the marker's fill in CSS hex form; the probability line
/// is tinted with it so popup and marker read together.
pub fn build_popup(record: &LakeRecord, fill_color: &str, fields: PopupFields) -> String {
    let mut html = String::with_capacity(768);
    html.push_str("<b>Lake Information</b><br>");

    push_number(&mut html, "Latitude", record.latitude, 4);
    push_number(&mut html, "Longitude", record.longitude, 4);
    push_number(&mut html, "Lake Area (ha)", record.lake_area_ha, 2);
    push_number(&mut html, "Elevation (m)", record.elevation_m, 0);
    push_text(&mut html, "Lake Type", record.lake_type.as_deref());
    push_text(&mut html, "Supraglacial", record.supraglacial.as_deref());
    push_number(&mut html, "Glacier Area (ha)", record.glacier_area_ha, 2);
    if fields == PopupFields::Full {
        push_number(
            &mut html,
            "Slope glac&rarr;lake (&deg;)",
            record.slope_glacier_to_lake_deg,
            2,
        );
        push_text(&mut html, "Glacier Contact", record.glacier_contact.as_deref());
        push_number(&mut html, "Glacier Touch Count", record.glacier_touch_count, 0);
    }
    push_number(&mut html, "Nearest Glacier Dist (m)", record.nearest_glacier_dist_m, 0);
    push_number(&mut html, "Glacier Elev (m)", record.glacier_elevation_m, 0);
    push_number(&mut html, "5-yr Expansion Rate", record.expansion_rate_5y, 3);
    push_number(&mut html, "10-yr Expansion Rate", record.expansion_rate_10y, 3);
    push_text(&mut html, "Observed GLOF", record.observed_glof.as_deref());

    let probability = if record.hazard_probability.is_finite() {
        format!("{:.2}", record.hazard_probability)
    } else {
        "N/A".to_string()
    };
    html.push_str(&format!(
        "<b><font color='{}'>Hazard Probability:</font></b> {}",
        fill_color, probability
    ));

    html
}

fn push_number(html: &mut String, label: &str, value: Option<f64>, precision: usize) {
    let rendered = match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "N/A".to_string(),
    };
    html.push_str(&format!("<b>{}:</b> {}<br>", label, rendered));
}

fn push_text(html: &mut String, label: &str, value: Option<&str>) {
    let rendered = match value {
        Some(v) => escape_html(v),
        None => "N/A".to_string(),
    };
    html.push_str(&format!("<b>{}:</b> {}<br>", label, rendered));
}

/// Escape free-text cell values destined for popup HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> LakeRecord {
        LakeRecord {
            latitude: Some(27.8993),
            longitude: Some(86.9208),
            hazard_probability: 0.82,
            lake_area_ha: Some(114.2),
            elevation_m: Some(5010.0),
            glacier_area_ha: Some(458.1),
            slope_glacier_to_lake_deg: Some(18.4),
            glacier_touch_count: Some(2.0),
            nearest_glacier_dist_m: Some(120.0),
            glacier_elevation_m: Some(5320.0),
            expansion_rate_5y: Some(0.042),
            expansion_rate_10y: Some(0.085),
            lake_type: Some("moraine-dammed".to_string()),
            supraglacial: Some("False".to_string()),
            glacier_contact: Some("True".to_string()),
            observed_glof: Some("True".to_string()),
        }
    }

    #[test]
    fn test_build_popup_renders_fields_in_order() {
        let html = build_popup(&full_record(), "#ff0000", PopupFields::Full);

        let labels = [
            "Lake Information",
            "Latitude",
            "Longitude",
            "Lake Area (ha)",
            "Elevation (m)",
            "Lake Type",
            "Supraglacial",
            "Glacier Area (ha)",
            "Slope glac&rarr;lake (&deg;)",
            "Glacier Contact",
            "Glacier Touch Count",
            "Nearest Glacier Dist (m)",
            "Glacier Elev (m)",
            "5-yr Expansion Rate",
            "10-yr Expansion Rate",
            "Observed GLOF",
            "Hazard Probability",
        ];
        let mut cursor = 0;
        for label in labels {
            let at = html[cursor..]
                .find(label)
                .unwrap_or_else(|| panic!("label {} missing or out of order", label));
            cursor += at + label.len();
        }
    }

    #[test]
    fn test_build_popup_applies_precisions() {
        let html = build_popup(&full_record(), "#ff0000", PopupFields::Full);
        assert!(html.contains("<b>Latitude:</b> 27.8993<br>"));
        assert!(html.contains("<b>Lake Area (ha):</b> 114.20<br>"));
        assert!(html.contains("<b>Elevation (m):</b> 5010<br>"));
        assert!(html.contains("<b>5-yr Expansion Rate:</b> 0.042<br>"));
        assert!(html.contains("Hazard Probability:</font></b> 0.82"));
    }

    #[test]
    fn test_build_popup_substitutes_na_for_missing_fields() {
        let record = LakeRecord {
            latitude: Some(28.0),
            longitude: Some(87.0),
            hazard_probability: 0.5,
            ..Default::default()
        };
        let html = build_popup(&record, "#ffa500", PopupFields::Full);
        assert!(html.contains("<b>Lake Area (ha):</b> N/A<br>"));
        assert!(html.contains("<b>Lake Type:</b> N/A<br>"));
        assert!(html.contains("<b>Observed GLOF:</b> N/A<br>"));
    }

    #[test]
    fn test_build_popup_nan_probability_renders_na() {
        let record = LakeRecord {
            latitude: Some(28.0),
            longitude: Some(87.0),
            hazard_probability: f64::NAN,
            ..Default::default()
        };
        let html = build_popup(&record, "#008000", PopupFields::Full);
        assert!(html.contains("Hazard Probability:</font></b> N/A"));
    }

    #[test]
    fn test_build_popup_infinite_probability_renders_na() {
        let record = LakeRecord {
            latitude: Some(28.0),
            longitude: Some(87.0),
            hazard_probability: f64::INFINITY,
            ..Default::default()
        };
        let html = build_popup(&record, "#8b0000", PopupFields::Full);
        assert!(html.contains("Hazard Probability:</font></b> N/A"));
    }

    #[test]
    fn test_build_popup_tints_probability_with_fill_color() {
        let html = build_popup(&full_record(), "#8b0000", PopupFields::Full);
        assert!(html.contains("<font color='#8b0000'>"));
    }

    #[test]
    fn test_build_popup_compact_omits_geometry_rows() {
        let record = full_record();
        let html = build_popup(&record, "#ff0000", PopupFields::Compact);
        assert!(!html.contains("Slope glac&rarr;lake"));
        assert!(!html.contains("Glacier Contact"));
        assert!(!html.contains("Glacier Touch Count"));
        assert!(html.contains("Nearest Glacier Dist (m)"));
    }

    #[test]
    fn test_escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html("<script>'x'&\"y\"</script>"),
            "&lt;script&gt;&#39;x&#39;&amp;&quot;y&quot;&lt;/script&gt;"
        );
        assert_eq!(escape_html("moraine-dammed"), "moraine-dammed");
    }
}
