//! KML placemark rendering.

use crate::geocode::GeocodeResult;

pub const KML_EXTENSION: &str = "kml";

const ICON_HREF: &str = "https://static.svodd.ru/geomatrix/icons/BRICK.png";
const ICON_COLOR: &str = "ffc3ff82";
const ICON_SCALE: &str = "1.3";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// XML-escape the canonical name inside `<name>`.
    pub escape_name: bool,
}

/// Render a single styled point placemark.
///
/// The description embeds the original clipboard text in an `<iframe>`, so
/// the placemark links back to the page it came from. Coordinates are copied
/// verbatim from the geocoder.
pub fn render_placemark(result: &GeocodeResult, clipboard: &str, options: RenderOptions) -> String {
    let name = if options.escape_name {
        escape_html(&result.canonical_name)
    } else {
        result.canonical_name.clone()
    };
    let iframe = format!(
        r#"<iframe src="{}" width="700" height="800" frameborder="0"></iframe>"#,
        escape_html(clipboard)
    );

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
	<Document>
		<Style id="customIcon">
			<IconStyle>
				<color>{ICON_COLOR}</color>
				<scale>{ICON_SCALE}</scale>
				<Icon>
					<href>{ICON_HREF}</href>
				</Icon>
			</IconStyle>
			<LabelStyle>
				<scale>0</scale>
			</LabelStyle>
			<ListStyle>
			</ListStyle>
		</Style>
		<Placemark>
			<name>{name}</name>
			<description><![CDATA[{iframe}]]></description>
			<styleUrl>#customIcon</styleUrl>
			<Point>
				<coordinates>{lon},{lat},0</coordinates>
			</Point>
		</Placemark>
	</Document>
</kml>"#,
        lon = result.longitude,
        lat = result.latitude,
    )
}

/// Escape the five HTML special characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
