//! Wire format of the geocoder JSON response.

use serde::Deserialize;

use super::GeocodeResult;
use crate::error::{Clip2KmlError, Result};

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(rename = "GeoObjectCollection")]
    geo_object_collection: GeoObjectCollection,
}

#[derive(Debug, Deserialize)]
struct GeoObjectCollection {
    /// Only the first member is decoded; later candidates may have any shape.
    #[serde(rename = "featureMember")]
    feature_member: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    geo_object: GeoObject,
}

#[derive(Debug, Deserialize)]
struct GeoObject {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "Point")]
    point: Point,
}

#[derive(Debug, Deserialize)]
struct Point {
    pos: String,
}

impl GeocodeResponse {
    pub(crate) fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Clip2KmlError::Schema(e.to_string()))
    }

    pub(crate) fn result_count(&self) -> usize {
        self.response.geo_object_collection.feature_member.len()
    }

    /// Resolve the first feature member; the rest are ignored.
    pub(crate) fn into_first_result(self, query: &str) -> Result<GeocodeResult> {
        let first = self
            .response
            .geo_object_collection
            .feature_member
            .into_iter()
            .next()
            .ok_or_else(|| Clip2KmlError::NotFound {
                query: query.to_string(),
            })?;
        let first: FeatureMember =
            serde_json::from_value(first).map_err(|e| Clip2KmlError::Schema(e.to_string()))?;

        let GeoObject { name, point } = first.geo_object;
        let name = name
            .filter(|name| !name.is_empty())
            .ok_or(Clip2KmlError::MissingCanonicalName)?;

        let (longitude, latitude) = split_pos(&point.pos)?;

        Ok(GeocodeResult {
            canonical_name: name,
            longitude,
            latitude,
        })
    }
}

/// Split `"<lon> <lat>"` into its two tokens, kept verbatim.
fn split_pos(pos: &str) -> Result<(String, String)> {
    let mut tokens = pos.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(lon), Some(lat), None) => Ok((lon.to_string(), lat.to_string())),
        _ => Err(Clip2KmlError::InvalidCoordinates {
            pos: pos.to_string(),
        }),
    }
}
