mod schema;

use std::time::Duration;

use tracing::info;
use url::{Url, form_urlencoded};

use crate::error::{Clip2KmlError, Result};
use crate::toponym::GeocodeQuery;
use schema::GeocodeResponse;

pub const DEFAULT_ENDPOINT: &str = "https://geocode-maps.yandex.ru/1.x/";

const USER_AGENT: &str = concat!("clip2kml/", env!("CARGO_PKG_VERSION"));

/// Canonical name and coordinates, as the geocoder spelled them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeResult {
    pub canonical_name: String,
    pub longitude: String,
    pub latitude: String,
}

pub trait Geocoder {
    fn geocode(&self, api_key: &str, query: &GeocodeQuery) -> Result<GeocodeResult>;
}

/// Blocking HTTP client for a Yandex-compatible geocoder.
pub struct HttpGeocoder {
    agent: ureq::Agent,
    endpoint: Url,
}

impl HttpGeocoder {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            agent: builder.build(),
            endpoint,
        }
    }

    fn request_url(&self, api_key: &str, query: &GeocodeQuery) -> Url {
        let api_key: String = form_urlencoded::byte_serialize(api_key.as_bytes()).collect();
        let mut url = self.endpoint.clone();
        url.set_query(Some(&format!(
            "format=json&apikey={}&geocode={}",
            api_key,
            query.as_str()
        )));
        url
    }

    fn fetch(&self, api_key: &str, query: &GeocodeQuery) -> Result<String> {
        let url = self.request_url(api_key, query);
        info!(url = %self.request_url("***", query), "sending geocoder request");

        match self.agent.get(url.as_str()).call() {
            Ok(response) => {
                info!(status = response.status(), "geocoder responded");
                response
                    .into_string()
                    .map_err(|e| Clip2KmlError::Transport(format!("failed to read body: {e}")))
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(Clip2KmlError::Service { status, body })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(Clip2KmlError::Transport(transport.to_string()))
            }
        }
    }
}

impl Geocoder for HttpGeocoder {
    fn geocode(&self, api_key: &str, query: &GeocodeQuery) -> Result<GeocodeResult> {
        let body = self.fetch(api_key, query)?;
        let response = GeocodeResponse::parse(&body)?;
        info!(results = response.result_count(), "parsed geocoder response");
        response.into_first_result(query.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const MOSCOW: &str = r#"{"response":{"GeoObjectCollection":{"featureMember":[
        {"GeoObject":{"name":"Красная площадь","Point":{"pos":"37.61 55.75"}}}]}}}"#;

    fn geocoder_for(server: &Server) -> HttpGeocoder {
        let endpoint = Url::parse(&format!("{}/1.x/", server.url())).unwrap();
        HttpGeocoder::new(endpoint, Some(Duration::from_secs(5)))
    }

    #[test]
    fn test_request_url() {
        let geocoder = HttpGeocoder::new(Url::parse(DEFAULT_ENDPOINT).unwrap(), None);
        let url = geocoder.request_url("k-1", &GeocodeQuery::new("Red Square"));
        assert_eq!(
            url.as_str(),
            "https://geocode-maps.yandex.ru/1.x/?format=json&apikey=k-1&geocode=Red+Square"
        );
    }

    #[test]
    fn test_geocode_success() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/1.x/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("format".into(), "json".into()),
                Matcher::UrlEncoded("apikey".into(), "test-key".into()),
                Matcher::UrlEncoded("geocode".into(), "Red Square".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(MOSCOW)
            .create();

        let result = geocoder_for(&server)
            .geocode("test-key", &GeocodeQuery::new("Red Square"))
            .unwrap();

        mock.assert();
        assert_eq!(result.canonical_name, "Красная площадь");
        assert_eq!(result.longitude, "37.61");
        assert_eq!(result.latitude, "55.75");
    }

    #[test]
    fn test_service_error_surfaces_body() {
        let mut server = Server::new();
        server
            .mock("GET", "/1.x/")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body("Invalid api key")
            .create();

        let err = geocoder_for(&server)
            .geocode("test-key", &GeocodeQuery::new("Red Square"))
            .unwrap_err();

        match err {
            Clip2KmlError::Service { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "Invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_schema_error() {
        let mut server = Server::new();
        server
            .mock("GET", "/1.x/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"unexpected":true}"#)
            .create();

        let err = geocoder_for(&server)
            .geocode("test-key", &GeocodeQuery::new("x"))
            .unwrap_err();
        assert!(matches!(err, Clip2KmlError::Schema(_)));
    }

    #[test]
    fn test_not_found() {
        let mut server = Server::new();
        server
            .mock("GET", "/1.x/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"response":{"GeoObjectCollection":{"featureMember":[]}}}"#)
            .create();

        let err = geocoder_for(&server)
            .geocode("test-key", &GeocodeQuery::new("Atlantis"))
            .unwrap_err();
        assert!(matches!(err, Clip2KmlError::NotFound { .. }));
    }

    #[test]
    fn test_transport_error() {
        // Nothing listens on port 9 of the loopback interface.
        let endpoint = Url::parse("http://127.0.0.1:9/1.x/").unwrap();
        let geocoder = HttpGeocoder::new(endpoint, Some(Duration::from_secs(2)));

        let err = geocoder.geocode("k", &GeocodeQuery::new("x")).unwrap_err();
        assert!(matches!(err, Clip2KmlError::Transport(_)));
    }
}
