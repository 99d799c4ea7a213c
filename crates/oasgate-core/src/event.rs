//! Gateway-event adaptation
//!
//! A thin field-mapping layer from a serverless gateway's proxy-event JSON
//! to the normalized request shape the validation layer works with.
//!
//! Copyright (c) 2025 Oasgate Team
//! Licensed under the Apache-2.0 license

use crate::error::EventError;
use crate::types::RequestDescriptor;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Parsed request parameters, grouped by location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    pub query: HashMap<String, String>,
    pub header: HashMap<String, String>,
    pub path: HashMap<String, String>,
    pub cookie: HashMap<String, String>,
}

/// A gateway event after field mapping, ready for request validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    /// Path, method, and mimetype; the context for error addressing
    pub descriptor: RequestDescriptor,
    /// Scheme and host, e.g. `https://api.example.test`
    pub host_url: String,
    /// Host URL joined with the resource path
    pub full_url_pattern: String,
    /// Parameters grouped by location
    pub parameters: RequestParameters,
    /// Raw request body; objects are re-serialized to JSON text
    pub body: String,
}

/// Maps a gateway proxy event into a [`NormalizedRequest`].
///
/// Required event fields: `path`, `httpMethod`, `headers` with
/// `X-Forwarded-Proto`, `Host`, and `Content-Type`. Everything else
/// defaults to empty.
#[derive(Debug)]
pub struct EventParser<'a> {
    event: &'a Value,
}

impl<'a> EventParser<'a> {
    /// Create a parser over a gateway event payload
    pub fn new(event: &'a Value) -> Self {
        Self { event }
    }

    /// Map the event into a normalized request
    pub fn event_to_request(&self) -> Result<NormalizedRequest, EventError> {
        if !self.event.is_object() {
            return Err(EventError::NotAnObject);
        }

        Ok(NormalizedRequest {
            descriptor: RequestDescriptor::new(self.path()?, self.method()?, self.mimetype()?),
            host_url: self.host_url()?,
            full_url_pattern: self.full_url_pattern()?,
            parameters: self.parameters()?,
            body: self.body(),
        })
    }

    /// The gateway's logical resource path
    pub fn path(&self) -> Result<String, EventError> {
        self.event
            .get("path")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(EventError::MissingField { field: "path" })
    }

    /// The HTTP method, lowercased
    pub fn method(&self) -> Result<String, EventError> {
        self.event
            .get("httpMethod")
            .and_then(Value::as_str)
            .map(str::to_lowercase)
            .ok_or(EventError::MissingField { field: "httpMethod" })
    }

    /// The request content type
    pub fn mimetype(&self) -> Result<String, EventError> {
        self.header("Content-Type", "headers.Content-Type")
    }

    /// Scheme and host as forwarded by the gateway
    pub fn host_url(&self) -> Result<String, EventError> {
        let proto = self.header("X-Forwarded-Proto", "headers.X-Forwarded-Proto")?;
        let host = self.header("Host", "headers.Host")?;

        Ok(format!("{proto}://{host}"))
    }

    /// Host URL joined with the resource path
    pub fn full_url_pattern(&self) -> Result<String, EventError> {
        Ok(format!("{}{}", self.host_url()?, self.path()?))
    }

    /// All request parameters, grouped by location
    pub fn parameters(&self) -> Result<RequestParameters, EventError> {
        Ok(RequestParameters {
            query: self.string_map("queryStringParameters"),
            header: headers_map(self.headers()?),
            path: self.string_map("pathParameters"),
            cookie: self.cookies(),
        })
    }

    /// The raw request body.
    ///
    /// A string body is passed through verbatim; an object body is
    /// serialized back to JSON text; an absent body is empty.
    pub fn body(&self) -> String {
        match self.event.get("body") {
            Some(Value::String(body)) => body.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    fn headers(&self) -> Result<&'a Map<String, Value>, EventError> {
        self.event
            .get("headers")
            .and_then(Value::as_object)
            .ok_or(EventError::MissingField { field: "headers" })
    }

    fn header(&self, name: &str, field: &'static str) -> Result<String, EventError> {
        self.headers()?
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(EventError::MissingField { field })
    }

    fn string_map(&self, field: &str) -> HashMap<String, String> {
        self.event
            .get(field)
            .and_then(Value::as_object)
            .map(headers_map)
            .unwrap_or_default()
    }

    // Each entry of the `cookies` array holds one or more `name=value`
    // pairs separated by `;`. A pair without a value yields an empty value.
    fn cookies(&self) -> HashMap<String, String> {
        let entries = self
            .event
            .get("cookies")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut jar = HashMap::new();
        for entry in entries {
            let Some(entry) = entry.as_str() else { continue };

            for cookie in entry.replace(' ', "").split(';') {
                if cookie.is_empty() {
                    continue;
                }
                let mut parts = cookie.split('=');
                let name = parts.next().unwrap_or_default();
                let value = parts.next().unwrap_or_default();
                jar.insert(name.to_string(), value.to_string());
            }
        }
        jar
    }
}

fn headers_map(map: &Map<String, Value>) -> HashMap<String, String> {
    map.iter()
        .map(|(k, v)| (k.clone(), text(v)))
        .collect()
}

// Non-string values keep their JSON rendering; strings lose the quotes.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event() -> Value {
        json!({
            "path": "/test-path/test-endpoint",
            "httpMethod": "POST",
            "headers": {
                "X-Forwarded-Proto": "https",
                "Host": "api.example.test",
                "Content-Type": "application/json",
            },
            "queryStringParameters": {"param_1": "Param 1"},
            "pathParameters": {"id": "42"},
            "cookies": ["session=abc123; theme=dark"],
            "body": {"param_1": "Param 1"},
        })
    }

    #[test]
    fn test_event_to_request() {
        let event = event();
        let request = EventParser::new(&event).event_to_request().unwrap();

        assert_eq!(request.descriptor.path, "/test-path/test-endpoint");
        assert_eq!(request.descriptor.method, "post");
        assert_eq!(request.descriptor.mimetype, "application/json");
        assert_eq!(request.host_url, "https://api.example.test");
        assert_eq!(
            request.full_url_pattern,
            "https://api.example.test/test-path/test-endpoint"
        );
        assert_eq!(
            request.parameters.query.get("param_1"),
            Some(&"Param 1".to_string())
        );
        assert_eq!(request.parameters.path.get("id"), Some(&"42".to_string()));
        assert_eq!(
            request.parameters.header.get("Host"),
            Some(&"api.example.test".to_string())
        );
        assert_eq!(request.body, r#"{"param_1":"Param 1"}"#);
    }

    #[test]
    fn test_string_body_is_passed_through() {
        let mut event = event();
        event["body"] = json!("raw text");

        assert_eq!(EventParser::new(&event).body(), "raw text");
    }

    #[test]
    fn test_absent_body_is_empty() {
        let mut event = event();
        event.as_object_mut().unwrap().remove("body");

        assert_eq!(EventParser::new(&event).body(), "");
    }

    #[test]
    fn test_cookie_parsing() {
        let event = json!({
            "cookies": ["a=1; b=2", "c", "d=x=y"],
        });
        let cookies = EventParser::new(&event).cookies();

        assert_eq!(cookies.get("a"), Some(&"1".to_string()));
        assert_eq!(cookies.get("b"), Some(&"2".to_string()));
        assert_eq!(cookies.get("c"), Some(&String::new()));
        assert_eq!(cookies.get("d"), Some(&"x".to_string()));
    }

    #[test]
    fn test_missing_required_fields() {
        let cases: Vec<(&str, &str)> = vec![
            ("path", "path"),
            ("httpMethod", "httpMethod"),
            ("headers", "headers"),
        ];

        for (removed, reported) in cases {
            let mut event = event();
            event.as_object_mut().unwrap().remove(removed);

            let err = EventParser::new(&event).event_to_request().unwrap_err();
            assert_eq!(err, EventError::MissingField { field: reported });
        }
    }

    #[test]
    fn test_missing_required_headers() {
        let cases: Vec<(&str, &str)> = vec![
            ("X-Forwarded-Proto", "headers.X-Forwarded-Proto"),
            ("Host", "headers.Host"),
            ("Content-Type", "headers.Content-Type"),
        ];

        for (removed, reported) in cases {
            let mut event = event();
            event["headers"].as_object_mut().unwrap().remove(removed);

            let err = EventParser::new(&event).event_to_request().unwrap_err();
            assert_eq!(err, EventError::MissingField { field: reported });
        }
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let event = json!({
            "path": "/ping",
            "httpMethod": "GET",
            "headers": {
                "X-Forwarded-Proto": "https",
                "Host": "api.example.test",
                "Content-Type": "application/json",
            },
        });
        let request = EventParser::new(&event).event_to_request().unwrap();

        assert!(request.parameters.query.is_empty());
        assert!(request.parameters.path.is_empty());
        assert!(request.parameters.cookie.is_empty());
        assert_eq!(request.body, "");
    }

    #[test]
    fn test_non_object_event() {
        let event = json!("not an event");
        let err = EventParser::new(&event).event_to_request().unwrap_err();
        assert_eq!(err, EventError::NotAnObject);
    }

    #[test]
    fn test_null_parameter_sections_are_treated_as_absent() {
        let mut event = event();
        event["queryStringParameters"] = Value::Null;
        event["pathParameters"] = Value::Null;

        let request = EventParser::new(&event).event_to_request().unwrap();
        assert!(request.parameters.query.is_empty());
        assert!(request.parameters.path.is_empty());
    }
}
