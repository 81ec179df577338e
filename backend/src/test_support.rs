//! Test utilities for the address lookup crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled when running tests
//! or with the `test-support` feature.

pub mod scripted_http {
    //! Scripted transport double for driving the fetcher and NSW adapter
    //! without network access.
    //!
    //! Replies are queued per URL prefix. The last reply in a queue repeats
    //! once earlier replies are consumed, so "always 429" needs one entry.

    use std::collections::VecDeque;
    use std::sync::{Mutex, PoisonError};

    use async_trait::async_trait;
    use reqwest::{StatusCode, Url};

    use crate::outbound::http_fetch::{FetchedResponse, HttpTransport, TransportError};

    /// One scripted outcome.
    #[derive(Debug, Clone)]
    pub enum ScriptedReply {
        /// Answer with a status and body.
        Respond { status: u16, body: String },
        /// Fail as if the transport deadline expired.
        Timeout,
        /// Fail with a non-retryable transport error.
        Fail(String),
        /// Never answer.
        Hang,
    }

    impl ScriptedReply {
        /// A 200 response with `body`.
        pub fn ok(body: impl Into<String>) -> Self {
            Self::Respond {
                status: 200,
                body: body.into(),
            }
        }

        /// An empty response with `status`.
        pub fn status(status: u16) -> Self {
            Self::Respond {
                status,
                body: String::new(),
            }
        }
    }

    struct Route {
        prefix: String,
        replies: VecDeque<ScriptedReply>,
    }

    /// [`HttpTransport`] answering from per-prefix reply queues.
    #[derive(Default)]
    pub struct ScriptedTransport {
        routes: Mutex<Vec<Route>>,
        calls: Mutex<Vec<Url>>,
    }

    impl ScriptedTransport {
        /// Build a transport with no routes.
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue `replies` for URLs starting with `prefix`.
        #[must_use]
        pub fn route(self, prefix: impl Into<String>, replies: Vec<ScriptedReply>) -> Self {
            self.routes
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(Route {
                    prefix: prefix.into(),
                    replies: replies.into(),
                });
            self
        }

        /// Every URL requested so far, in order.
        pub fn calls(&self) -> Vec<Url> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Number of requests whose URL starts with `prefix`.
        pub fn calls_to(&self, prefix: &str) -> usize {
            self.calls()
                .iter()
                .filter(|url| url.as_str().starts_with(prefix))
                .count()
        }

        fn next_reply(&self, url: &Url) -> Option<ScriptedReply> {
            let mut routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
            let route = routes
                .iter_mut()
                .find(|route| url.as_str().starts_with(route.prefix.as_str()))?;
            if route.replies.len() > 1 {
                route.replies.pop_front()
            } else {
                route.replies.front().cloned()
            }
        }
    }

    #[async_trait]
    impl HttpTransport for ScriptedTransport {
        async fn get(&self, url: &Url) -> Result<FetchedResponse, TransportError> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(url.clone());

            match self.next_reply(url) {
                Some(ScriptedReply::Respond { status, body }) => {
                    let status =
                        StatusCode::from_u16(status).map_err(|err| TransportError::Failed {
                            message: err.to_string(),
                        })?;
                    Ok(FetchedResponse::new(status, body.into_bytes()))
                }
                Some(ScriptedReply::Timeout) => Err(TransportError::Timeout {
                    message: format!("scripted timeout for {url}"),
                }),
                Some(ScriptedReply::Fail(message)) => Err(TransportError::Failed { message }),
                Some(ScriptedReply::Hang) => std::future::pending().await,
                None => Err(TransportError::Failed {
                    message: format!("no scripted reply for {url}"),
                }),
            }
        }
    }
}

pub mod sleepers {
    //! Retry sleepers that avoid real delays.

    use std::sync::{Mutex, PoisonError};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::outbound::http_fetch::RetrySleeper;

    /// Returns immediately.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ImmediateSleeper;

    #[async_trait]
    impl RetrySleeper for ImmediateSleeper {
        async fn sleep(&self, _duration: Duration) {}
    }

    /// Records requested delays and returns immediately.
    #[derive(Default)]
    pub struct RecordingSleeper(pub Mutex<Vec<Duration>>);

    impl RecordingSleeper {
        /// Delays requested so far.
        pub fn recorded(&self) -> Vec<Duration> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    #[async_trait]
    impl RetrySleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(duration);
        }
    }
}

pub mod nsw_payloads {
    //! GeoJSON bodies shaped like NSW Spatial Services responses.

    use serde_json::json;

    /// Geocode body with one feature per `(id, address, site_oid, lon, lat)`.
    pub fn geocode_body(features: &[(i64, &str, i64, f64, f64)]) -> String {
        let features: Vec<_> = features
            .iter()
            .map(|(id, address, site_oid, longitude, latitude)| {
                json!({
                    "type": "Feature",
                    "id": id,
                    "geometry": { "type": "Point", "coordinates": [longitude, latitude] },
                    "properties": {
                        "address": address,
                        "principaladdresssiteoid": site_oid,
                    },
                })
            })
            .collect();
        json!({ "type": "FeatureCollection", "features": features }).to_string()
    }

    /// Boundary body with one feature per name, stored under `field`.
    pub fn boundary_body(field: &str, names: &[&str]) -> String {
        let features: Vec<_> = names
            .iter()
            .map(|name| {
                json!({
                    "type": "Feature",
                    "id": 1,
                    "geometry": null,
                    "properties": { field: name },
                })
            })
            .collect();
        json!({ "type": "FeatureCollection", "features": features }).to_string()
    }

    /// District body naming `district`.
    pub fn district_body(district: &str) -> String {
        boundary_body("districtname", &[district])
    }

    /// Suburb body naming `suburb`.
    pub fn suburb_body(suburb: &str) -> String {
        boundary_body("suburbname", &[suburb])
    }

    /// Bathurst geocode body used across tests.
    pub fn bathurst_geocode_body() -> String {
        geocode_body(&[(
            4_148_110,
            "346 PANORAMA AVENUE BATHURST",
            3_145_220,
            149.567,
            -33.429,
        )])
    }
}
