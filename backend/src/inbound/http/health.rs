//! Readiness and liveness endpoints tied to the lookup service lifecycle.
//!
//! The service starts in [`ServicePhase::Starting`], moves to
//! [`ServicePhase::Serving`] once the lookup pipeline is built and the socket
//! is bound, and to [`ServicePhase::Draining`] when shutdown begins.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::http::header::CACHE_CONTROL;
use actix_web::{HttpResponse, get, web};
use serde::Serialize;

/// Lifecycle phase reported by the health endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServicePhase {
    Starting,
    Serving,
    Draining,
}

impl ServicePhase {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Serving,
            2 => Self::Draining,
            _ => Self::Starting,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            Self::Starting => 0,
            Self::Serving => 1,
            Self::Draining => 2,
        }
    }
}

/// Shared lifecycle state read by the health endpoints.
#[derive(Debug, Default)]
pub struct HealthState {
    phase: AtomicU8,
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the lookup pipeline is wired and the listener is bound.
    ///
    /// Has no effect once draining has begun.
    pub fn mark_serving(&self) {
        let _ = self.phase.compare_exchange(
            ServicePhase::Starting.as_u8(),
            ServicePhase::Serving.as_u8(),
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Record that shutdown has begun so both endpoints start failing.
    pub fn mark_draining(&self) {
        self.phase
            .store(ServicePhase::Draining.as_u8(), Ordering::Release);
    }

    pub fn phase(&self) -> ServicePhase {
        ServicePhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Lookups may be routed here only while serving.
    pub fn is_ready(&self) -> bool {
        self.phase() == ServicePhase::Serving
    }

    /// The process stays alive through startup and fails once draining.
    pub fn is_alive(&self) -> bool {
        self.phase() != ServicePhase::Draining
    }
}

#[derive(Serialize)]
struct HealthBody {
    status: ServicePhase,
}

fn health_response(healthy: bool, phase: ServicePhase) -> HttpResponse {
    let mut builder = if healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    builder
        .insert_header((CACHE_CONTROL, "no-store"))
        .json(HealthBody { status: phase })
}

/// 200 while serving lookups, 503 while starting or draining.
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    health_response(state.is_ready(), state.phase())
}

/// 200 until draining begins.
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    health_response(state.is_alive(), state.phase())
}
