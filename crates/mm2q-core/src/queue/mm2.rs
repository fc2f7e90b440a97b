//! Closed-form metrics for an M/M/2 queue.
//!
//! Two identical servers share one queue. With λ = 1/arrival_time and
//! μ = 1/service_time:
//!
//! - ρ  = λ / 2μ
//! - W  = 1 / (μ - λ/2)
//! - Wq = λ² / (2μ(μ - λ/2))
//! - L  = λW, Lq = λWq
//!
//! The queue is bounded only while ρ < 1. At ρ >= 1 the calculation stops
//! and reports [`Outcome::Unstable`].

use serde::Serialize;

use super::input::InputPair;

/// User-facing explanation for [`Outcome::Unstable`].
pub const UNSTABLE_MESSAGE: &str =
    "system is unstable: utilization ≥ 1 (arrival rate too high or service rate too slow)";

/// Every quantity produced for one stable input pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsResult {
    pub arrival_time: f64,
    pub service_time: f64,
    /// λ, customers per minute.
    pub arrival_rate: f64,
    /// μ, customers per minute per server.
    pub service_rate: f64,
    /// ρ
    pub utilization: f64,
    /// μ - λ/2
    pub denom_w: f64,
    /// 2μ(μ - λ/2)
    pub denom_wq: f64,
    /// W, minutes.
    pub mean_time_in_system: f64,
    /// Wq, minutes.
    pub mean_wait_in_queue: f64,
    /// L
    pub mean_number_in_system: f64,
    /// Lq
    pub mean_number_in_queue: f64,
}

/// Result of one calculation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Stable(MetricsResult),
    /// Utilization >= 1: the queue grows without bound.
    Unstable,
}

impl Outcome {
    pub fn is_stable(&self) -> bool {
        matches!(self, Outcome::Stable(_))
    }

    pub fn metrics(&self) -> Option<&MetricsResult> {
        match self {
            Outcome::Stable(m) => Some(m),
            Outcome::Unstable => None,
        }
    }
}

/// Compute the metrics for a validated input pair.
pub fn compute(input: InputPair) -> Outcome {
    compute_raw(input.arrival_time(), input.service_time())
}

/// Same as [`compute`] for callers that guarantee both values lie in
/// `input::MIN_TIME..=input::MAX_TIME`. Outside that range the metrics may
/// not be finite.
pub fn compute_raw(arrival_time: f64, service_time: f64) -> Outcome {
    let arrival_rate = 1.0 / arrival_time;
    let service_rate = 1.0 / service_time;
    let utilization = arrival_rate / (2.0 * service_rate);

    // Exact comparison: ρ == 1 is unstable. NaN is unstable too.
    if utilization >= 1.0 || utilization.is_nan() {
        return Outcome::Unstable;
    }

    let denom_w = service_rate - arrival_rate / 2.0;
    let mean_time_in_system = 1.0 / denom_w;

    let denom_wq = 2.0 * service_rate * (service_rate - arrival_rate / 2.0);
    let mean_wait_in_queue = (arrival_rate * arrival_rate) / denom_wq;

    Outcome::Stable(MetricsResult {
        arrival_time,
        service_time,
        arrival_rate,
        service_rate,
        utilization,
        denom_w,
        denom_wq,
        mean_time_in_system,
        mean_wait_in_queue,
        mean_number_in_system: arrival_rate * mean_time_in_system,
        mean_number_in_queue: arrival_rate * mean_wait_in_queue,
    })
}
