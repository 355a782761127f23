//! JSON request/response boundary.
//!
//! Turns a JSON request body into a simulation run and the outcome into a
//! status code plus JSON body. Transport (routes, methods, CORS, process
//! lifecycle) belongs to whatever hosts this function.
//!
//! # Request
//!
//! ```text
//! { "processes": [ {"pid": "P1", "arrival": 0, "burst": 6}, ... ],
//!   "algorithm": "rr",        // default "fcfs"
//!   "time_quantum": 2 }       // default 2, Round-Robin only
//! ```
//!
//! # Response
//!
//! `200` with the `RunResult` JSON, or `400` with `{"error": "..."}`.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, RunResult};
use crate::scheduler::{simulate, Algorithm, SimulationConfig, DEFAULT_QUANTUM};

/// HTTP-style status for a successful run.
pub const STATUS_OK: u16 = 200;
/// HTTP-style status for a rejected request.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// HTTP-style status for an unexpected failure while encoding the result.
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Decoded request body.
///
/// Process entries are kept as raw JSON so that a malformed entry can be
/// reported by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Raw process descriptors.
    #[serde(default)]
    pub processes: Vec<Value>,
    /// Algorithm selector.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Round-Robin quantum.
    #[serde(default = "default_quantum")]
    pub time_quantum: i64,
}

fn default_algorithm() -> String {
    Algorithm::Fcfs.as_str().to_string()
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

impl SimulationRequest {
    /// Creates a request from typed descriptors.
    ///
    /// # Errors
    /// Any descriptor that fails to encode aborts the whole request.
    pub fn new(processes: &[ProcessDescriptor], algorithm: Algorithm) -> serde_json::Result<Self> {
        let processes = processes
            .iter()
            .map(serde_json::to_value)
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(Self {
            processes,
            algorithm: algorithm.as_str().to_string(),
            time_quantum: DEFAULT_QUANTUM,
        })
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.time_quantum = quantum;
        self
    }

    /// Decodes every process entry.
    ///
    /// # Errors
    /// `EmptyInput` if there are none, `MalformedDescriptor` for the first
    /// entry that does not decode.
    pub fn descriptors(&self) -> Result<Vec<ProcessDescriptor>, ScheduleError> {
        if self.processes.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }

        self.processes
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                ProcessDescriptor::deserialize(raw).map_err(|e| {
                    let pid = raw.get("pid").map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    });
                    ScheduleError::malformed(index, pid, e.to_string())
                })
            })
            .collect()
    }

    /// Runs the requested simulation.
    pub fn run(&self) -> Result<RunResult, ScheduleError> {
        let processes = self.descriptors()?;
        let algorithm: Algorithm = self.algorithm.parse()?;
        let config = SimulationConfig::new().with_quantum(self.time_quantum);
        simulate(&processes, algorithm, &config)
    }
}

/// Status code and JSON body produced for a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body.
    pub body: Value,
}

impl Reply {
    /// Successful reply carrying a run result.
    pub fn ok(result: &RunResult) -> Self {
        match serde_json::to_value(result) {
            Ok(body) => Self {
                status: STATUS_OK,
                body,
            },
            Err(e) => Self::error(STATUS_INTERNAL_ERROR, e.to_string()),
        }
    }

    /// Error reply `{"error": message}`.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    /// Whether the status denotes success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<ScheduleError> for Reply {
    fn from(err: ScheduleError) -> Self {
        Reply::error(STATUS_BAD_REQUEST, err.to_string())
    }
}

/// Handles a decoded request.
pub fn handle(request: &SimulationRequest) -> Reply {
    match request.run() {
        Ok(result) => Reply::ok(&result),
        Err(err) => {
            warn!("rejected simulation request: {err}");
            err.into()
        }
    }
}

/// Handles a raw JSON request body.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::request::handle_request;
///
/// let reply = handle_request(r#"{"processes": [], "algorithm": "fcfs"}"#);
/// assert_eq!(reply.status, 400);
/// assert_eq!(reply.body["error"], "No processes provided");
/// ```
pub fn handle_request(body: &str) -> Reply {
    match serde_json::from_str::<SimulationRequest>(body) {
        Ok(request) => handle(&request),
        Err(e) => {
            warn!("unparseable simulation request: {e}");
            Reply::error(STATUS_BAD_REQUEST, format!("Invalid request body: {e}"))
        }
    }
}
