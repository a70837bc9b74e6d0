//! API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. CORS: any origin
//! 2. Access log: request id, method, path, status, latency

pub mod access;
