//! Call-name vocabulary.
//!
//! Names are compared as whole identifiers, case-insensitively. Qualified
//! paths never reach here: providers hand over the simple name only.

/// Resilience-pattern calls.
pub const ADVANCED_CALLS: [&str; 4] = ["timeout", "retry", "circuitbreaker", "backoff"];

/// Explicit status-code inspection calls.
pub const BASIC_CALLS: [&str; 1] = ["statuscode"];

/// What a call site contributes to the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSignal {
    Basic,
    Advanced,
}

/// Match a simple invoked name against the vocabulary.
pub fn call_signal(name: &str) -> Option<CallSignal> {
    let lowered = name.to_lowercase();
    if ADVANCED_CALLS.contains(&lowered.as_str()) {
        Some(CallSignal::Advanced)
    } else if BASIC_CALLS.contains(&lowered.as_str()) {
        Some(CallSignal::Basic)
    } else {
        None
    }
}
