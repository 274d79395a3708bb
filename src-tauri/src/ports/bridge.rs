//! Invocation bridge port trait

use serde_json::Value;

use crate::domain::{CuedeckResult, InvocationRequest};

/// The capability the command form submits requests to: a named backend
/// operation with ordered string arguments, resolving to an opaque value.
///
/// The form never inspects the verb or the response; it only forwards what
/// the operator typed and logs whatever comes back. Substituting a fake
/// implementation is the intended way to test the form without a backend.
///
/// `Send + Sync` so each submission can carry a clone of the `Arc` onto
/// its dispatch thread.
pub trait InvocationBridge: Send + Sync {
    /// Execute one request and return the backend's opaque response.
    fn invoke(&self, request: InvocationRequest) -> CuedeckResult<Value>;
}
