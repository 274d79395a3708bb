//! In-process invocation bridge
//!
//! Routes requests straight into the command router with no IPC involved.
//! This is what the command form talks to when the whole stack runs in one
//! process; tests substitute a fake bridge to inspect requests instead.

use serde_json::Value;

use crate::domain::{CuedeckResult, InvocationRequest};
use crate::ports::InvocationBridge;
use crate::router::CommandRouter;

pub struct LocalBridge {
    router: CommandRouter,
}

impl LocalBridge {
    pub fn new(router: CommandRouter) -> Self {
        Self { router }
    }
}

impl InvocationBridge for LocalBridge {
    fn invoke(&self, request: InvocationRequest) -> CuedeckResult<Value> {
        self.router.execute(&request)
    }
}
