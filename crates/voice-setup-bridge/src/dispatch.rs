// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command bridge: method name -> handler -> exactly one outcome.

use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, error, instrument};

use voice_setup_core::types::{ErrorCode, MethodOutcome, MethodRequest, methods};

use crate::context::{BindingContext, panic_message};
use crate::handlers::{self, Handler};
use crate::traits::PlatformSurface;

/// One row of the handler table.
#[derive(Debug, Clone, Copy)]
pub struct HandlerEntry {
    pub method: &'static str,
    /// Code reported if the handler itself blows up.
    pub error_code: ErrorCode,
    pub handler: Handler,
}

const STANDARD_HANDLERS: &[HandlerEntry] = &[
    HandlerEntry {
        method: methods::OPEN_TTS_SETTINGS,
        error_code: ErrorCode::TtsSettings,
        handler: handlers::open_tts_settings,
    },
    HandlerEntry {
        method: methods::OPEN_SETTINGS,
        error_code: ErrorCode::Settings,
        handler: handlers::open_settings,
    },
    HandlerEntry {
        method: methods::CHECK_TTS_ENGINE,
        error_code: ErrorCode::TtsCheck,
        handler: handlers::check_tts_engine,
    },
];

/// Fixed mapping from method identifier to handler.
#[derive(Debug, Clone, Copy)]
pub struct HandlerTable {
    entries: &'static [HandlerEntry],
}

impl HandlerTable {
    /// The three voice setup methods.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_HANDLERS,
        }
    }

    pub fn lookup(&self, method: &str) -> Option<&HandlerEntry> {
        self.entries.iter().find(|entry| entry.method == method)
    }

    pub fn methods(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.method)
    }
}

impl Default for HandlerTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// The bridge endpoint: a handler table plus the current binding.
///
/// Requests are handled one at a time on the caller's thread. Nothing a
/// handler or surface does escapes `dispatch` other than its outcome.
#[derive(Default)]
pub struct CommandBridge {
    context: BindingContext,
    table: HandlerTable,
}

impl CommandBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the host UI becomes active.
    pub fn attach(&mut self, surface: &Rc<dyn PlatformSurface>) {
        self.context.attach(surface);
    }

    /// Called when the host UI goes away, before the surface is released.
    pub fn detach(&mut self) {
        self.context.detach();
    }

    pub fn is_bound(&self) -> bool {
        self.context.is_bound()
    }

    pub fn table(&self) -> &HandlerTable {
        &self.table
    }

    /// Resolve and run one request.
    pub fn dispatch(&self, request: &MethodRequest) -> MethodOutcome {
        self.call(&request.method, request.arguments.as_ref())
    }

    #[instrument(skip(self, args))]
    pub fn call(&self, method: &str, args: Option<&Value>) -> MethodOutcome {
        let Some(entry) = self.table.lookup(method) else {
            debug!("method not implemented");
            return MethodOutcome::NotImplemented;
        };

        // Launches already contain surface panics; this catches anything else a
        // handler does so nothing unwinds into the host (it may be a JNI frame).
        let context = &self.context;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| (entry.handler)(context, args)))
            .unwrap_or_else(|payload| {
                let reason = panic_message(payload.as_ref());
                error!(reason, "handler panicked");
                MethodOutcome::failure(
                    entry.error_code,
                    format!("platform action panicked: {reason}"),
                )
            });

        debug!(success = outcome.is_success(), "dispatched");
        outcome
    }
}
