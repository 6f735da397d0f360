//! Session state and the session store contract.
//!
//! The engine itself is stateless; everything a questionnaire session
//! accumulates lives in a [`SessionState`] blob persisted by a
//! [`SessionStore`]. The store is an opaque key-value contract: callers
//! must guarantee at most one concurrent advance per session id; the
//! engine is not safe against two answer submissions racing on the same
//! answer set, and the store resolves such races last-write-wins.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::catalog::ConfigModule;
use crate::error::{EngineError, EngineResult};
use crate::models::{AnswerSet, PaymentMethodRecord, PayrollArea};

/// The persisted state of one questionnaire session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// The module this session is configuring.
    pub module: ConfigModule,
    /// The answers collected so far.
    pub answers: AnswerSet,
    /// The id of the question currently awaiting an answer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_question_id: Option<String>,
    /// Generated payroll areas, once the payroll module finalized.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payroll_areas: Vec<PayrollArea>,
    /// Generated payment method records, once the payment module finalized.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_methods: Vec<PaymentMethodRecord>,
    /// Whether the session's question flow is complete.
    pub done: bool,
}

impl SessionState {
    /// Creates a fresh session state for a module.
    pub fn new(module: ConfigModule) -> Self {
        Self {
            module,
            answers: AnswerSet::new(),
            current_question_id: None,
            payroll_areas: Vec::new(),
            payment_methods: Vec::new(),
            done: false,
        }
    }
}

/// Opaque persistence for session state, keyed by session id.
pub trait SessionStore {
    /// Reads a session's state.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SessionNotFound`] for an unknown id.
    fn get(&self, session_id: &str) -> EngineResult<SessionState>;

    /// Creates or replaces a session's state.
    fn upsert(&mut self, session_id: &str, state: SessionState) -> EngineResult<()>;

    /// Deletes a session.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SessionNotFound`] for an unknown id.
    fn delete(&mut self, session_id: &str) -> EngineResult<()>;
}

/// An in-memory session store.
///
/// Suitable for tests and single-process use; production deployments are
/// expected to supply a durable [`SessionStore`] implementation.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: HashMap<String, SessionState>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a generated id and returns the id.
    pub fn create(&mut self, state: SessionState) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.sessions.insert(session_id.clone(), state);
        session_id
    }

    /// Returns the number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Checks whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, session_id: &str) -> EngineResult<SessionState> {
        self.sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| EngineError::SessionNotFound {
                session_id: session_id.to_string(),
            })
    }

    fn upsert(&mut self, session_id: &str, state: SessionState) -> EngineResult<()> {
        self.sessions.insert(session_id.to_string(), state);
        Ok(())
    }

    fn delete(&mut self, session_id: &str) -> EngineResult<()> {
        self.sessions
            .remove(session_id)
            .map(|_| ())
            .ok_or_else(|| EngineError::SessionNotFound {
                session_id: session_id.to_string(),
            })
    }
}
