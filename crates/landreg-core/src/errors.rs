use landreg_core_types::RequestId;
use thiserror::Error;

/// Result type alias used by gateways and the aggregation service
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// tests, and client-facing responses. "Not found" on lookups is never an
/// error in this crate; `NotFound` is reserved for callers that need to
/// surface absence as a failure (the CLI, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    NotFound,
    ConstraintViolation,
    /// A gateway broke its contract (e.g. returned an entity without identity)
    ContractViolation,
    /// Transaction state misuse (nested begin, commit without begin)
    Transaction,
    Io,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::ContractViolation => "ERR_CONTRACT_VIOLATION",
            ExErrorKind::Transaction => "ERR_TRANSACTION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Faults raised by the registry core itself (as opposed to a gateway)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// A gateway returned a saved entity that still has no identity
    #[error("{entity} was saved but no identity was assigned")]
    MissingIdentity { entity: &'static str },

    /// `begin` was called while a transaction is already open
    #[error("A transaction is already active")]
    TransactionAlreadyActive,

    /// `commit` or `rollback` was called with no open transaction
    #[error("No transaction is active")]
    NoActiveTransaction,

    /// No identity above the highest one issued is left to assign
    #[error("identity space exhausted")]
    IdentityExhausted,
}

impl From<RegistryError> for ExError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::MissingIdentity { entity } => {
                ExError::new(ExErrorKind::ContractViolation)
                    .with_op("save")
                    .with_message(format!("{} was saved but no identity was assigned", entity))
            }
            RegistryError::TransactionAlreadyActive => ExError::new(ExErrorKind::Transaction)
                .with_op("begin")
                .with_message("A transaction is already active"),
            RegistryError::NoActiveTransaction => ExError::new(ExErrorKind::Transaction)
                .with_message("No transaction is active"),
            RegistryError::IdentityExhausted => ExError::new(ExErrorKind::Persistence)
                .with_op("save")
                .with_message("identity space exhausted"),
        }
    }
}
