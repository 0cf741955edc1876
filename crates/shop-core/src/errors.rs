use thiserror::Error;

/// Result type alias using ShopError
pub type Result<T> = std::result::Result<T, ShopError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup/Validation
    InvalidInput,
    NotFound,
    ConstraintViolation,

    // Integration/IO
    Io,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus enough context
/// (operation, entity, message) to explain the failure in a log line.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
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
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (an id, a product name, an e-mail mask)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
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

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
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
            write!(f, " (entity: {})", entity_id)?;
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

/// Domain failures raised by shop operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShopError {
    /// No user matches the lookup key
    #[error("User not found: {key}")]
    UserNotFound { key: String },

    /// No product matches the lookup key
    #[error("Product not found: {name}")]
    ProductNotFound { name: String },

    /// An operation needed at least one order and the orders relation is empty
    #[error("No orders exist")]
    NoOrders,

    /// E-mail already belongs to another user
    #[error("E-mail already registered: {email}")]
    DuplicateEmail { email: String },

    /// Order points at a user or product that does not exist
    #[error("Order references missing user {user_id} or product {product_id}")]
    DanglingOrderReference { user_id: i64, product_id: i64 },
}

impl From<ShopError> for ExError {
    fn from(err: ShopError) -> Self {
        match err {
            ShopError::UserNotFound { key } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(key)
                .with_message("User not found"),

            ShopError::ProductNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(name)
                .with_message("Product not found"),

            ShopError::NoOrders => {
                ExError::new(ExErrorKind::NotFound).with_message("No orders exist")
            }

            ShopError::DuplicateEmail { email } => ExError::new(ExErrorKind::ConstraintViolation)
                .with_entity_id(email)
                .with_message("E-mail already registered"),

            ShopError::DanglingOrderReference {
                user_id,
                product_id,
            } => ExError::new(ExErrorKind::ConstraintViolation)
                .with_entity_id(format!("user:{}/product:{}", user_id, product_id))
                .with_message("Order references a missing user or product"),
        }
    }
}
