//! Error context for enriched error information.

use chrono::{DateTime, Utc};

/// Context attached to an error: what was being done and where.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Operation that failed, e.g. `"load_config"`.
    pub operation: String,

    /// Component where the error originated.
    pub component: Option<String>,

    /// File, collection or document the operation targeted.
    pub target: Option<String>,

    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            component: None,
            target: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Key=value form for log lines.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];
        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }
        if let Some(ref target) = self.target {
            parts.push(format!("target={}", target));
        }
        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));
        parts.join(" ")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;
        if let Some(ref target) = self.target {
            write!(f, " {}", target)?;
        }
        Ok(())
    }
}
