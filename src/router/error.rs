use thiserror::Error;

/// Errors that can occur while routing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A non-flag candidate matched no registered command name.
    #[error("Command '{candidate}' not found")]
    RoutingFailed { candidate: String },
}

impl RouteError {
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::RoutingFailed { .. } => "routing_failed",
        }
    }

    /// The token that could not be routed.
    pub fn candidate(&self) -> &str {
        match self {
            RouteError::RoutingFailed { candidate } => candidate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_failed_message() {
        let err = RouteError::RoutingFailed {
            candidate: "charlie".to_string(),
        };
        assert_eq!(err.to_string(), "Command 'charlie' not found");
        assert_eq!(err.error_type(), "routing_failed");
        assert_eq!(err.candidate(), "charlie");
    }
}
