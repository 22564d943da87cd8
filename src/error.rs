use thiserror::Error;

/// Why a remote actor call produced no usable reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// The hosting page never installed the agent object, or it lacks the
    /// requested method.
    #[error("backend agent is not installed on this page")]
    AgentMissing,

    /// The call itself rejected (network failure, remote trap, ...).
    #[error("call rejected: {0}")]
    Rejected(String),

    /// The call resolved, but the value does not decode as the expected shape.
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_errors_name_the_failure() {
        assert_eq!(
            CallError::AgentMissing.to_string(),
            "backend agent is not installed on this page"
        );
        assert_eq!(
            CallError::Rejected("connection refused".to_string()).to_string(),
            "call rejected: connection refused"
        );
        assert_eq!(
            CallError::MalformedReply("greet reply is not text".to_string()).to_string(),
            "malformed reply: greet reply is not text"
        );
    }
}
