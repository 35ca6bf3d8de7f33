use thiserror::Error;

pub type SfResult<T> = Result<T, SfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = SfError::IndexOob {
            what: "stream",
            index: 3,
            len: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("stream"));
        assert!(msg.contains("index=3"));
    }
}
