#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid pattern {pattern:?}: {msg}")]
pub struct InvalidPattern {
    pattern: Box<str>,
    msg: &'static str,
}

impl InvalidPattern {
    pub(super) fn new(pattern: &str, msg: &'static str) -> Self {
        Self {
            pattern: pattern.into(),
            msg,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn msg(&self) -> &'static str {
        self.msg
    }
}
