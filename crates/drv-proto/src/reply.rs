use crate::error::{Error, Result};

/// A reply triple `(code, text, data)` as defined by the command-channel
/// wire protocol.
///
/// `code` is in `[100, 999]`; the leading digit carries the semantics
/// (2xx success, 3xx transient/driver error, 4xx protocol error, 7xx
/// asynchronous event). `text` is a single human-readable line. `data` is
/// zero or more opaque lines emitted before the terminal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub(crate) code: u16,
    pub(crate) text: String,
    pub(crate) data: Vec<String>,
}

impl Reply {
    /// Build a reply with no data lines.
    pub fn new(code: u16, text: impl Into<String>) -> Result<Self> {
        Self::with_data(code, text, Vec::new())
    }

    /// Build a reply with one or more data lines preceding the terminal line.
    pub fn with_data(
        code: u16,
        text: impl Into<String>,
        data: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::EmptyText);
        }
        check_no_newline(&text)?;

        let data = data
            .into_iter()
            .map(|line| {
                let line = line.into();
                check_no_newline(&line)?;
                Ok(line)
            })
            .collect::<Result<Vec<String>>>()?;

        Ok(Self { code, text, data })
    }

    /// The reply's status code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The reply's terminal status text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The reply's data lines, in order.
    pub fn data(&self) -> &[String] {
        &self.data
    }
}

fn check_no_newline(s: &str) -> Result<()> {
    if s.contains('\r') || s.contains('\n') {
        return Err(Error::EmbeddedNewline(s.to_string()));
    }
    Ok(())
}
