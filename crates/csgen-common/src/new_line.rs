use serde::{Deserialize, Serialize};

/// Line terminator used when rendering declaration text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NewLineKind {
    #[default]
    #[serde(rename = "lf", alias = "LF")]
    LineFeed,
    #[serde(rename = "crlf", alias = "CRLF")]
    CarriageReturnLineFeed,
}

impl NewLineKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LineFeed => "\n",
            Self::CarriageReturnLineFeed => "\r\n",
        }
    }
}
