use std::fmt;

/// Response encoding selected by the `format` query parameter.
///
/// The client decodes JSON only; the other encodings are passed through
/// for callers that consume the raw response elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON. This is the default.
    #[default]
    Json,
    /// JSONP; requires a callback prefix on the client.
    JsonP,
    /// JSON-stat.
    JsonStat,
    /// XML.
    Xml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OutputFormat::Json => "json",
                OutputFormat::JsonP => "jsonP",
                OutputFormat::JsonStat => "jsonstat",
                OutputFormat::Xml => "xml",
            }
        )
    }
}
