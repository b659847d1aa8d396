use serde::Deserialize;

/// On-disk palette: a JSON array of hex color strings.
///
/// ```json
/// ["#000000", "#fff", "abc"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PaletteFile {
    pub entries: Vec<String>,
}
