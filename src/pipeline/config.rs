/// Settings recorded in every `IndexReport`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IndexConfig {
    /// Layout version of the JSON report; bumped when `IndexReport` fields change.
    pub report_version: u32,
    /// Print an empty line before every rotation (reference rendering).
    pub blank_line_separator: bool,
    /// Keep the space after the last word of each rotation when rendering text.
    pub trailing_separator: bool,
}

impl IndexConfig {
    pub fn v0() -> Self {
        Self {
            report_version: 1,
            blank_line_separator: true,
            trailing_separator: false,
        }
    }

    /// No separator lines between rotations.
    pub fn compact() -> Self {
        Self {
            blank_line_separator: false,
            ..Self::v0()
        }
    }

    /// Reference rendering byte for byte: keep the space after the last word.
    pub fn with_trailing_separator(self) -> Self {
        Self {
            trailing_separator: true,
            ..self
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::v0()
    }
}
