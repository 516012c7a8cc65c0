//! Test fixtures and constants.

/// Hex colors with a known place in the embedded dataset
pub mod hexes {
    /// Exact dataset entry "Cadmium Red"
    pub const CADMIUM_RED: &str = "#E30022";

    /// Exact dataset entry "Titanium White"
    pub const WHITE: &str = "#FFFFFF";

    /// Exact dataset entry "Ivory Black"
    pub const BLACK: &str = "#0A0A0A";

    /// A mid grey that mixes from the anchors
    pub const MID_GREY: &str = "#808080";

    /// A color far from any single dataset entry
    pub const DUSTY_ROSE: &str = "#C08081";
}

/// A minimal dataset in the `{"colors": [...]}` form
pub fn small_dataset() -> String {
    serde_json::json!({
        "colors": [
            {
                "name": "Snow",
                "lab": { "l": 100.0, "a": 0.0, "b": 0.0 },
                "hex": "#FFFFFF",
                "category": "neutral"
            },
            {
                "name": "Coal",
                "lab": { "l": 0.0, "a": 0.0, "b": 0.0 },
                "hex": "#000000",
                "category": "neutral"
            },
            {
                "name": "Signal Red",
                "lab": { "l": 53.2408, "a": 80.0925, "b": 67.2032 },
                "hex": "#FF0000",
                "category": "red",
                "alternateNames": ["Fire Red"],
                "ral": "RAL 3020"
            }
        ]
    })
    .to_string()
}

/// A dataset without a white anchor
pub fn dataset_without_white() -> String {
    serde_json::json!([
        {
            "name": "Coal",
            "lab": { "l": 0.0, "a": 0.0, "b": 0.0 },
            "hex": "#000000",
            "category": "neutral"
        },
        {
            "name": "Signal Red",
            "lab": { "l": 53.2408, "a": 80.0925, "b": 67.2032 },
            "hex": "#FF0000",
            "category": "red"
        }
    ])
    .to_string()
}

/// Write `content` to a temporary file that lives as long as the handle
pub fn temp_file(content: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(file.path(), content).expect("Failed to write temp file");
    file
}
