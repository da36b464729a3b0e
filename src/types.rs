use clap::ValueEnum;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
/// Translation table selection
pub enum TableKind {
    /// Current table (habit, sleep and dialog messages)
    Primary,
    #[value(alias("old"))]
    /// Older screen table (settings, album and calendar strings)
    Legacy,
    /// Both tables merged
    All,
}

impl AsRef<str> for TableKind {
    fn as_ref(&self) -> &str {
        match self {
            TableKind::Primary => "primary",
            TableKind::Legacy => "legacy",
            TableKind::All => "all",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Result of processing one file.
pub enum ScriptResult {
    /// File content changed
    Ok,
    /// File left untouched
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Quote character surrounding a string literal.
pub enum QuoteStyle {
    Single,
    Double,
}

impl QuoteStyle {
    pub fn all() -> [QuoteStyle; 2] {
        [QuoteStyle::Single, QuoteStyle::Double]
    }

    pub fn as_char(&self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }

    /// Wraps `s` in this quote without escaping.
    pub fn quote(&self, s: &str) -> String {
        let q = self.as_char();
        let mut out = String::with_capacity(s.len() + 2);
        out.push(q);
        out.push_str(s);
        out.push(q);
        out
    }
}

#[cfg(feature = "image")]
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
/// Resampling filter used when resizing images
pub enum ResizeFilter {
    /// Nearest neighbor
    Nearest,
    /// Linear filter
    Triangle,
    /// Cubic filter
    CatmullRom,
    /// Gaussian filter
    Gaussian,
    #[value(alias("lanczos"))]
    /// Lanczos with window 3
    Lanczos3,
}

#[cfg(feature = "image")]
impl From<ResizeFilter> for image::imageops::FilterType {
    fn from(value: ResizeFilter) -> Self {
        match value {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Triangle => image::imageops::FilterType::Triangle,
            ResizeFilter::CatmullRom => image::imageops::FilterType::CatmullRom,
            ResizeFilter::Gaussian => image::imageops::FilterType::Gaussian,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Output pixel size of resized screenshots.
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One row of a CSV mapping table.
#[derive(Debug, Serialize, Deserialize)]
pub struct MappingCell {
    pub source: String,
    pub target: String,
}

/// A flat `{ "source": "target" }` mapping table in JSON or YAML.
///
/// Entries keep file order and repeated keys are all kept, so conflicting
/// repeats can be reported instead of the last one silently winning.
#[derive(Debug, Default)]
pub struct ReplacementTable {
    pub entries: Vec<(String, String)>,
}

struct ReplacementTableVisitor;

impl<'de> Visitor<'de> for ReplacementTableVisitor {
    type Value = ReplacementTable;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a map of source strings to replacements")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, String>()? {
            entries.push((key, value));
        }
        Ok(ReplacementTable { entries })
    }
}

impl<'de> Deserialize<'de> for ReplacementTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ReplacementTableVisitor)
    }
}
