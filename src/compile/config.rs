use crate::{
    composition::dsl::Composition,
    composition::model::{Dimensions, Layer},
    foundation::error::{FramecastError, FramecastResult},
};

/// Width at or above which derived dimensions are considered HD.
const HD_WIDTH_PX: u32 = 1024;

/// The immutable, API-ready payload derived from a composition at submit
/// time.
///
/// One value represents a single submission attempt: it is generated once,
/// never mutated, and further changes to the source composition have no
/// effect on it. `resolution` never appears here; the service accepts only
/// the resolved `dimensions`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeConfig {
    /// Ratio string the caller provided, passed through for bookkeeping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    /// Canvas fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Total duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Resolution hint; recomputed from width when dimensions were derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hd: Option<bool>,
    /// Opaque metadata object passed through to the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Resolved output dimensions in pixels.
    pub dimensions: Dimensions,
    /// Snapshot of the composition's layers, in render order.
    pub layers: Vec<Layer>,
}

/// Map a known aspect-ratio string and HD hint to a `"<width>x<height>"`
/// dimension string. Unknown ratios are a config error.
pub fn size_for_aspect_ratio(ratio: &str, hd: bool) -> FramecastResult<&'static str> {
    let size = match (ratio, hd) {
        ("16:9", false) => "640x360",
        ("16:9", true) => "1280x720",
        ("9:16", false) => "360x640",
        ("9:16", true) => "720x1280",
        ("1:1", false) => "480x480",
        ("1:1", true) => "1080x1080",
        ("4:3", false) => "640x480",
        ("4:3", true) => "1024x768",
        ("4:5", false) => "480x600",
        ("4:5", true) => "864x1080",
        _ => {
            return Err(FramecastError::config(format!(
                "unsupported aspect ratio '{ratio}'"
            )));
        }
    };
    Ok(size)
}

/// Parse a `"<width>x<height>"` dimension string.
pub fn parse_dimension_string(value: &str) -> FramecastResult<Dimensions> {
    let malformed = || {
        FramecastError::config(format!(
            "malformed dimension string '{value}' (expected '<width>x<height>')"
        ))
    };
    let (width, height) = value.split_once('x').ok_or_else(malformed)?;
    let width: u32 = width.parse().map_err(|_| malformed())?;
    let height: u32 = height.parse().map_err(|_| malformed())?;
    Ok(Dimensions { width, height })
}

/// Flatten a composition snapshot into its encode config.
///
/// Deterministic and side-effect-free: an explicit `resolution` wins verbatim
/// (with `hd` passed through untouched); otherwise dimensions are derived
/// from `(aspect_ratio, hd)` and `hd` is recomputed from the derived width
/// rather than trusted. Generating twice from an unmodified composition
/// produces byte-identical JSON.
#[tracing::instrument(skip(comp))]
pub fn compile_config(comp: &Composition) -> FramecastResult<EncodeConfig> {
    let options = comp.options();
    let (dimensions, hd) = match options.resolution {
        Some(resolution) => (resolution, options.hd),
        None => {
            let ratio = options.aspect_ratio.as_deref().ok_or_else(|| {
                FramecastError::config(
                    "one of 'aspectRatio' or 'resolution' must be set to generate a config",
                )
            })?;
            let size = size_for_aspect_ratio(ratio, options.hd.unwrap_or(false))?;
            let dimensions = parse_dimension_string(size)?;
            (dimensions, Some(dimensions.width >= HD_WIDTH_PX))
        }
    };
    Ok(EncodeConfig {
        aspect_ratio: options.aspect_ratio.clone(),
        background_color: options.background_color.clone(),
        duration: options.duration,
        hd,
        metadata: options.metadata.clone(),
        dimensions,
        layers: comp.layers().to_vec(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/config.rs"]
mod tests;
