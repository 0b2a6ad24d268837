//! Pure attribute validators.
//!
//! Every validator takes a caller-identifying label used in its messages,
//! never panics, and reports problems as human-readable strings; grouped
//! validators return the accumulated list. Message ordering follows the
//! validator's parameter contract, not input iteration order, so output is
//! deterministic across platforms.

use crate::composition::dsl::TextOpts;
use crate::composition::model::{
    CompositionOptions, FilterName, HorizontalAlignment, LayerFilter, LayerFormat, Trim,
    VerticalAlignment, WaveformStyle,
};

pub(crate) fn required(caller: &str, attr: &str) -> String {
    format!("{caller}: attribute '{attr}' is required")
}

pub(crate) fn invalid_choice(caller: &str, attr: &str, value: &str, valid: &str) -> String {
    format!("{caller}: attribute '{attr}' value '{value}' must be one of: {valid}")
}

pub(crate) fn sub_field(parent: &str, field: &str) -> String {
    format!("{parent}.{field}")
}

fn not_finite(caller: &str, attr: &str) -> String {
    format!("{caller}: attribute '{attr}' must be a finite number")
}

fn negative(caller: &str, attr: &str) -> String {
    format!("{caller}: attribute '{attr}' must be >= 0")
}

fn empty_string(caller: &str, attr: &str) -> String {
    format!("{caller}: attribute '{attr}' must be a non-empty string")
}

fn not_object(caller: &str, attr: &str) -> String {
    format!("{caller}: attribute '{attr}' must be a JSON object")
}

fn not_number(caller: &str, attr: &str) -> String {
    format!("{caller}: attribute '{attr}' must be a number")
}

/// Finite and non-negative; timeline placements, lengths, and sizes.
pub(crate) fn check_timeline_number(caller: &str, attr: &str, value: f64, errors: &mut Vec<String>) {
    if !value.is_finite() {
        errors.push(not_finite(caller, attr));
    } else if value < 0.0 {
        errors.push(negative(caller, attr));
    }
}

/// Finite; coordinates may be negative (off-canvas placement is legal).
pub(crate) fn check_coordinate(caller: &str, attr: &str, value: f64, errors: &mut Vec<String>) {
    if !value.is_finite() {
        errors.push(not_finite(caller, attr));
    }
}

/// Color strings must be non-empty; named colors and hex forms both pass.
pub(crate) fn check_color(caller: &str, attr: &str, value: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(empty_string(caller, attr));
    }
}

/// Free-text attributes must be non-empty.
pub(crate) fn check_text(caller: &str, attr: &str, value: &str, errors: &mut Vec<String>) {
    if value.is_empty() {
        errors.push(empty_string(caller, attr));
    }
}

fn check_optional_number(caller: &str, attr: &str, value: Option<f64>, errors: &mut Vec<String>) {
    if let Some(v) = value {
        check_timeline_number(caller, attr, v, errors);
    }
}

fn check_optional_coordinate(
    caller: &str,
    attr: &str,
    value: Option<f64>,
    errors: &mut Vec<String>,
) {
    if let Some(v) = value {
        check_coordinate(caller, attr, v, errors);
    }
}

fn check_optional_color(caller: &str, attr: &str, value: Option<&str>, errors: &mut Vec<String>) {
    if let Some(v) = value {
        check_color(caller, attr, v, errors);
    }
}

/// Volume is a UX clamp, not a hard constraint: out-of-range values are
/// clamped to `[0, 1]`; only non-finite input is an error.
pub(crate) fn clamp_volume(caller: &str, volume: f64) -> Result<f64, String> {
    if !volume.is_finite() {
        return Err(not_finite(caller, "volume"));
    }
    Ok(volume.clamp(0.0, 1.0))
}

/// Validate shared base placement attributes. Returns 0-2 errors, `start`
/// first.
pub fn validate_layer_base(caller: &str, start: f64, length: f64) -> Vec<String> {
    let mut errors = Vec::new();
    check_timeline_number(caller, "start", start, &mut errors);
    check_timeline_number(caller, "length", length, &mut errors);
    errors
}

/// Validate a trim range. Sub-field errors are namespaced under `trim`; an
/// inverted range is rejected.
pub fn validate_layer_trim(caller: &str, trim: &Trim) -> Vec<String> {
    let mut errors = Vec::new();
    check_timeline_number(caller, &sub_field("trim", "start"), trim.start, &mut errors);
    check_timeline_number(caller, &sub_field("trim", "end"), trim.end, &mut errors);
    if errors.is_empty() && trim.end < trim.start {
        errors.push(format!(
            "{caller}: attribute 'trim.end' must be >= 'trim.start'"
        ));
    }
    errors
}

/// Validate the shared visual-media attributes. Declaration order:
/// `backgroundColor`, `color`, `x`, `y`.
pub fn validate_layer_visual_media(
    caller: &str,
    background_color: Option<&str>,
    color: Option<&str>,
    x: Option<f64>,
    y: Option<f64>,
) -> Vec<String> {
    let mut errors = Vec::new();
    check_optional_color(caller, "backgroundColor", background_color, &mut errors);
    check_optional_color(caller, "color", color, &mut errors);
    check_optional_coordinate(caller, "x", x, &mut errors);
    check_optional_coordinate(caller, "y", y, &mut errors);
    errors
}

/// Validate a horizontal-alignment wire value against the closed set,
/// returning the parsed member. The error names the offending value and
/// lists the full valid set in declaration order.
pub fn validate_horizontal_alignment(
    caller: &str,
    attr: &str,
    value: &str,
) -> Result<HorizontalAlignment, String> {
    HorizontalAlignment::ALL
        .into_iter()
        .find(|v| v.as_str() == value)
        .ok_or_else(|| {
            invalid_choice(caller, attr, value, &HorizontalAlignment::valid_values())
        })
}

/// Validate a vertical-alignment wire value against the closed set,
/// returning the parsed member.
pub fn validate_vertical_alignment(
    caller: &str,
    attr: &str,
    value: &str,
) -> Result<VerticalAlignment, String> {
    VerticalAlignment::ALL
        .into_iter()
        .find(|v| v.as_str() == value)
        .ok_or_else(|| invalid_choice(caller, attr, value, &VerticalAlignment::valid_values()))
}

/// Validate whichever alignment attributes are present. The two checks are
/// independent; a failure in one does not suppress the other.
pub fn validate_layer_alignment(
    caller: &str,
    horizontal_alignment: Option<&str>,
    vertical_alignment: Option<&str>,
) -> Vec<String> {
    let mut errors = Vec::new();
    if let Some(value) = horizontal_alignment
        && let Err(e) = validate_horizontal_alignment(caller, "horizontalAlignment", value)
    {
        errors.push(e);
    }
    if let Some(value) = vertical_alignment
        && let Err(e) = validate_vertical_alignment(caller, "verticalAlignment", value)
    {
        errors.push(e);
    }
    errors
}

/// Validate a layer-format wire value against the closed set, returning the
/// parsed member.
pub fn validate_layer_format(
    caller: &str,
    attr: &str,
    value: &str,
) -> Result<LayerFormat, String> {
    LayerFormat::ALL
        .into_iter()
        .find(|v| v.as_str() == value)
        .ok_or_else(|| invalid_choice(caller, attr, value, &LayerFormat::valid_values()))
}

/// Validate a waveform-style wire value against the closed set, returning
/// the parsed member.
pub fn validate_waveform_style(
    caller: &str,
    attr: &str,
    value: &str,
) -> Result<WaveformStyle, String> {
    WaveformStyle::ALL
        .into_iter()
        .find(|v| v.as_str() == value)
        .ok_or_else(|| invalid_choice(caller, attr, value, &WaveformStyle::valid_values()))
}

/// Validate a filter-name wire value against the closed set, returning the
/// parsed member.
pub fn validate_filter_name(caller: &str, attr: &str, value: &str) -> Result<FilterName, String> {
    FilterName::ALL
        .into_iter()
        .find(|v| v.as_str() == value)
        .ok_or_else(|| invalid_choice(caller, attr, value, &FilterName::valid_values()))
}

/// Lottie animation payloads must be JSON objects.
pub fn validate_layer_lottie(caller: &str, data: &serde_json::Value) -> Vec<String> {
    let mut errors = Vec::new();
    if !data.is_object() {
        errors.push(not_object(caller, "data"));
    }
    errors
}

/// Validate the text-specific attribute bag. Declaration order:
/// `fontFamily`, `fontSize`, `maxFontSize`, `maxHeight`, `maxWidth`, `text`,
/// `textAlignment`.
pub fn validate_layer_text(caller: &str, text: &str, opts: &TextOpts) -> Vec<String> {
    let mut errors = Vec::new();
    if let Some(family) = opts.font_family.as_deref() {
        check_text(caller, "fontFamily", family, &mut errors);
    }
    check_optional_number(caller, "fontSize", opts.font_size, &mut errors);
    check_optional_number(caller, "maxFontSize", opts.max_font_size, &mut errors);
    check_optional_number(caller, "maxHeight", opts.max_height, &mut errors);
    check_optional_number(caller, "maxWidth", opts.max_width, &mut errors);
    check_text(caller, "text", text, &mut errors);
    if let Some(value) = opts.text_alignment.as_deref()
        && let Err(e) = validate_horizontal_alignment(caller, "textAlignment", value)
    {
        errors.push(e);
    }
    errors
}

/// Validate filter options against the documented shape for `name`.
///
/// Payload-carrying filters require their keys (a missing key is a
/// "required" error); payload-less filters reject a non-empty options
/// object.
pub fn validate_filter_options(
    caller: &str,
    name: FilterName,
    options: &serde_json::Value,
) -> Vec<String> {
    let mut errors = Vec::new();
    match name {
        FilterName::Brightness => {
            check_option_number(caller, options, "brightness", &mut errors);
        }
        FilterName::Contrast => {
            check_option_number(caller, options, "contrast", &mut errors);
        }
        FilterName::Saturation => {
            check_option_number(caller, options, "saturation", &mut errors);
        }
        FilterName::FadeIn => {
            check_option_string(caller, options, "color", &mut errors);
            check_option_number(caller, options, "duration", &mut errors);
        }
        FilterName::FadeOut
        | FilterName::Grayscale
        | FilterName::Lighten
        | FilterName::Negative
        | FilterName::Sobel
        | FilterName::Vintage => {
            let empty = match options {
                serde_json::Value::Null => true,
                serde_json::Value::Object(map) => map.is_empty(),
                _ => false,
            };
            if !empty {
                errors.push(format!(
                    "{caller}: filter '{}' does not accept options",
                    name.as_str()
                ));
            }
        }
    }
    errors
}

fn check_option_number(
    caller: &str,
    options: &serde_json::Value,
    key: &str,
    errors: &mut Vec<String>,
) {
    let attr = sub_field("options", key);
    match options.get(key) {
        None => errors.push(required(caller, &attr)),
        Some(v) => match v.as_f64() {
            Some(n) if n.is_finite() => {}
            _ => errors.push(not_number(caller, &attr)),
        },
    }
}

fn check_option_string(
    caller: &str,
    options: &serde_json::Value,
    key: &str,
    errors: &mut Vec<String>,
) {
    let attr = sub_field("options", key);
    match options.get(key) {
        None => errors.push(required(caller, &attr)),
        Some(v) => match v.as_str() {
            Some(s) if !s.is_empty() => {}
            _ => errors.push(empty_string(caller, &attr)),
        },
    }
}

/// Validate a filter name plus options and build the validated reference.
/// Payload-less filters normalize their options to `Null`.
pub(crate) fn build_layer_filter(
    caller: &str,
    filter_name: &str,
    options: serde_json::Value,
) -> Result<LayerFilter, Vec<String>> {
    let name = validate_filter_name(caller, "filterName", filter_name).map_err(|e| vec![e])?;
    let errors = validate_filter_options(caller, name, &options);
    if !errors.is_empty() {
        return Err(errors);
    }
    let options = if filter_takes_options(name) {
        options
    } else {
        serde_json::Value::Null
    };
    Ok(LayerFilter {
        filter_name: name,
        options,
    })
}

fn filter_takes_options(name: FilterName) -> bool {
    matches!(
        name,
        FilterName::Brightness | FilterName::Contrast | FilterName::Saturation | FilterName::FadeIn
    )
}

/// Validate global composition options. Declaration order: `aspectRatio`,
/// `backgroundColor`, `duration`, `metadata`, `resolution`.
pub fn validate_composition_options(caller: &str, options: &CompositionOptions) -> Vec<String> {
    let mut errors = Vec::new();
    if let Some(ratio) = options.aspect_ratio.as_deref()
        && ratio.trim().is_empty()
    {
        errors.push(empty_string(caller, "aspectRatio"));
    }
    check_optional_color(
        caller,
        "backgroundColor",
        options.background_color.as_deref(),
        &mut errors,
    );
    check_optional_number(caller, "duration", options.duration, &mut errors);
    if let Some(metadata) = &options.metadata
        && !metadata.is_object()
    {
        errors.push(not_object(caller, "metadata"));
    }
    if let Some(resolution) = options.resolution {
        if resolution.width == 0 {
            errors.push(format!(
                "{caller}: attribute '{}' must be > 0",
                sub_field("resolution", "width")
            ));
        }
        if resolution.height == 0 {
            errors.push(format!(
                "{caller}: attribute '{}' must be > 0",
                sub_field("resolution", "height")
            ));
        }
    }
    errors
}

#[cfg(test)]
#[path = "../../tests/unit/composition/validate.rs"]
mod tests;
