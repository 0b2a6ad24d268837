use std::path::PathBuf;

use crate::{
    composition::validate,
    foundation::error::{FramecastError, FramecastResult},
};

/// Closed set of horizontal placement values accepted by alignment attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    /// Left edge.
    Left,
    /// Horizontal center.
    Center,
    /// Right edge.
    Right,
}

impl HorizontalAlignment {
    /// Every member, in declaration order (the order error messages use).
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// Wire name of this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// The full valid set, comma-joined in declaration order.
    pub fn valid_values() -> String {
        join_values(Self::ALL.iter().map(|v| v.as_str()))
    }
}

/// Closed set of vertical placement values accepted by alignment attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Top edge.
    Top,
    /// Vertical center.
    Center,
    /// Bottom edge.
    Bottom,
}

impl VerticalAlignment {
    /// Every member, in declaration order (the order error messages use).
    pub const ALL: [Self; 3] = [Self::Top, Self::Center, Self::Bottom];

    /// Wire name of this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }

    /// The full valid set, comma-joined in declaration order.
    pub fn valid_values() -> String {
        join_values(Self::ALL.iter().map(|v| v.as_str()))
    }
}

/// How visual media is fitted into its layer box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerFormat {
    /// Scale to fill the box, cropping overflow.
    Fill,
    /// Scale to fit entirely inside the box.
    Fit,
    /// Crop to the box without scaling.
    Crop,
    /// Stretch to the box, ignoring aspect ratio.
    Stretch,
}

impl LayerFormat {
    /// Every member, in declaration order (the order error messages use).
    pub const ALL: [Self; 4] = [Self::Fill, Self::Fit, Self::Crop, Self::Stretch];

    /// Wire name of this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Fit => "fit",
            Self::Crop => "crop",
            Self::Stretch => "stretch",
        }
    }

    /// The full valid set, comma-joined in declaration order.
    pub fn valid_values() -> String {
        join_values(Self::ALL.iter().map(|v| v.as_str()))
    }
}

/// Rendering style for waveform layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveformStyle {
    /// Filled oscilloscope-style wave.
    Wave,
    /// Single-line amplitude trace.
    Line,
}

impl WaveformStyle {
    /// Every member, in declaration order (the order error messages use).
    pub const ALL: [Self; 2] = [Self::Wave, Self::Line];

    /// Wire name of this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wave => "wave",
            Self::Line => "line",
        }
    }

    /// The full valid set, comma-joined in declaration order.
    pub fn valid_values() -> String {
        join_values(Self::ALL.iter().map(|v| v.as_str()))
    }
}

/// Closed set of filter names recognized by layer-level filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterName {
    /// Brightness adjustment; options `{ brightness: number }`.
    Brightness,
    /// Contrast adjustment; options `{ contrast: number }`.
    Contrast,
    /// Fade in from a solid color; options `{ color: string, duration: number }`.
    FadeIn,
    /// Fade out; no options.
    FadeOut,
    /// Grayscale conversion; no options.
    Grayscale,
    /// Lighten; no options.
    Lighten,
    /// Negative (invert); no options.
    Negative,
    /// Saturation adjustment; options `{ saturation: number }`.
    Saturation,
    /// Sobel edge detection; no options.
    Sobel,
    /// Vintage look; no options.
    Vintage,
}

impl FilterName {
    /// Every member, in declaration order (the order error messages use).
    pub const ALL: [Self; 10] = [
        Self::Brightness,
        Self::Contrast,
        Self::FadeIn,
        Self::FadeOut,
        Self::Grayscale,
        Self::Lighten,
        Self::Negative,
        Self::Saturation,
        Self::Sobel,
        Self::Vintage,
    ];

    /// Wire name of this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::FadeIn => "fadein",
            Self::FadeOut => "fadeout",
            Self::Grayscale => "grayscale",
            Self::Lighten => "lighten",
            Self::Negative => "negative",
            Self::Saturation => "saturation",
            Self::Sobel => "sobel",
            Self::Vintage => "vintage",
        }
    }

    /// The full valid set, comma-joined in declaration order.
    pub fn valid_values() -> String {
        join_values(Self::ALL.iter().map(|v| v.as_str()))
    }
}

fn join_values<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

/// Source-media trim range, in seconds from the start of the source.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trim {
    /// Seconds into the source where playback begins.
    pub start: f64,
    /// Seconds into the source where playback ends.
    pub end: f64,
}

/// Concrete pixel dimensions; also the shape of the `resolution` option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A binary or URL media reference attached to a video, image, or audio layer.
///
/// URL references are submitted as a `url<id>` form part; file and in-memory
/// references as a `file<id>` part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaSource {
    /// Remote media fetched by the rendering service.
    Url(String),
    /// Local file streamed into the submission.
    File(PathBuf),
    /// In-memory media bytes with a file name for the multipart part.
    Bytes {
        /// File name reported in the multipart part.
        file_name: String,
        /// Raw media bytes.
        data: Vec<u8>,
    },
}

/// Global composition options.
///
/// `aspect_ratio` and `resolution` may both be stored; `resolution` always
/// wins when the encode config is generated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompositionOptions {
    /// Ratio string such as `"16:9"`, used to derive dimensions.
    pub aspect_ratio: Option<String>,
    /// Canvas fill color.
    pub background_color: Option<String>,
    /// Total duration in seconds.
    pub duration: Option<f64>,
    /// Resolution hint used when deriving dimensions from the aspect ratio.
    pub hd: Option<bool>,
    /// Opaque metadata object passed through to the service.
    pub metadata: Option<serde_json::Value>,
    /// Explicit output dimensions, overriding `aspect_ratio`.
    pub resolution: Option<Dimensions>,
}

/// Field-wise patch for [`CompositionOptions`]; only set fields are applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionsUpdate {
    /// New ratio string.
    pub aspect_ratio: Option<String>,
    /// New canvas fill color.
    pub background_color: Option<String>,
    /// New duration in seconds.
    pub duration: Option<f64>,
    /// New resolution hint.
    pub hd: Option<bool>,
    /// New metadata object.
    pub metadata: Option<serde_json::Value>,
    /// New explicit dimensions.
    pub resolution: Option<Dimensions>,
}

/// A composition-wide filter.
///
/// Unlike layer-level filters these are deliberately unvalidated: the name is
/// kept as a raw string and the options shape is not checked, so callers can
/// address filters this crate does not know about yet.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CompositionFilter {
    /// Filter name, passed through verbatim.
    pub name: String,
    /// Filter options, passed through verbatim.
    pub options: serde_json::Value,
}

/// A validated layer-level filter reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerFilter {
    pub(crate) filter_name: FilterName,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub(crate) options: serde_json::Value,
}

impl LayerFilter {
    /// The validated filter name.
    pub fn filter_name(&self) -> FilterName {
        self.filter_name
    }

    /// The filter options (`Null` for filters that take none).
    pub fn options(&self) -> &serde_json::Value {
        &self.options
    }
}

/// One timed element on the composition timeline.
///
/// A layer is created through the typed `add_*` operations on
/// [`Composition`](crate::Composition), which assign its id and validate its
/// full attribute set. Mutators validate before writing; a rejected update
/// leaves the prior value untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    pub(crate) id: String,
    pub(crate) start: f64,
    pub(crate) length: f64,
    #[serde(flatten)]
    pub(crate) kind: LayerKind,
}

/// Per-kind layer attributes, tagged with the wire `type` discriminant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerKind {
    /// Video media layer.
    Video(VideoAttrs),
    /// Still-image layer.
    Image(ImageAttrs),
    /// Text layer.
    Text(TextAttrs),
    /// Audio media layer.
    Audio(AudioAttrs),
    /// Rendered audio-waveform layer.
    Waveform(WaveformAttrs),
    /// Lottie vector-animation layer.
    Lottie(LottieAttrs),
    /// Filter applied as its own timeline layer.
    Filter(FilterAttrs),
}

impl Layer {
    /// Unique id assigned at creation; immutable.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Timeline start, in seconds.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Timeline length, in seconds.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The kind tag and per-kind attributes.
    pub fn kind(&self) -> &LayerKind {
        &self.kind
    }

    /// Wire name of this layer's kind.
    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            LayerKind::Video(_) => "video",
            LayerKind::Image(_) => "image",
            LayerKind::Text(_) => "text",
            LayerKind::Audio(_) => "audio",
            LayerKind::Waveform(_) => "waveform",
            LayerKind::Lottie(_) => "lottie",
            LayerKind::Filter(_) => "filter",
        }
    }

    /// Move the layer on the timeline.
    pub fn set_start(&mut self, start: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_timeline_number("set_start", "start", start, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.start = start;
        Ok(self)
    }

    /// Change how long the layer stays on the timeline.
    pub fn set_length(&mut self, length: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_timeline_number("set_length", "length", length, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.length = length;
        Ok(self)
    }
}

/// Attributes of a video layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) format: Option<LayerFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) trim: Option<Trim>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) volume: Option<f64>,
}

impl VideoAttrs {
    /// Fit mode, when set.
    pub fn format(&self) -> Option<LayerFormat> {
        self.format
    }

    /// Layer box width in pixels, when set.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Layer box height in pixels, when set.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Horizontal position in pixels, when set.
    pub fn x(&self) -> Option<f64> {
        self.x
    }

    /// Vertical position in pixels, when set.
    pub fn y(&self) -> Option<f64> {
        self.y
    }

    /// Letterbox fill color, when set.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    /// Source trim range, when set.
    pub fn trim(&self) -> Option<Trim> {
        self.trim
    }

    /// Playback volume in `[0, 1]`, when set.
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    /// Set the fit mode from its wire name.
    pub fn set_format(&mut self, format: &str) -> FramecastResult<&mut Self> {
        let parsed = validate::validate_layer_format("set_format", "format", format)
            .map_err(FramecastError::validation_one)?;
        self.format = Some(parsed);
        Ok(self)
    }

    /// Set the layer box size in pixels.
    pub fn set_dimensions(&mut self, width: f64, height: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_timeline_number("set_dimensions", "width", width, &mut errors);
        validate::check_timeline_number("set_dimensions", "height", height, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.width = Some(width);
        self.height = Some(height);
        Ok(self)
    }

    /// Set the layer position in pixels.
    pub fn set_position(&mut self, x: f64, y: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_coordinate("set_position", "x", x, &mut errors);
        validate::check_coordinate("set_position", "y", y, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.x = Some(x);
        self.y = Some(y);
        Ok(self)
    }

    /// Set the letterbox fill color.
    pub fn set_background_color(&mut self, color: impl Into<String>) -> FramecastResult<&mut Self> {
        let color = color.into();
        let mut errors = Vec::new();
        validate::check_color("set_background_color", "backgroundColor", &color, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.background_color = Some(color);
        Ok(self)
    }

    /// Set the source trim range.
    pub fn set_trim(&mut self, trim: Trim) -> FramecastResult<&mut Self> {
        let errors = validate::validate_layer_trim("set_trim", &trim);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.trim = Some(trim);
        Ok(self)
    }

    /// Set the playback volume. Out-of-range values are clamped to `[0, 1]`
    /// rather than rejected; non-finite values are rejected.
    pub fn set_volume(&mut self, volume: f64) -> FramecastResult<&mut Self> {
        let clamped =
            validate::clamp_volume("set_volume", volume).map_err(FramecastError::validation_one)?;
        self.volume = Some(clamped);
        Ok(self)
    }

    /// Set the volume to zero. Sugar for `set_volume(0.0)`; always valid.
    pub fn set_muted(&mut self) -> &mut Self {
        self.volume = Some(0.0);
        self
    }
}

/// Attributes of an image layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) format: Option<LayerFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) background_color: Option<String>,
}

impl ImageAttrs {
    /// Fit mode, when set.
    pub fn format(&self) -> Option<LayerFormat> {
        self.format
    }

    /// Layer box width in pixels, when set.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Layer box height in pixels, when set.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Horizontal position in pixels, when set.
    pub fn x(&self) -> Option<f64> {
        self.x
    }

    /// Vertical position in pixels, when set.
    pub fn y(&self) -> Option<f64> {
        self.y
    }

    /// Letterbox fill color, when set.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    /// Set the fit mode from its wire name.
    pub fn set_format(&mut self, format: &str) -> FramecastResult<&mut Self> {
        let parsed = validate::validate_layer_format("set_format", "format", format)
            .map_err(FramecastError::validation_one)?;
        self.format = Some(parsed);
        Ok(self)
    }

    /// Set the layer box size in pixels.
    pub fn set_dimensions(&mut self, width: f64, height: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_timeline_number("set_dimensions", "width", width, &mut errors);
        validate::check_timeline_number("set_dimensions", "height", height, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.width = Some(width);
        self.height = Some(height);
        Ok(self)
    }

    /// Set the layer position in pixels.
    pub fn set_position(&mut self, x: f64, y: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_coordinate("set_position", "x", x, &mut errors);
        validate::check_coordinate("set_position", "y", y, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.x = Some(x);
        self.y = Some(y);
        Ok(self)
    }

    /// Set the letterbox fill color.
    pub fn set_background_color(&mut self, color: impl Into<String>) -> FramecastResult<&mut Self> {
        let color = color.into();
        let mut errors = Vec::new();
        validate::check_color("set_background_color", "backgroundColor", &color, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.background_color = Some(color);
        Ok(self)
    }
}

/// Attributes of a text layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAttrs {
    pub(crate) text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) format: Option<LayerFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) text_alignment: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) vertical_alignment: Option<VerticalAlignment>,
}

impl TextAttrs {
    /// The rendered text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Font family name, when set.
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Font size in points, when set.
    pub fn font_size(&self) -> Option<f64> {
        self.font_size
    }

    /// Upper bound for auto-sized text, when set.
    pub fn max_font_size(&self) -> Option<f64> {
        self.max_font_size
    }

    /// Maximum text box width in pixels, when set.
    pub fn max_width(&self) -> Option<f64> {
        self.max_width
    }

    /// Maximum text box height in pixels, when set.
    pub fn max_height(&self) -> Option<f64> {
        self.max_height
    }

    /// Text color, when set.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Text box fill color, when set.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    /// Fit mode, when set.
    pub fn format(&self) -> Option<LayerFormat> {
        self.format
    }

    /// Layer box width in pixels, when set.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Layer box height in pixels, when set.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Horizontal position in pixels, when set.
    pub fn x(&self) -> Option<f64> {
        self.x
    }

    /// Vertical position in pixels, when set.
    pub fn y(&self) -> Option<f64> {
        self.y
    }

    /// Horizontal text alignment, when set.
    pub fn text_alignment(&self) -> Option<HorizontalAlignment> {
        self.text_alignment
    }

    /// Vertical text alignment, when set.
    pub fn vertical_alignment(&self) -> Option<VerticalAlignment> {
        self.vertical_alignment
    }

    /// Replace the rendered text.
    pub fn set_text(&mut self, text: impl Into<String>) -> FramecastResult<&mut Self> {
        let text = text.into();
        let mut errors = Vec::new();
        validate::check_text("set_text", "text", &text, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.text = text;
        Ok(self)
    }

    /// Set the font family.
    pub fn set_font_family(&mut self, family: impl Into<String>) -> FramecastResult<&mut Self> {
        let family = family.into();
        let mut errors = Vec::new();
        validate::check_text("set_font_family", "fontFamily", &family, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.font_family = Some(family);
        Ok(self)
    }

    /// Set the font size in points.
    pub fn set_font_size(&mut self, size: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_timeline_number("set_font_size", "fontSize", size, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.font_size = Some(size);
        Ok(self)
    }

    /// Set the upper bound for auto-sized text.
    pub fn set_max_font_size(&mut self, size: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_timeline_number("set_max_font_size", "maxFontSize", size, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.max_font_size = Some(size);
        Ok(self)
    }

    /// Set the maximum text box width in pixels.
    pub fn set_max_width(&mut self, width: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_timeline_number("set_max_width", "maxWidth", width, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.max_width = Some(width);
        Ok(self)
    }

    /// Set the maximum text box height in pixels.
    pub fn set_max_height(&mut self, height: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_timeline_number("set_max_height", "maxHeight", height, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.max_height = Some(height);
        Ok(self)
    }

    /// Set the text color.
    pub fn set_color(&mut self, color: impl Into<String>) -> FramecastResult<&mut Self> {
        let color = color.into();
        let mut errors = Vec::new();
        validate::check_color("set_color", "color", &color, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.color = Some(color);
        Ok(self)
    }

    /// Set the text box fill color.
    pub fn set_background_color(&mut self, color: impl Into<String>) -> FramecastResult<&mut Self> {
        let color = color.into();
        let mut errors = Vec::new();
        validate::check_color("set_background_color", "backgroundColor", &color, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.background_color = Some(color);
        Ok(self)
    }

    /// Set the fit mode from its wire name.
    pub fn set_format(&mut self, format: &str) -> FramecastResult<&mut Self> {
        let parsed = validate::validate_layer_format("set_format", "format", format)
            .map_err(FramecastError::validation_one)?;
        self.format = Some(parsed);
        Ok(self)
    }

    /// Set the layer box size in pixels.
    pub fn set_dimensions(&mut self, width: f64, height: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_timeline_number("set_dimensions", "width", width, &mut errors);
        validate::check_timeline_number("set_dimensions", "height", height, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.width = Some(width);
        self.height = Some(height);
        Ok(self)
    }

    /// Set the layer position in pixels.
    pub fn set_position(&mut self, x: f64, y: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_coordinate("set_position", "x", x, &mut errors);
        validate::check_coordinate("set_position", "y", y, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.x = Some(x);
        self.y = Some(y);
        Ok(self)
    }

    /// Set the horizontal text alignment from its wire name.
    pub fn set_text_alignment(&mut self, alignment: &str) -> FramecastResult<&mut Self> {
        let parsed = validate::validate_horizontal_alignment(
            "set_text_alignment",
            "textAlignment",
            alignment,
        )
        .map_err(FramecastError::validation_one)?;
        self.text_alignment = Some(parsed);
        Ok(self)
    }

    /// Set the vertical text alignment from its wire name.
    pub fn set_vertical_alignment(&mut self, alignment: &str) -> FramecastResult<&mut Self> {
        let parsed = validate::validate_vertical_alignment(
            "set_vertical_alignment",
            "verticalAlignment",
            alignment,
        )
        .map_err(FramecastError::validation_one)?;
        self.vertical_alignment = Some(parsed);
        Ok(self)
    }
}

/// Attributes of an audio layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) trim: Option<Trim>,
}

impl AudioAttrs {
    /// Playback volume in `[0, 1]`, when set.
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    /// Source trim range, when set.
    pub fn trim(&self) -> Option<Trim> {
        self.trim
    }

    /// Set the playback volume. Out-of-range values are clamped to `[0, 1]`
    /// rather than rejected; non-finite values are rejected.
    pub fn set_volume(&mut self, volume: f64) -> FramecastResult<&mut Self> {
        let clamped =
            validate::clamp_volume("set_volume", volume).map_err(FramecastError::validation_one)?;
        self.volume = Some(clamped);
        Ok(self)
    }

    /// Set the volume to zero. Sugar for `set_volume(0.0)`; always valid.
    pub fn set_muted(&mut self) -> &mut Self {
        self.volume = Some(0.0);
        self
    }

    /// Set the source trim range.
    pub fn set_trim(&mut self, trim: Trim) -> FramecastResult<&mut Self> {
        let errors = validate::validate_layer_trim("set_trim", &trim);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.trim = Some(trim);
        Ok(self)
    }
}

/// Attributes of a waveform layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveformAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) style: Option<WaveformStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) format: Option<LayerFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) y: Option<f64>,
}

impl WaveformAttrs {
    /// Rendering style, when set.
    pub fn style(&self) -> Option<WaveformStyle> {
        self.style
    }

    /// Trace color, when set.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Background fill color, when set.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    /// Fit mode, when set.
    pub fn format(&self) -> Option<LayerFormat> {
        self.format
    }

    /// Layer box width in pixels, when set.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Layer box height in pixels, when set.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Horizontal position in pixels, when set.
    pub fn x(&self) -> Option<f64> {
        self.x
    }

    /// Vertical position in pixels, when set.
    pub fn y(&self) -> Option<f64> {
        self.y
    }

    /// Set the rendering style from its wire name.
    pub fn set_style(&mut self, style: &str) -> FramecastResult<&mut Self> {
        let parsed = validate::validate_waveform_style("set_style", "style", style)
            .map_err(FramecastError::validation_one)?;
        self.style = Some(parsed);
        Ok(self)
    }

    /// Set the trace color.
    pub fn set_color(&mut self, color: impl Into<String>) -> FramecastResult<&mut Self> {
        let color = color.into();
        let mut errors = Vec::new();
        validate::check_color("set_color", "color", &color, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.color = Some(color);
        Ok(self)
    }

    /// Set the background fill color.
    pub fn set_background_color(&mut self, color: impl Into<String>) -> FramecastResult<&mut Self> {
        let color = color.into();
        let mut errors = Vec::new();
        validate::check_color("set_background_color", "backgroundColor", &color, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.background_color = Some(color);
        Ok(self)
    }

    /// Set the fit mode from its wire name.
    pub fn set_format(&mut self, format: &str) -> FramecastResult<&mut Self> {
        let parsed = validate::validate_layer_format("set_format", "format", format)
            .map_err(FramecastError::validation_one)?;
        self.format = Some(parsed);
        Ok(self)
    }

    /// Set the layer box size in pixels.
    pub fn set_dimensions(&mut self, width: f64, height: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_timeline_number("set_dimensions", "width", width, &mut errors);
        validate::check_timeline_number("set_dimensions", "height", height, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.width = Some(width);
        self.height = Some(height);
        Ok(self)
    }

    /// Set the layer position in pixels.
    pub fn set_position(&mut self, x: f64, y: f64) -> FramecastResult<&mut Self> {
        let mut errors = Vec::new();
        validate::check_coordinate("set_position", "x", x, &mut errors);
        validate::check_coordinate("set_position", "y", y, &mut errors);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.x = Some(x);
        self.y = Some(y);
        Ok(self)
    }
}

/// Attributes of a Lottie vector-animation layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct LottieAttrs {
    pub(crate) data: serde_json::Value,
}

impl LottieAttrs {
    /// The Lottie animation JSON.
    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Replace the Lottie animation JSON; must be an object.
    pub fn set_data(&mut self, data: serde_json::Value) -> FramecastResult<&mut Self> {
        let errors = validate::validate_layer_lottie("set_data", &data);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        self.data = data;
        Ok(self)
    }
}

/// Attributes of a layer-level filter.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FilterAttrs {
    pub(crate) filter: LayerFilter,
}

impl FilterAttrs {
    /// The validated filter reference.
    pub fn filter(&self) -> &LayerFilter {
        &self.filter
    }

    /// Replace the filter, validating the name against the closed set and the
    /// options against that name's documented shape.
    pub fn set_filter(
        &mut self,
        filter_name: &str,
        options: serde_json::Value,
    ) -> FramecastResult<&mut Self> {
        let filter = validate::build_layer_filter("set_filter", filter_name, options)
            .map_err(FramecastError::validation)?;
        self.filter = filter;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
