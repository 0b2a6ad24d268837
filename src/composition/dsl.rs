use std::collections::BTreeMap;

use crate::{
    composition::model::{
        AudioAttrs, CompositionFilter, CompositionOptions, FilterAttrs, ImageAttrs, Layer,
        LayerFormat, LayerKind, LottieAttrs, MediaSource, OptionsUpdate, TextAttrs, Trim,
        VideoAttrs, WaveformAttrs, WaveformStyle,
    },
    composition::validate,
    encode::request::{self, EncodeResponse, EncodeTransport},
    foundation::error::{FramecastError, FramecastResult},
};

/// Attribute bag for [`Composition::add_video`]. All fields are optional;
/// enum-valued attributes are given as wire strings and validated against
/// their closed sets.
#[derive(Clone, Debug, Default)]
pub struct VideoOpts {
    /// Timeline start in seconds; defaults to 0.
    pub start: Option<f64>,
    /// Timeline length in seconds; defaults to 0.
    pub length: Option<f64>,
    /// Fit mode wire name (`fill`, `fit`, `crop`, `stretch`).
    pub format: Option<String>,
    /// Layer box width in pixels.
    pub width: Option<f64>,
    /// Layer box height in pixels.
    pub height: Option<f64>,
    /// Horizontal position in pixels.
    pub x: Option<f64>,
    /// Vertical position in pixels.
    pub y: Option<f64>,
    /// Letterbox fill color.
    pub background_color: Option<String>,
    /// Source trim range in seconds.
    pub trim: Option<Trim>,
    /// Playback volume; clamped to `[0, 1]`.
    pub volume: Option<f64>,
}

/// Attribute bag for [`Composition::add_image`].
#[derive(Clone, Debug, Default)]
pub struct ImageOpts {
    /// Timeline start in seconds; defaults to 0.
    pub start: Option<f64>,
    /// Timeline length in seconds; defaults to 0.
    pub length: Option<f64>,
    /// Fit mode wire name (`fill`, `fit`, `crop`, `stretch`).
    pub format: Option<String>,
    /// Layer box width in pixels.
    pub width: Option<f64>,
    /// Layer box height in pixels.
    pub height: Option<f64>,
    /// Horizontal position in pixels.
    pub x: Option<f64>,
    /// Vertical position in pixels.
    pub y: Option<f64>,
    /// Letterbox fill color.
    pub background_color: Option<String>,
}

/// Attribute bag for [`Composition::add_text`]. The text itself is a
/// required positional argument of the add operation.
#[derive(Clone, Debug, Default)]
pub struct TextOpts {
    /// Timeline start in seconds; defaults to 0.
    pub start: Option<f64>,
    /// Timeline length in seconds; defaults to 0.
    pub length: Option<f64>,
    /// Font family name.
    pub font_family: Option<String>,
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Upper bound for auto-sized text.
    pub max_font_size: Option<f64>,
    /// Maximum text box width in pixels.
    pub max_width: Option<f64>,
    /// Maximum text box height in pixels.
    pub max_height: Option<f64>,
    /// Text color.
    pub color: Option<String>,
    /// Text box fill color.
    pub background_color: Option<String>,
    /// Fit mode wire name (`fill`, `fit`, `crop`, `stretch`).
    pub format: Option<String>,
    /// Layer box width in pixels.
    pub width: Option<f64>,
    /// Layer box height in pixels.
    pub height: Option<f64>,
    /// Horizontal position in pixels.
    pub x: Option<f64>,
    /// Vertical position in pixels.
    pub y: Option<f64>,
    /// Horizontal text alignment wire name (`left`, `center`, `right`).
    pub text_alignment: Option<String>,
    /// Vertical text alignment wire name (`top`, `center`, `bottom`).
    pub vertical_alignment: Option<String>,
}

/// Attribute bag for [`Composition::add_audio`].
#[derive(Clone, Debug, Default)]
pub struct AudioOpts {
    /// Timeline start in seconds; defaults to 0.
    pub start: Option<f64>,
    /// Timeline length in seconds; defaults to 0.
    pub length: Option<f64>,
    /// Playback volume; clamped to `[0, 1]`.
    pub volume: Option<f64>,
    /// Source trim range in seconds.
    pub trim: Option<Trim>,
}

/// Attribute bag for [`Composition::add_waveform`].
#[derive(Clone, Debug, Default)]
pub struct WaveformOpts {
    /// Timeline start in seconds; defaults to 0.
    pub start: Option<f64>,
    /// Timeline length in seconds; defaults to 0.
    pub length: Option<f64>,
    /// Rendering style wire name (`wave`, `line`).
    pub style: Option<String>,
    /// Trace color.
    pub color: Option<String>,
    /// Background fill color.
    pub background_color: Option<String>,
    /// Fit mode wire name (`fill`, `fit`, `crop`, `stretch`).
    pub format: Option<String>,
    /// Layer box width in pixels.
    pub width: Option<f64>,
    /// Layer box height in pixels.
    pub height: Option<f64>,
    /// Horizontal position in pixels.
    pub x: Option<f64>,
    /// Vertical position in pixels.
    pub y: Option<f64>,
}

/// Attribute bag for [`Composition::add_lottie`]. The animation JSON is a
/// required positional argument of the add operation.
#[derive(Clone, Debug, Default)]
pub struct LottieOpts {
    /// Timeline start in seconds; defaults to 0.
    pub start: Option<f64>,
    /// Timeline length in seconds; defaults to 0.
    pub length: Option<f64>,
}

/// Attribute bag for [`Composition::add_filter_layer`]. The filter name and
/// options are required positional arguments of the add operation.
#[derive(Clone, Debug, Default)]
pub struct FilterOpts {
    /// Timeline start in seconds; defaults to 0.
    pub start: Option<f64>,
    /// Timeline length in seconds; defaults to 0.
    pub length: Option<f64>,
}

/// The mutable aggregate root: an ordered set of typed layers plus global
/// options, built up through validated add/update operations and flattened
/// into an immutable encode config at submit time.
///
/// Insertion order is render order. Every layer belongs to exactly one
/// composition, which owns it for its whole lifetime; layer ids are unique
/// within the composition. A rejected operation leaves the composition
/// exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct Composition {
    options: CompositionOptions,
    layers: Vec<Layer>,
    filters: Vec<CompositionFilter>,
    media: BTreeMap<String, MediaSource>,
}

impl Composition {
    /// Create an empty composition with the given global options.
    pub fn new(options: CompositionOptions) -> FramecastResult<Self> {
        let errors = validate::validate_composition_options("new", &options);
        if !errors.is_empty() {
            return Err(FramecastError::validation(errors));
        }
        Ok(Self {
            options,
            layers: Vec::new(),
            filters: Vec::new(),
            media: BTreeMap::new(),
        })
    }

    /// Global composition options.
    pub fn options(&self) -> &CompositionOptions {
        &self.options
    }

    /// All layers, in render order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Look up a layer by id.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Composition-wide filters, in the order they were added.
    ///
    /// These are held on the composition but are not part of the encode
    /// config; they address service features outside the encode request.
    pub fn filters(&self) -> &[CompositionFilter] {
        &self.filters
    }

    pub(crate) fn media_for(&self, id: &str) -> Option<&MediaSource> {
        self.media.get(id)
    }

    /// Add a video layer backed by `source`.
    pub fn add_video(&mut self, source: MediaSource, opts: VideoOpts) -> FramecastResult<&Layer> {
        const CALLER: &str = "add_video";
        let start = opts.start.unwrap_or(0.0);
        let length = opts.length.unwrap_or(0.0);
        let mut errors = validate::validate_layer_base(CALLER, start, length);
        errors.extend(validate::validate_layer_visual_media(
            CALLER,
            opts.background_color.as_deref(),
            None,
            opts.x,
            opts.y,
        ));
        check_box_size(CALLER, opts.width, opts.height, &mut errors);
        let format = parse_format(CALLER, opts.format.as_deref(), &mut errors);
        if let Some(trim) = &opts.trim {
            errors.extend(validate::validate_layer_trim(CALLER, trim));
        }
        let volume = clamp_volume(CALLER, opts.volume, &mut errors);
        if !errors.is_empty() {
            return Err(Self::reject(CALLER, errors));
        }
        let attrs = VideoAttrs {
            format,
            width: opts.width,
            height: opts.height,
            x: opts.x,
            y: opts.y,
            background_color: opts.background_color,
            trim: opts.trim,
            volume,
        };
        Ok(self.push(CALLER, start, length, LayerKind::Video(attrs), Some(source)))
    }

    /// Add a still-image layer backed by `source`.
    pub fn add_image(&mut self, source: MediaSource, opts: ImageOpts) -> FramecastResult<&Layer> {
        const CALLER: &str = "add_image";
        let start = opts.start.unwrap_or(0.0);
        let length = opts.length.unwrap_or(0.0);
        let mut errors = validate::validate_layer_base(CALLER, start, length);
        errors.extend(validate::validate_layer_visual_media(
            CALLER,
            opts.background_color.as_deref(),
            None,
            opts.x,
            opts.y,
        ));
        check_box_size(CALLER, opts.width, opts.height, &mut errors);
        let format = parse_format(CALLER, opts.format.as_deref(), &mut errors);
        if !errors.is_empty() {
            return Err(Self::reject(CALLER, errors));
        }
        let attrs = ImageAttrs {
            format,
            width: opts.width,
            height: opts.height,
            x: opts.x,
            y: opts.y,
            background_color: opts.background_color,
        };
        Ok(self.push(CALLER, start, length, LayerKind::Image(attrs), Some(source)))
    }

    /// Add a text layer.
    pub fn add_text(&mut self, text: impl Into<String>, opts: TextOpts) -> FramecastResult<&Layer> {
        const CALLER: &str = "add_text";
        let text = text.into();
        let start = opts.start.unwrap_or(0.0);
        let length = opts.length.unwrap_or(0.0);
        let mut errors = validate::validate_layer_base(CALLER, start, length);
        errors.extend(validate::validate_layer_visual_media(
            CALLER,
            opts.background_color.as_deref(),
            opts.color.as_deref(),
            opts.x,
            opts.y,
        ));
        check_box_size(CALLER, opts.width, opts.height, &mut errors);
        let format = parse_format(CALLER, opts.format.as_deref(), &mut errors);
        errors.extend(validate::validate_layer_alignment(
            CALLER,
            None,
            opts.vertical_alignment.as_deref(),
        ));
        errors.extend(validate::validate_layer_text(CALLER, &text, &opts));
        if !errors.is_empty() {
            return Err(Self::reject(CALLER, errors));
        }
        // Known-valid after the checks above.
        let text_alignment = opts
            .text_alignment
            .as_deref()
            .and_then(|v| validate::validate_horizontal_alignment(CALLER, "textAlignment", v).ok());
        let vertical_alignment = opts.vertical_alignment.as_deref().and_then(|v| {
            validate::validate_vertical_alignment(CALLER, "verticalAlignment", v).ok()
        });
        let attrs = TextAttrs {
            text,
            font_family: opts.font_family,
            font_size: opts.font_size,
            max_font_size: opts.max_font_size,
            max_width: opts.max_width,
            max_height: opts.max_height,
            color: opts.color,
            background_color: opts.background_color,
            format,
            width: opts.width,
            height: opts.height,
            x: opts.x,
            y: opts.y,
            text_alignment,
            vertical_alignment,
        };
        Ok(self.push(CALLER, start, length, LayerKind::Text(attrs), None))
    }

    /// Add an audio layer backed by `source`.
    pub fn add_audio(&mut self, source: MediaSource, opts: AudioOpts) -> FramecastResult<&Layer> {
        const CALLER: &str = "add_audio";
        let start = opts.start.unwrap_or(0.0);
        let length = opts.length.unwrap_or(0.0);
        let mut errors = validate::validate_layer_base(CALLER, start, length);
        if let Some(trim) = &opts.trim {
            errors.extend(validate::validate_layer_trim(CALLER, trim));
        }
        let volume = clamp_volume(CALLER, opts.volume, &mut errors);
        if !errors.is_empty() {
            return Err(Self::reject(CALLER, errors));
        }
        let attrs = AudioAttrs {
            volume,
            trim: opts.trim,
        };
        Ok(self.push(CALLER, start, length, LayerKind::Audio(attrs), Some(source)))
    }

    /// Add a waveform layer visualizing the composition's audio.
    pub fn add_waveform(&mut self, opts: WaveformOpts) -> FramecastResult<&Layer> {
        const CALLER: &str = "add_waveform";
        let start = opts.start.unwrap_or(0.0);
        let length = opts.length.unwrap_or(0.0);
        let mut errors = validate::validate_layer_base(CALLER, start, length);
        errors.extend(validate::validate_layer_visual_media(
            CALLER,
            opts.background_color.as_deref(),
            opts.color.as_deref(),
            opts.x,
            opts.y,
        ));
        check_box_size(CALLER, opts.width, opts.height, &mut errors);
        let format = parse_format(CALLER, opts.format.as_deref(), &mut errors);
        let style = parse_style(CALLER, opts.style.as_deref(), &mut errors);
        if !errors.is_empty() {
            return Err(Self::reject(CALLER, errors));
        }
        let attrs = WaveformAttrs {
            style,
            color: opts.color,
            background_color: opts.background_color,
            format,
            width: opts.width,
            height: opts.height,
            x: opts.x,
            y: opts.y,
        };
        Ok(self.push(CALLER, start, length, LayerKind::Waveform(attrs), None))
    }

    /// Add a Lottie vector-animation layer; `data` must be a JSON object.
    pub fn add_lottie(
        &mut self,
        data: serde_json::Value,
        opts: LottieOpts,
    ) -> FramecastResult<&Layer> {
        const CALLER: &str = "add_lottie";
        let start = opts.start.unwrap_or(0.0);
        let length = opts.length.unwrap_or(0.0);
        let mut errors = validate::validate_layer_base(CALLER, start, length);
        errors.extend(validate::validate_layer_lottie(CALLER, &data));
        if !errors.is_empty() {
            return Err(Self::reject(CALLER, errors));
        }
        let attrs = LottieAttrs { data };
        Ok(self.push(CALLER, start, length, LayerKind::Lottie(attrs), None))
    }

    /// Add a filter as its own timeline layer. The name must be one of the
    /// recognized filter names and the options must match that name's
    /// documented shape.
    pub fn add_filter_layer(
        &mut self,
        filter_name: &str,
        options: serde_json::Value,
        opts: FilterOpts,
    ) -> FramecastResult<&Layer> {
        const CALLER: &str = "add_filter_layer";
        let start = opts.start.unwrap_or(0.0);
        let length = opts.length.unwrap_or(0.0);
        let mut errors = validate::validate_layer_base(CALLER, start, length);
        let filter = match validate::build_layer_filter(CALLER, filter_name, options) {
            Ok(filter) => Some(filter),
            Err(mut filter_errors) => {
                errors.append(&mut filter_errors);
                None
            }
        };
        let (true, Some(filter)) = (errors.is_empty(), filter) else {
            return Err(Self::reject(CALLER, errors));
        };
        let attrs = FilterAttrs { filter };
        Ok(self.push(CALLER, start, length, LayerKind::Filter(attrs), None))
    }

    /// Add a composition-wide filter.
    ///
    /// Unlike [`add_filter_layer`](Self::add_filter_layer) this performs no
    /// structural validation of `options` against `name`, so filters unknown
    /// to this crate can be addressed.
    pub fn add_filter(
        &mut self,
        name: impl Into<String>,
        options: serde_json::Value,
    ) -> &mut Self {
        self.filters.push(CompositionFilter {
            name: name.into(),
            options,
        });
        self
    }

    /// Apply a field-wise update to the global options, validating only the
    /// changed subset. Setting `resolution` does not clear `aspect_ratio`
    /// (or vice versa); resolution wins when the config is generated.
    pub fn set_options(&mut self, update: OptionsUpdate) -> FramecastResult<&mut Self> {
        let candidate = CompositionOptions {
            aspect_ratio: update.aspect_ratio.clone(),
            background_color: update.background_color.clone(),
            duration: update.duration,
            hd: update.hd,
            metadata: update.metadata.clone(),
            resolution: update.resolution,
        };
        let errors = validate::validate_composition_options("set_options", &candidate);
        if !errors.is_empty() {
            return Err(Self::reject("set_options", errors));
        }
        if let Some(v) = update.aspect_ratio {
            self.options.aspect_ratio = Some(v);
        }
        if let Some(v) = update.background_color {
            self.options.background_color = Some(v);
        }
        if let Some(v) = update.duration {
            self.options.duration = Some(v);
        }
        if let Some(v) = update.hd {
            self.options.hd = Some(v);
        }
        if let Some(v) = update.metadata {
            self.options.metadata = Some(v);
        }
        if let Some(v) = update.resolution {
            self.options.resolution = Some(v);
        }
        Ok(self)
    }

    /// Mutable access to a layer's shared base attributes.
    pub fn layer_mut(&mut self, id: &str) -> FramecastResult<&mut Layer> {
        Self::find_layer(&mut self.layers, "layer_mut", id)
    }

    /// Mutable access to a video layer's attributes for fluent updates.
    pub fn video_mut(&mut self, id: &str) -> FramecastResult<&mut VideoAttrs> {
        let layer = Self::find_layer(&mut self.layers, "video_mut", id)?;
        let actual = layer.type_name();
        match &mut layer.kind {
            LayerKind::Video(attrs) => Ok(attrs),
            _ => Err(Self::kind_mismatch("video_mut", id, actual, "video")),
        }
    }

    /// Mutable access to an image layer's attributes for fluent updates.
    pub fn image_mut(&mut self, id: &str) -> FramecastResult<&mut ImageAttrs> {
        let layer = Self::find_layer(&mut self.layers, "image_mut", id)?;
        let actual = layer.type_name();
        match &mut layer.kind {
            LayerKind::Image(attrs) => Ok(attrs),
            _ => Err(Self::kind_mismatch("image_mut", id, actual, "image")),
        }
    }

    /// Mutable access to a text layer's attributes for fluent updates.
    pub fn text_mut(&mut self, id: &str) -> FramecastResult<&mut TextAttrs> {
        let layer = Self::find_layer(&mut self.layers, "text_mut", id)?;
        let actual = layer.type_name();
        match &mut layer.kind {
            LayerKind::Text(attrs) => Ok(attrs),
            _ => Err(Self::kind_mismatch("text_mut", id, actual, "text")),
        }
    }

    /// Mutable access to an audio layer's attributes for fluent updates.
    pub fn audio_mut(&mut self, id: &str) -> FramecastResult<&mut AudioAttrs> {
        let layer = Self::find_layer(&mut self.layers, "audio_mut", id)?;
        let actual = layer.type_name();
        match &mut layer.kind {
            LayerKind::Audio(attrs) => Ok(attrs),
            _ => Err(Self::kind_mismatch("audio_mut", id, actual, "audio")),
        }
    }

    /// Mutable access to a waveform layer's attributes for fluent updates.
    pub fn waveform_mut(&mut self, id: &str) -> FramecastResult<&mut WaveformAttrs> {
        let layer = Self::find_layer(&mut self.layers, "waveform_mut", id)?;
        let actual = layer.type_name();
        match &mut layer.kind {
            LayerKind::Waveform(attrs) => Ok(attrs),
            _ => Err(Self::kind_mismatch("waveform_mut", id, actual, "waveform")),
        }
    }

    /// Mutable access to a Lottie layer's attributes for fluent updates.
    pub fn lottie_mut(&mut self, id: &str) -> FramecastResult<&mut LottieAttrs> {
        let layer = Self::find_layer(&mut self.layers, "lottie_mut", id)?;
        let actual = layer.type_name();
        match &mut layer.kind {
            LayerKind::Lottie(attrs) => Ok(attrs),
            _ => Err(Self::kind_mismatch("lottie_mut", id, actual, "lottie")),
        }
    }

    /// Mutable access to a filter layer's attributes for fluent updates.
    pub fn filter_mut(&mut self, id: &str) -> FramecastResult<&mut FilterAttrs> {
        let layer = Self::find_layer(&mut self.layers, "filter_mut", id)?;
        let actual = layer.type_name();
        match &mut layer.kind {
            LayerKind::Filter(attrs) => Ok(attrs),
            _ => Err(Self::kind_mismatch("filter_mut", id, actual, "filter")),
        }
    }

    /// Flatten the composition and submit it through the injected transport.
    ///
    /// Config-generation errors surface before the transport is invoked;
    /// transport errors are propagated unchanged. The submitted snapshot is
    /// independent of the composition, so mutations made after this call
    /// cannot affect an in-flight request.
    #[tracing::instrument(skip(self, transport))]
    pub fn encode(&self, transport: &dyn EncodeTransport) -> FramecastResult<EncodeResponse> {
        let parts = request::build_request_parts(self)?;
        transport.submit(parts)
    }

    fn find_layer<'a>(
        layers: &'a mut [Layer],
        caller: &str,
        id: &str,
    ) -> FramecastResult<&'a mut Layer> {
        layers
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| {
                FramecastError::validation_one(format!("{caller}: no layer with id '{id}'"))
            })
    }

    fn kind_mismatch(caller: &str, id: &str, actual: &str, expected: &str) -> FramecastError {
        FramecastError::validation_one(format!(
            "{caller}: layer '{id}' has kind '{actual}', expected '{expected}'"
        ))
    }

    fn reject(caller: &'static str, errors: Vec<String>) -> FramecastError {
        tracing::warn!(caller, rejected = errors.len(), "layer validation failed");
        FramecastError::validation(errors)
    }

    fn push(
        &mut self,
        caller: &'static str,
        start: f64,
        length: f64,
        kind: LayerKind,
        source: Option<MediaSource>,
    ) -> &Layer {
        let id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(caller, %id, "layer added");
        if let Some(source) = source {
            self.media.insert(id.clone(), source);
        }
        self.layers.push(Layer {
            id,
            start,
            length,
            kind,
        });
        &self.layers[self.layers.len() - 1]
    }
}

fn check_box_size(
    caller: &str,
    width: Option<f64>,
    height: Option<f64>,
    errors: &mut Vec<String>,
) {
    if let Some(w) = width {
        validate::check_timeline_number(caller, "width", w, errors);
    }
    if let Some(h) = height {
        validate::check_timeline_number(caller, "height", h, errors);
    }
}

fn parse_format(
    caller: &str,
    value: Option<&str>,
    errors: &mut Vec<String>,
) -> Option<LayerFormat> {
    match value {
        None => None,
        Some(v) => match validate::validate_layer_format(caller, "format", v) {
            Ok(format) => Some(format),
            Err(e) => {
                errors.push(e);
                None
            }
        },
    }
}

fn parse_style(
    caller: &str,
    value: Option<&str>,
    errors: &mut Vec<String>,
) -> Option<WaveformStyle> {
    match value {
        None => None,
        Some(v) => match validate::validate_waveform_style(caller, "style", v) {
            Ok(style) => Some(style),
            Err(e) => {
                errors.push(e);
                None
            }
        },
    }
}

fn clamp_volume(caller: &str, value: Option<f64>, errors: &mut Vec<String>) -> Option<f64> {
    match value {
        None => None,
        Some(v) => match validate::clamp_volume(caller, v) {
            Ok(clamped) => Some(clamped),
            Err(e) => {
                errors.push(e);
                None
            }
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
