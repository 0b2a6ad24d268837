//! Framecast is a client-side composition layer for a remote video-rendering
//! service.
//!
//! Callers describe a video as an ordered set of typed layers (video, image,
//! text, audio, waveform, Lottie, filter) plus global options, and the crate
//! validates, normalizes, and serializes that description into a single
//! encode request handed to an injected transport collaborator.
//!
//! # Pipeline overview
//!
//! 1. **Build**: mutate a [`Composition`] through typed `add_*` / `set_*`
//!    operations; every mutation is validated up front and rejected without
//!    partial writes.
//! 2. **Compile**: `Composition -> EncodeConfig` via [`compile_config`]
//!    (deterministic; resolves aspect ratio or resolution to concrete pixel
//!    dimensions and strips internal-only state).
//! 3. **Submit**: [`Composition::encode`] packages media references and the
//!    config into one multipart submission and delegates to an
//!    [`EncodeTransport`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Fail-fast validation, accumulated errors**: rejected attributes are
//!   reported as a list of human-readable messages with deterministic text
//!   and ordering; the composition's prior state is always preserved.
//! - **Snapshot semantics**: an [`EncodeConfig`] is immutable once generated;
//!   later composition mutations never affect an in-flight request.
//! - **Transport-agnostic core**: HTTP lives behind the [`EncodeTransport`]
//!   trait; a blocking `reqwest` implementation is available behind the
//!   `http` feature.
//!
//! # Getting started
//!
//! - For end-user usage, see the repository README.
//! - For a detailed walkthrough of the API and architecture, see
//!   [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod compile;
mod composition;
mod encode;
mod foundation;

/// High-level, standalone documentation for Framecast's concepts and
/// architecture.
pub mod guide;

pub use compile::config::{
    EncodeConfig, compile_config, parse_dimension_string, size_for_aspect_ratio,
};
pub use composition::dsl::{
    AudioOpts, Composition, FilterOpts, ImageOpts, LottieOpts, TextOpts, VideoOpts, WaveformOpts,
};
pub use composition::model::{
    AudioAttrs, CompositionFilter, CompositionOptions, Dimensions, FilterAttrs, FilterName,
    HorizontalAlignment, ImageAttrs, Layer, LayerFilter, LayerFormat, LayerKind, LottieAttrs,
    MediaSource, OptionsUpdate, TextAttrs, Trim, VerticalAlignment, VideoAttrs, WaveformAttrs,
    WaveformStyle,
};
pub use composition::validate::{
    validate_composition_options, validate_filter_name, validate_filter_options,
    validate_horizontal_alignment, validate_layer_alignment, validate_layer_base,
    validate_layer_format, validate_layer_lottie, validate_layer_text, validate_layer_trim,
    validate_layer_visual_media, validate_vertical_alignment, validate_waveform_style,
};
#[cfg(feature = "http")]
pub use encode::http::HttpTransport;
pub use encode::request::{
    CONFIG_PART, EncodeResponse, EncodeTransport, FormPart, PartBody, build_request_parts,
};
pub use foundation::error::{FramecastError, FramecastResult};
