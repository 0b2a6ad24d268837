//! # Framecast guide
//!
//! This module is a standalone walkthrough of Framecast's architecture and
//! public API. If you are looking for copy/paste snippets, start with the
//! repository `README.md`; if you are implementing new features, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Composition`](crate::Composition): the mutable aggregate — ordered
//!   layers, global options, and composition-wide filters
//! - [`Layer`](crate::Layer) / [`LayerKind`](crate::LayerKind): one timed
//!   element on the timeline, tagged by kind with its own attribute struct
//! - [`EncodeConfig`](crate::EncodeConfig): the immutable, API-ready payload
//!   derived from a composition at submit time
//! - [`EncodeTransport`](crate::EncodeTransport): the injected collaborator
//!   that actually performs the multipart submission
//!
//! The submission pipeline is explicitly staged:
//!
//! 1. Build and mutate: `add_video` / `add_text` / `set_options` / …
//! 2. Compile the snapshot: [`compile_config`](crate::compile_config)
//! 3. Package and submit: [`Composition::encode`](crate::Composition::encode)
//!
//! ---
//!
//! ## Validation (and why it never throws)
//!
//! Every mutating operation validates its full input before writing
//! anything. Problems are reported as a list of human-readable strings
//! inside [`FramecastError::Validation`](crate::FramecastError::Validation);
//! the operation that produced them is rejected wholesale, so a composition
//! is never observable in a half-updated state.
//!
//! Three kinds of attribute checks exist, and they behave differently on
//! purpose:
//!
//! - **Closed enums** (`format`, alignments, `style`, `filterName`) reject
//!   values outside the set. The error names the offending value and lists
//!   every valid member, comma-joined, in declaration order — the message is
//!   deterministic across platforms and releases.
//! - **Range-constrained numbers** (`start`, `length`, sizes, trim bounds)
//!   reject non-finite or negative values.
//! - **Volume** clamps to `[0, 1]` instead of rejecting: an out-of-range
//!   volume is a usability slip, not a broken composition. `set_muted()` is
//!   sugar for volume 0 and cannot fail.
//!
//! Layer-level filters validate their name against the closed set and their
//! options against the documented per-name shape. Composition-wide filters
//! ([`Composition::add_filter`](crate::Composition::add_filter)) validate
//! nothing: that path is deliberately forward-compatible with filters this
//! crate does not know about, and the asymmetry is intentional.
//!
//! ---
//!
//! ## Dimensions: `aspect_ratio` vs `resolution`
//!
//! Both options may be stored at once; storage is tolerant and reads are
//! strict. When the config is generated:
//!
//! - an explicit `resolution` wins verbatim, and the stored `hd` flag passes
//!   through untouched;
//! - otherwise dimensions are derived from `(aspect_ratio, hd)` through a
//!   fixed lookup of `"<width>x<height>"` strings, and `hd` is recomputed
//!   from the derived width (`>= 1024`) rather than trusted;
//! - `resolution` itself never appears in the generated config — the service
//!   accepts only `dimensions`.
//!
//! ---
//!
//! ## Submission boundary
//!
//! [`build_request_parts`](crate::build_request_parts) turns a composition
//! into one multipart submission: a `url<id>` or `file<id>` part per
//! media-backed layer (in layer order) and a final `config` part holding the
//! JSON config. The [`EncodeTransport`](crate::EncodeTransport) collaborator
//! owns everything network-shaped — method, headers, auth, retries. Config
//! errors therefore surface before any network activity, and transport
//! errors are passed back to the caller unchanged.
//!
//! The config embeds a cloned snapshot of the layers, so mutating the
//! composition after calling `encode` cannot affect an in-flight request.
//!
//! The `http` feature provides `HttpTransport`, a blocking `reqwest`
//! implementation; the core crate compiles without it.
