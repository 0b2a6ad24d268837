use super::*;
use crate::composition::dsl::{AudioOpts, TextOpts};
use crate::composition::model::{CompositionOptions, MediaSource};

fn comp_with(options: CompositionOptions) -> Composition {
    Composition::new(options).unwrap()
}

#[test]
fn explicit_resolution_wins_and_hd_passes_through() {
    let comp = comp_with(CompositionOptions {
        aspect_ratio: Some("16:9".to_string()),
        hd: Some(false),
        resolution: Some(Dimensions {
            width: 640,
            height: 480,
        }),
        ..CompositionOptions::default()
    });
    let config = compile_config(&comp).unwrap();
    assert_eq!(
        config.dimensions,
        Dimensions {
            width: 640,
            height: 480
        }
    );
    // No re-derivation from the ratio: the stored hint is passed through.
    assert_eq!(config.hd, Some(false));
}

#[test]
fn dimensions_derive_from_ratio_and_hd_recomputes_from_width() {
    let comp = comp_with(CompositionOptions {
        aspect_ratio: Some("16:9".to_string()),
        hd: Some(true),
        ..CompositionOptions::default()
    });
    let config = compile_config(&comp).unwrap();
    assert_eq!(
        config.dimensions,
        Dimensions {
            width: 1280,
            height: 720
        }
    );
    assert_eq!(config.hd, Some(true));

    let comp = comp_with(CompositionOptions {
        aspect_ratio: Some("16:9".to_string()),
        hd: Some(false),
        ..CompositionOptions::default()
    });
    let config = compile_config(&comp).unwrap();
    assert_eq!(
        config.dimensions,
        Dimensions {
            width: 640,
            height: 360
        }
    );
    assert_eq!(config.hd, Some(false));
}

#[test]
fn derived_hd_is_width_based_even_for_portrait_ratios() {
    // 720x1280 is an HD rendition of 9:16, but the derived flag follows the
    // width threshold, not the request.
    let comp = comp_with(CompositionOptions {
        aspect_ratio: Some("9:16".to_string()),
        hd: Some(true),
        ..CompositionOptions::default()
    });
    let config = compile_config(&comp).unwrap();
    assert_eq!(
        config.dimensions,
        Dimensions {
            width: 720,
            height: 1280
        }
    );
    assert_eq!(config.hd, Some(false));
}

#[test]
fn missing_hd_hint_defaults_to_sd() {
    let comp = comp_with(CompositionOptions {
        aspect_ratio: Some("1:1".to_string()),
        ..CompositionOptions::default()
    });
    let config = compile_config(&comp).unwrap();
    assert_eq!(
        config.dimensions,
        Dimensions {
            width: 480,
            height: 480
        }
    );
}

#[test]
fn resolution_never_appears_in_the_serialized_config() {
    let comp = comp_with(CompositionOptions {
        aspect_ratio: Some("16:9".to_string()),
        resolution: Some(Dimensions {
            width: 640,
            height: 480,
        }),
        ..CompositionOptions::default()
    });
    let config = compile_config(&comp).unwrap();
    let json = serde_json::to_value(&config).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("resolution"));
    assert!(object.contains_key("dimensions"));
    assert_eq!(json["aspectRatio"], "16:9");
}

#[test]
fn compiling_twice_is_byte_for_byte_identical() {
    let mut comp = comp_with(CompositionOptions {
        aspect_ratio: Some("4:3".to_string()),
        background_color: Some("#ffffff".to_string()),
        duration: Some(10.0),
        metadata: Some(serde_json::json!({ "key": "value" })),
        ..CompositionOptions::default()
    });
    comp.add_audio(
        MediaSource::Url("https://media.test/music.mp3".to_string()),
        AudioOpts {
            volume: Some(1.0),
            ..AudioOpts::default()
        },
    )
    .unwrap();
    comp.add_text("hello", TextOpts::default()).unwrap();

    let first = serde_json::to_string(&compile_config(&comp).unwrap()).unwrap();
    let second = serde_json::to_string(&compile_config(&comp).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn generated_config_is_a_snapshot() {
    let mut comp = comp_with(CompositionOptions {
        aspect_ratio: Some("16:9".to_string()),
        ..CompositionOptions::default()
    });
    comp.add_text("before", TextOpts::default()).unwrap();
    let config = compile_config(&comp).unwrap();
    assert_eq!(config.layers.len(), 1);

    comp.add_text("after", TextOpts::default()).unwrap();
    assert_eq!(config.layers.len(), 1);
}

#[test]
fn unknown_ratio_is_a_config_error() {
    let comp = comp_with(CompositionOptions {
        aspect_ratio: Some("2:1".to_string()),
        ..CompositionOptions::default()
    });
    let err = compile_config(&comp).unwrap_err();
    assert!(matches!(err, FramecastError::Config(_)));
    assert!(err.to_string().contains("unsupported aspect ratio '2:1'"));
}

#[test]
fn missing_ratio_and_resolution_is_a_config_error() {
    let comp = comp_with(CompositionOptions::default());
    let err = compile_config(&comp).unwrap_err();
    assert!(matches!(err, FramecastError::Config(_)));
    assert!(err.to_string().contains("'aspectRatio' or 'resolution'"));
}

#[test]
fn dimension_strings_parse_or_fail_loudly() {
    assert_eq!(
        parse_dimension_string("1280x720").unwrap(),
        Dimensions {
            width: 1280,
            height: 720
        }
    );
    for bad in ["1280x", "x720", "1280by720", "axb", ""] {
        let err = parse_dimension_string(bad).unwrap_err();
        assert!(matches!(err, FramecastError::Config(_)), "{bad}");
    }
}

#[test]
fn ratio_table_matches_the_hd_threshold() {
    for (ratio, hd) in [
        ("16:9", true),
        ("9:16", true),
        ("1:1", true),
        ("4:3", true),
        ("4:5", true),
        ("16:9", false),
    ] {
        let size = size_for_aspect_ratio(ratio, hd).unwrap();
        let dims = parse_dimension_string(size).unwrap();
        assert!(dims.width > 0 && dims.height > 0);
    }
    assert_eq!(size_for_aspect_ratio("16:9", true).unwrap(), "1280x720");
    assert!(size_for_aspect_ratio("21:9", false).is_err());
}
