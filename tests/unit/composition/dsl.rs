use super::*;
use crate::composition::model::{Dimensions, FilterName, HorizontalAlignment};

fn comp() -> Composition {
    Composition::new(CompositionOptions {
        aspect_ratio: Some("16:9".to_string()),
        background_color: Some("#000000".to_string()),
        duration: Some(10.0),
        hd: Some(false),
        ..CompositionOptions::default()
    })
    .unwrap()
}

fn url(path: &str) -> MediaSource {
    MediaSource::Url(format!("https://media.test/{path}"))
}

#[test]
fn new_rejects_invalid_options() {
    let err = Composition::new(CompositionOptions {
        duration: Some(-1.0),
        ..CompositionOptions::default()
    })
    .unwrap_err();
    assert_eq!(err.validation_errors().map(<[String]>::len), Some(1));
}

#[test]
fn add_video_appends_a_validated_layer_and_remembers_its_media() {
    let mut comp = comp();
    let id = comp
        .add_video(
            url("intro.mp4"),
            VideoOpts {
                start: Some(0.0),
                length: Some(5.0),
                format: Some("fit".to_string()),
                ..VideoOpts::default()
            },
        )
        .unwrap()
        .id()
        .to_string();

    assert_eq!(comp.layers().len(), 1);
    assert_eq!(comp.layer(&id).unwrap().type_name(), "video");
    assert!(comp.media_for(&id).is_some());
}

#[test]
fn add_audio_accepts_an_empty_attribute_bag() {
    let mut comp = comp();
    let layer = comp
        .add_audio(url("music.mp3"), AudioOpts::default())
        .unwrap();
    assert_eq!(layer.start(), 0.0);
    assert_eq!(layer.length(), 0.0);
}

#[test]
fn layer_ids_are_unique_within_a_composition() {
    let mut comp = comp();
    let mut ids = std::collections::BTreeSet::new();
    for i in 0..8 {
        let id = comp
            .add_image(url(&format!("frame{i}.png")), ImageOpts::default())
            .unwrap()
            .id()
            .to_string();
        assert!(ids.insert(id));
    }
    assert_eq!(comp.layers().len(), 8);
}

#[test]
fn invalid_text_alignment_leaves_the_composition_untouched() {
    let mut comp = comp();
    let err = comp
        .add_text(
            "hello",
            TextOpts {
                text_alignment: Some("diagonal".to_string()),
                ..TextOpts::default()
            },
        )
        .unwrap_err();

    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0],
        "add_text: attribute 'textAlignment' value 'diagonal' must be one of: left, center, right"
    );
    assert!(comp.layers().is_empty());
}

#[test]
fn add_text_accumulates_errors_across_validator_groups() {
    let mut comp = comp();
    let err = comp
        .add_text(
            "",
            TextOpts {
                start: Some(-2.0),
                font_size: Some(f64::NAN),
                vertical_alignment: Some("sideways".to_string()),
                ..TextOpts::default()
            },
        )
        .unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.len(), 4);
    assert!(errors.iter().any(|e| e.contains("'start'")));
    assert!(errors.iter().any(|e| e.contains("'fontSize'")));
    assert!(errors.iter().any(|e| e.contains("'verticalAlignment'")));
    assert!(errors.iter().any(|e| e.contains("'text'")));
    assert!(comp.layers().is_empty());
}

#[test]
fn add_text_stores_parsed_alignments() {
    let mut comp = comp();
    let id = comp
        .add_text(
            "hello",
            TextOpts {
                text_alignment: Some("right".to_string()),
                vertical_alignment: Some("bottom".to_string()),
                ..TextOpts::default()
            },
        )
        .unwrap()
        .id()
        .to_string();
    let attrs = comp.text_mut(&id).unwrap();
    assert_eq!(attrs.text_alignment(), Some(HorizontalAlignment::Right));
    assert_eq!(attrs.text(), "hello");
}

#[test]
fn add_filter_layer_enforces_the_documented_shapes() {
    let mut comp = comp();
    comp.add_filter_layer(
        "brightness",
        serde_json::json!({ "brightness": 0.3 }),
        FilterOpts::default(),
    )
    .unwrap();
    assert_eq!(comp.layers().len(), 1);

    let err = comp
        .add_filter_layer("brightness", serde_json::json!({}), FilterOpts::default())
        .unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(
        errors,
        &["add_filter_layer: attribute 'options.brightness' is required".to_string()]
    );
    assert_eq!(comp.layers().len(), 1);

    let err = comp
        .add_filter_layer("sharpen", serde_json::Value::Null, FilterOpts::default())
        .unwrap_err();
    assert!(err.to_string().contains("'filterName'"));
    assert_eq!(comp.layers().len(), 1);
}

#[test]
fn composition_filters_skip_structural_validation() {
    // Deliberately asymmetric with add_filter_layer: unknown names and
    // arbitrary option shapes pass through for forward compatibility.
    let mut comp = comp();
    comp.add_filter("sharpen", serde_json::json!({ "amount": 11 }))
        .add_filter("grayscale", serde_json::Value::Null);
    assert_eq!(comp.filters().len(), 2);
    assert_eq!(comp.filters()[0].name, "sharpen");
}

#[test]
fn set_options_merges_only_the_given_fields() {
    let mut comp = comp();
    comp.set_options(OptionsUpdate {
        duration: Some(20.0),
        resolution: Some(Dimensions {
            width: 640,
            height: 480,
        }),
        ..OptionsUpdate::default()
    })
    .unwrap();

    let options = comp.options();
    assert_eq!(options.duration, Some(20.0));
    // Tolerant storage: setting resolution does not clear the ratio.
    assert_eq!(options.aspect_ratio.as_deref(), Some("16:9"));
    assert_eq!(
        options.resolution,
        Some(Dimensions {
            width: 640,
            height: 480
        })
    );
    assert_eq!(options.background_color.as_deref(), Some("#000000"));
}

#[test]
fn set_options_rejects_without_applying_anything() {
    let mut comp = comp();
    let err = comp
        .set_options(OptionsUpdate {
            duration: Some(f64::NAN),
            background_color: Some("#ffffff".to_string()),
            ..OptionsUpdate::default()
        })
        .unwrap_err();
    assert!(err.to_string().contains("'duration'"));
    assert_eq!(comp.options().duration, Some(10.0));
    assert_eq!(comp.options().background_color.as_deref(), Some("#000000"));
}

#[test]
fn typed_accessors_check_the_layer_kind() {
    let mut comp = comp();
    let id = comp
        .add_audio(url("music.mp3"), AudioOpts::default())
        .unwrap()
        .id()
        .to_string();

    assert!(comp.audio_mut(&id).is_ok());
    let err = comp.video_mut(&id).unwrap_err();
    assert!(
        err.to_string()
            .contains(&format!("layer '{id}' has kind 'audio', expected 'video'"))
    );
    let err = comp.audio_mut("missing").unwrap_err();
    assert!(err.to_string().contains("no layer with id 'missing'"));
}

#[test]
fn fluent_updates_are_visible_through_the_aggregate() {
    let mut comp = comp();
    let id = comp
        .add_audio(url("music.mp3"), AudioOpts::default())
        .unwrap()
        .id()
        .to_string();

    comp.audio_mut(&id)
        .unwrap()
        .set_volume(2.0)
        .unwrap()
        .set_trim(Trim { start: 1.0, end: 4.0 })
        .unwrap();
    comp.layer_mut(&id).unwrap().set_start(3.0).unwrap();

    let layer = comp.layer(&id).unwrap();
    assert_eq!(layer.start(), 3.0);
    match layer.kind() {
        LayerKind::Audio(attrs) => {
            assert_eq!(attrs.volume(), Some(1.0));
            assert_eq!(attrs.trim(), Some(Trim { start: 1.0, end: 4.0 }));
        }
        other => panic!("expected audio attrs, got {other:?}"),
    }
}

#[test]
fn add_lottie_requires_an_object_payload() {
    let mut comp = comp();
    let err = comp
        .add_lottie(serde_json::json!("not-an-object"), LottieOpts::default())
        .unwrap_err();
    assert!(err.to_string().contains("'data'"));
    assert!(comp.layers().is_empty());

    comp.add_lottie(serde_json::json!({ "v": "5.5.7" }), LottieOpts::default())
        .unwrap();
    assert_eq!(comp.layers().len(), 1);

    let filter = comp.add_filter_layer(
        "fadein",
        serde_json::json!({ "color": "black", "duration": 2 }),
        FilterOpts::default(),
    );
    assert_eq!(
        match filter.unwrap().kind() {
            LayerKind::Filter(attrs) => attrs.filter().filter_name(),
            other => panic!("expected filter attrs, got {other:?}"),
        },
        FilterName::FadeIn
    );
}

#[test]
fn add_waveform_validates_style_and_colors() {
    let mut comp = comp();
    let err = comp
        .add_waveform(WaveformOpts {
            style: Some("bars".to_string()),
            color: Some(String::new()),
            ..WaveformOpts::default()
        })
        .unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.len(), 2);
    assert!(comp.layers().is_empty());

    comp.add_waveform(WaveformOpts {
        style: Some("line".to_string()),
        color: Some("#be5c5c".to_string()),
        background_color: Some("transparent".to_string()),
        y: Some(40.0),
        ..WaveformOpts::default()
    })
    .unwrap();
    assert_eq!(comp.layers().len(), 1);
}
