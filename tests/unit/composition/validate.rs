use super::*;
use crate::composition::model::Dimensions;

const CALLER: &str = "caller";

#[test]
fn layer_base_accepts_valid_placement() {
    assert!(validate_layer_base(CALLER, 5.0, 10.0).is_empty());
    assert!(validate_layer_base(CALLER, 0.0, 0.0).is_empty());
}

#[test]
fn layer_base_reports_start_before_length() {
    let errors = validate_layer_base(CALLER, -1.0, f64::NAN);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], "caller: attribute 'start' must be >= 0");
    assert_eq!(errors[1], "caller: attribute 'length' must be a finite number");
}

#[test]
fn trim_errors_are_namespaced_under_trim() {
    let errors = validate_layer_trim(
        CALLER,
        &Trim {
            start: f64::NAN,
            end: -2.0,
        },
    );
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("'trim.start'"));
    assert!(errors[1].contains("'trim.end'"));
}

#[test]
fn trim_rejects_inverted_range() {
    let errors = validate_layer_trim(CALLER, &Trim { start: 5.0, end: 1.0 });
    assert_eq!(
        errors,
        vec!["caller: attribute 'trim.end' must be >= 'trim.start'".to_string()]
    );
    assert!(validate_layer_trim(CALLER, &Trim { start: 1.0, end: 5.0 }).is_empty());
}

#[test]
fn visual_media_checks_in_declaration_order() {
    let errors = validate_layer_visual_media(CALLER, Some(""), Some("  "), Some(f64::NAN), None);
    assert_eq!(errors.len(), 3);
    assert!(errors[0].contains("'backgroundColor'"));
    assert!(errors[1].contains("'color'"));
    assert!(errors[2].contains("'x'"));
}

#[test]
fn visual_media_allows_negative_coordinates() {
    assert!(validate_layer_visual_media(CALLER, None, None, Some(-50.0), Some(-10.0)).is_empty());
}

#[test]
fn horizontal_alignment_lists_full_valid_set() {
    let err = validate_horizontal_alignment(CALLER, "horizontalAlignment", "diagonal").unwrap_err();
    assert_eq!(
        err,
        "caller: attribute 'horizontalAlignment' value 'diagonal' must be one of: left, center, right"
    );
    assert_eq!(
        validate_horizontal_alignment(CALLER, "horizontalAlignment", "center"),
        Ok(HorizontalAlignment::Center)
    );
}

#[test]
fn vertical_alignment_lists_full_valid_set() {
    let err = validate_vertical_alignment(CALLER, "verticalAlignment", "middle").unwrap_err();
    assert_eq!(
        err,
        "caller: attribute 'verticalAlignment' value 'middle' must be one of: top, center, bottom"
    );
    assert_eq!(
        validate_vertical_alignment(CALLER, "verticalAlignment", "bottom"),
        Ok(VerticalAlignment::Bottom)
    );
}

#[test]
fn alignment_failures_do_not_suppress_each_other() {
    let errors = validate_layer_alignment(CALLER, Some("sideways"), Some("upside-down"));
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("'horizontalAlignment'"));
    assert!(errors[1].contains("'verticalAlignment'"));

    let errors = validate_layer_alignment(CALLER, Some("center"), Some("upside-down"));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("'verticalAlignment'"));
}

#[test]
fn alignment_with_nothing_present_passes() {
    assert!(validate_layer_alignment(CALLER, None, None).is_empty());
}

#[test]
fn layer_format_is_a_closed_set() {
    let err = validate_layer_format(CALLER, "format", "tile").unwrap_err();
    assert_eq!(
        err,
        "caller: attribute 'format' value 'tile' must be one of: fill, fit, crop, stretch"
    );
    assert_eq!(
        validate_layer_format(CALLER, "format", "fit"),
        Ok(LayerFormat::Fit)
    );
}

#[test]
fn waveform_style_is_a_closed_set() {
    let err = validate_waveform_style(CALLER, "style", "bars").unwrap_err();
    assert_eq!(
        err,
        "caller: attribute 'style' value 'bars' must be one of: wave, line"
    );
    assert_eq!(
        validate_waveform_style(CALLER, "style", "line"),
        Ok(WaveformStyle::Line)
    );
}

#[test]
fn lottie_data_must_be_an_object() {
    assert!(validate_layer_lottie(CALLER, &serde_json::json!({ "v": "5.5.7" })).is_empty());
    let errors = validate_layer_lottie(CALLER, &serde_json::json!([1, 2, 3]));
    assert_eq!(
        errors,
        vec!["caller: attribute 'data' must be a JSON object".to_string()]
    );
}

#[test]
fn text_validator_reports_in_declaration_order() {
    let opts = TextOpts {
        font_family: Some(String::new()),
        font_size: Some(f64::NAN),
        max_font_size: Some(-1.0),
        ..TextOpts::default()
    };
    let errors = validate_layer_text(CALLER, "", &opts);
    assert_eq!(errors.len(), 4);
    assert!(errors[0].contains("'fontFamily'"));
    assert!(errors[1].contains("'fontSize'"));
    assert!(errors[2].contains("'maxFontSize'"));
    assert!(errors[3].contains("'text'"));
}

#[test]
fn text_validator_uses_the_closed_set_message_for_alignment() {
    let opts = TextOpts {
        text_alignment: Some("diagonal".to_string()),
        ..TextOpts::default()
    };
    let errors = validate_layer_text(CALLER, "hello", &opts);
    assert_eq!(
        errors,
        vec![
            "caller: attribute 'textAlignment' value 'diagonal' must be one of: left, center, right"
                .to_string()
        ]
    );
}

#[test]
fn filter_name_is_a_closed_set() {
    let err = validate_filter_name(CALLER, "filterName", "sharpen").unwrap_err();
    assert_eq!(
        err,
        "caller: attribute 'filterName' value 'sharpen' must be one of: \
         brightness, contrast, fadein, fadeout, grayscale, lighten, negative, \
         saturation, sobel, vintage"
    );
    assert_eq!(
        validate_filter_name(CALLER, "filterName", "fadein"),
        Ok(FilterName::FadeIn)
    );
}

#[test]
fn missing_required_filter_option_is_exactly_one_error() {
    let errors = validate_filter_options(CALLER, FilterName::Brightness, &serde_json::json!({}));
    assert_eq!(
        errors,
        vec!["caller: attribute 'options.brightness' is required".to_string()]
    );
}

#[test]
fn wrong_filter_option_type_is_reported() {
    let errors = validate_filter_options(
        CALLER,
        FilterName::Contrast,
        &serde_json::json!({ "contrast": "high" }),
    );
    assert_eq!(
        errors,
        vec!["caller: attribute 'options.contrast' must be a number".to_string()]
    );
}

#[test]
fn fadein_requires_color_and_duration() {
    let errors = validate_filter_options(CALLER, FilterName::FadeIn, &serde_json::json!({}));
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], "caller: attribute 'options.color' is required");
    assert_eq!(errors[1], "caller: attribute 'options.duration' is required");

    let ok = validate_filter_options(
        CALLER,
        FilterName::FadeIn,
        &serde_json::json!({ "color": "black", "duration": 3 }),
    );
    assert!(ok.is_empty());
}

#[test]
fn payload_less_filters_reject_options() {
    let errors = validate_filter_options(
        CALLER,
        FilterName::Grayscale,
        &serde_json::json!({ "level": 1 }),
    );
    assert_eq!(
        errors,
        vec!["caller: filter 'grayscale' does not accept options".to_string()]
    );
    assert!(validate_filter_options(CALLER, FilterName::Vintage, &serde_json::Value::Null).is_empty());
    assert!(validate_filter_options(CALLER, FilterName::Sobel, &serde_json::json!({})).is_empty());
}

#[test]
fn composition_options_validate_the_changed_subset() {
    let options = CompositionOptions {
        duration: Some(-1.0),
        metadata: Some(serde_json::json!("not-an-object")),
        resolution: Some(Dimensions {
            width: 0,
            height: 480,
        }),
        ..CompositionOptions::default()
    };
    let errors = validate_composition_options(CALLER, &options);
    assert_eq!(errors.len(), 3);
    assert!(errors[0].contains("'duration'"));
    assert!(errors[1].contains("'metadata'"));
    assert!(errors[2].contains("'resolution.width'"));
}
