use chart_settings::core::{
    FONT_FAMILIES, FONT_SIZE_RANGE, FieldConstraints, FieldKind, FieldValue, FieldValueError,
    SelectOption, TextPattern, font_size_options, widget_for,
};

fn constraints() -> FieldConstraints {
    FieldConstraints::default()
}

#[test]
fn every_kind_has_a_widget_reporting_its_kind() {
    for kind in FieldKind::ALL {
        assert_eq!(widget_for(kind).kind(), kind);
    }
}

#[test]
fn number_widget_enforces_range_and_integrality() {
    let widget = widget_for(FieldKind::Number);
    let bounded = FieldConstraints {
        min: Some(0.0),
        max: Some(100.0),
        integer: true,
        ..FieldConstraints::default()
    };

    assert_eq!(widget.read(" 42 ", &bounded), Ok(FieldValue::Number(42.0)));
    assert_eq!(
        widget.read("101", &bounded),
        Err(FieldValueError::AboveMaximum {
            value: 101.0,
            max: 100.0
        })
    );
    assert_eq!(
        widget.read("-1", &bounded),
        Err(FieldValueError::BelowMinimum {
            value: -1.0,
            min: 0.0
        })
    );
    assert_eq!(widget.read("2.5", &bounded), Err(FieldValueError::NotAnInteger(2.5)));
    assert_eq!(
        widget.read("abc", &bounded),
        Err(FieldValueError::NotANumber("abc".to_owned()))
    );
    assert_eq!(widget.read("", &bounded), Err(FieldValueError::Empty));
    assert!(widget.read("inf", &constraints()).is_err());
}

#[test]
fn select_widget_matches_serialized_options() {
    let widget = widget_for(FieldKind::Select);
    let sizes = FieldConstraints {
        options: font_size_options(),
        allow_empty: true,
        ..FieldConstraints::default()
    };

    assert_eq!(widget.read("7", &sizes), Ok(FieldValue::Number(7.0)));
    assert_eq!(widget.read("20", &sizes), Ok(FieldValue::Number(20.0)));
    assert_eq!(widget.read("", &sizes), Ok(FieldValue::text("")));
    assert_eq!(
        widget.read("6", &sizes),
        Err(FieldValueError::NotAnOption("6".to_owned()))
    );

    let strict = FieldConstraints {
        options: vec![SelectOption::new("a", "A")],
        ..FieldConstraints::default()
    };
    assert!(widget.read("", &strict).is_err());
}

#[test]
fn checkbox_widget_accepts_form_spellings() {
    let widget = widget_for(FieldKind::Checkbox);
    for raw in ["true", "1", "on", "TRUE"] {
        assert_eq!(widget.read(raw, &constraints()), Ok(FieldValue::Bool(true)));
    }
    for raw in ["false", "0", "off", ""] {
        assert_eq!(widget.read(raw, &constraints()), Ok(FieldValue::Bool(false)));
    }
    assert!(widget.read("maybe", &constraints()).is_err());
    assert!(!widget.accepts(&FieldValue::text("true"), &constraints()));
}

#[test]
fn color_widget_accepts_hex_or_empty() {
    let widget = widget_for(FieldKind::Color);
    assert!(widget.read("#fff", &constraints()).is_ok());
    assert!(widget.read("#00AAff", &constraints()).is_ok());
    assert!(widget.read("", &constraints()).is_ok());
    assert_eq!(
        widget.read("blue", &constraints()),
        Err(FieldValueError::InvalidColor("blue".to_owned()))
    );
}

#[test]
fn text_patterns() {
    let text = widget_for(FieldKind::Text);
    let dimension = FieldConstraints {
        pattern: Some(TextPattern::Dimension),
        ..FieldConstraints::default()
    };
    for ok in ["400", "60%", "12.5%", ""] {
        assert!(text.read(ok, &dimension).is_ok(), "{ok}");
    }
    for bad in ["60 %", "px", "-5", "%"] {
        assert!(text.read(bad, &dimension).is_err(), "{bad}");
    }

    let textarea = widget_for(FieldKind::Textarea);
    let json = FieldConstraints {
        pattern: Some(TextPattern::JsonObject),
        ..FieldConstraints::default()
    };
    assert!(textarea.read(r#"{"a": 1}"#, &json).is_ok());
    assert!(textarea.read("  ", &json).is_ok());
    assert!(matches!(
        textarea.read("{", &json),
        Err(FieldValueError::InvalidJson(_))
    ));
}

#[test]
fn shared_constant_tables() {
    assert_eq!(*FONT_SIZE_RANGE.start(), 7);
    assert_eq!(*FONT_SIZE_RANGE.end(), 20);
    assert_eq!(font_size_options().len(), 14);
    assert!(FONT_FAMILIES.iter().any(|(value, _)| *value == "Arial"));
}
