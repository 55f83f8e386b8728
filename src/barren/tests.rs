use crate::{
    barren::{FieldDimensions, ProcessError, process},
    input::InputError,
};

#[test]
fn horizontal_band() {
    let input = r#"{"0 292 399 307"}"#;
    let output = process(input, FieldDimensions::default()).unwrap();
    assert_eq!(output, "116800 116800");
}

#[test]
fn enclosed_region() {
    let input = r#"{"48 192 351 207","48 392 351 407","120 52 135 547","260 52 275 547"}"#;
    let output = process(input, FieldDimensions::default()).unwrap();
    assert_eq!(output, "22816 192608");
}

#[test]
fn trailing_newline() {
    let input = "{\"0 292 399 307\"}\n";
    let output = process(input, FieldDimensions::default()).unwrap();
    assert_eq!(output, "116800 116800");
}

#[test]
fn nothing_removed() {
    let input = r#"{"500 500 600 600"}"#;
    let output = process(input, FieldDimensions::default()).unwrap();
    assert_eq!(output, "240000");
}

#[test]
fn everything_removed() {
    let input = r#"{"0 0 399 599"}"#;
    let output = process(input, FieldDimensions::default()).unwrap();
    assert_eq!(output, "");
}

#[test]
fn custom_dimensions() {
    let dims = FieldDimensions {
        width: 10,
        height: 10,
    };
    let output = process(r#"{"0 4 9 4"}"#, dims).unwrap();
    assert_eq!(output, "40 50");
}

#[test]
fn empty_field() {
    let dims = FieldDimensions {
        width: 0,
        height: 10,
    };
    let res = process(r#"{"0 4 9 4"}"#, dims);
    assert!(matches!(res, Err(ProcessError::EmptyField(0, 10))));
}

#[test]
fn malformed_input() {
    let input = r#"{"48 192 351 207","48 392 351 407 512"}"#;
    let res = process(input, FieldDimensions::default());
    assert!(matches!(
        res,
        Err(ProcessError::Input(InputError::MalformedRectangle(_)))
    ));
}
