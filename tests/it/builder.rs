use argschema::{Builder, Error, Kind, SchemaError};
use expect_test::expect;

use crate::render;

#[test]
fn all_types() {
    let res = Builder::new()
        .with_boolean('b')
        .with_integer('i')
        .with_string('s')
        .with_array('a')
        .build(["-b", "-i", "10", "-s", "Hello World!", "-a", "Hello", "World"]);
    expect![[r#"
        -b: Boolean(true)
        -i: Integer(10)
        -s: String("Hello World!")
        -a: StringArray(["Hello", "World"])
    "#]]
    .assert_eq(&render(res));
}

#[test]
fn schema_text() {
    let builder = Builder::new().with_boolean('b').with_integer('i').with('a', Kind::StringArray);
    assert_eq!(builder.schema().unwrap().to_string(), "b,i#,a[]");
    assert!(Builder::new().schema().unwrap().is_empty());
}

#[test]
fn duplicate() {
    let builder = Builder::new().with_boolean('l').with_string('x').with_integer('l');
    let err = builder.build(["-l"]).unwrap_err();
    assert_eq!(err.index(), Some(2));
    assert!(matches!(err, Error::Schema { cause: SchemaError::DuplicateIdentifier('l'), .. }));
}

#[test]
fn non_letter() {
    let err = Builder::new().with_boolean('1').schema().unwrap_err();
    expect![[r#"invalid schema element #0: argument must be a letter: `1`"#]]
        .assert_eq(&err.to_string());
}

#[test]
fn separator_identifiers() {
    let err = Builder::new().with_boolean('a').with_boolean(' ').schema().unwrap_err();
    assert_eq!(err.index(), Some(1));
    assert!(matches!(err, Error::Schema { cause: SchemaError::NonLetterIdentifier(' '), .. }));

    let err = Builder::new().with_string(',').with_integer('i').schema().unwrap_err();
    expect![[r#"invalid schema element #0: argument must be a letter: `,`"#]]
        .assert_eq(&err.to_string());
}
