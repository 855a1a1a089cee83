//! Scan matrix: every supported scalar width, plain and optional, plus
//! sequences, fixed arrays and nested records.

use crate::describe_record;
use crate::scanner::Scanner;
use filter_model::core::{type_kind::TypeKind, value::Value};

macro_rules! scan_case {
    ($plain:ident, $optional:ident, $ty:ty, $kind:expr, $value:expr) => {
        #[test]
        fn $plain() {
            struct Probe {
                field: $ty,
            }
            describe_record!(Probe {
                field => { operator: "eq", },
            });

            let value: $ty = $value;
            let expected = Value::from(value.clone());
            let fields = Scanner::default()
                .scan_record(&Probe { field: value }, "")
                .unwrap();

            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].name(), "field");
            assert_eq!(fields[0].kind(), $kind);
            assert_eq!(fields[0].value(), &expected);
        }

        #[test]
        fn $optional() {
            struct Probe {
                field: Option<$ty>,
            }
            describe_record!(Probe {
                field => { operator: "eq", },
            });

            let value: $ty = $value;
            let fields = Scanner::default()
                .scan_record(&Probe { field: Some(value) }, "")
                .unwrap();
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].kind(), $kind);

            let fields = Scanner::default()
                .scan_record(&Probe { field: None }, "")
                .unwrap();
            assert!(fields.is_empty());
        }
    };
}

scan_case!(test_scan_i8, test_scan_optional_i8, i8, TypeKind::Int8, 73);
scan_case!(test_scan_i16, test_scan_optional_i16, i16, TypeKind::Int16, 73);
scan_case!(test_scan_i32, test_scan_optional_i32, i32, TypeKind::Int32, 73);
scan_case!(test_scan_i64, test_scan_optional_i64, i64, TypeKind::Int64, 73);
scan_case!(test_scan_u8, test_scan_optional_u8, u8, TypeKind::UInt8, 73);
scan_case!(test_scan_u16, test_scan_optional_u16, u16, TypeKind::UInt16, 73);
scan_case!(test_scan_u32, test_scan_optional_u32, u32, TypeKind::UInt32, 73);
scan_case!(test_scan_u64, test_scan_optional_u64, u64, TypeKind::UInt64, 73);
scan_case!(
    test_scan_f32,
    test_scan_optional_f32,
    f32,
    TypeKind::Float32,
    73.5
);
scan_case!(
    test_scan_f64,
    test_scan_optional_f64,
    f64,
    TypeKind::Float64,
    73.73
);
scan_case!(
    test_scan_bool,
    test_scan_optional_bool,
    bool,
    TypeKind::Bool,
    true
);
scan_case!(
    test_scan_string,
    test_scan_optional_string,
    String,
    TypeKind::String,
    "test".to_string()
);
scan_case!(
    test_scan_sequence,
    test_scan_optional_sequence,
    Vec<String>,
    TypeKind::Sequence,
    vec!["test".to_string()]
);

#[test]
fn test_scan_fixed_array() {
    struct Probe {
        field: [i64; 2],
    }
    describe_record!(Probe {
        field => { operator: "eq", },
    });

    let fields = Scanner::default()
        .scan_record(&Probe { field: [1, 2] }, "")
        .unwrap();
    assert_eq!(fields[0].kind(), TypeKind::Array);
    assert_eq!(
        fields[0].value(),
        &Value::Array(vec![Value::Int(1), Value::Int(2)])
    );
}

#[test]
fn test_scan_nested_record_plain_and_optional() {
    struct Inner {
        age: i64,
    }
    describe_record!(Inner {
        age => { lookup: "age", operator: "eq", },
    });

    struct Outer {
        user: Inner,
    }
    describe_record!(Outer {
        user => { operator: "eq", },
    });

    struct OuterOptional {
        user: Option<Inner>,
    }
    describe_record!(OuterOptional {
        user => { operator: "eq", },
    });

    let scanner = Scanner::default();

    let fields = scanner
        .scan_record(
            &Outer {
                user: Inner { age: 73 },
            },
            "",
        )
        .unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name(), "user.age");

    let fields = scanner
        .scan_record(
            &OuterOptional {
                user: Some(Inner { age: 73 }),
            },
            "",
        )
        .unwrap();
    assert_eq!(fields[0].name(), "user.age");

    let fields = scanner
        .scan_record(&OuterOptional { user: None }, "")
        .unwrap();
    assert!(fields.is_empty());
}
