/// Implements [`Describe`](crate::describe::Describe) and
/// [`ToFieldValue`](crate::describe::ToFieldValue) for a filter record.
///
/// Each line names a struct field and its annotations. `lookup`,
/// `operator` and `relation` are all optional but must appear in that
/// order, each terminated by a comma. A field whose type implements
/// `Describe` nests: its own fields are scanned under the parent's
/// lookup name.
///
/// ```
/// use filter_engine::describe_record;
///
/// struct UserFilter {
///     age: i64,
///     name: String,
/// }
///
/// describe_record!(UserFilter {
///     age => { operator: "gte", },
///     name => { lookup: "full_name", operator: "regex", },
/// });
/// ```
#[macro_export]
macro_rules! describe_record {
    ($ty:ty { $( $field:ident => {
        $(lookup: $lookup:literal,)?
        $(operator: $op:literal,)?
        $(relation: $rel:literal,)?
    } ),* $(,)? }) => {
        impl $crate::describe::Describe for $ty {
            fn describe(&self) -> ::std::vec::Vec<$crate::describe::Field> {
                ::std::vec![
                    $(
                        $crate::describe::Field {
                            meta: {
                                let mut meta =
                                    $crate::describe::FieldMeta::new(stringify!($field));
                                $( meta.lookup = ::std::option::Option::Some($lookup); )?
                                $( meta.operator = ::std::option::Option::Some($op); )?
                                $( meta.relation = ::std::option::Option::Some($rel); )?
                                meta
                            },
                            value: $crate::describe::ToFieldValue::to_field_value(&self.$field),
                        }
                    ),*
                ]
            }
        }

        impl $crate::describe::ToFieldValue for $ty {
            fn to_field_value(&self) -> $crate::describe::FieldValue {
                $crate::describe::FieldValue::Record(
                    $crate::describe::Describe::describe(self),
                )
            }
        }
    };
}
