/// Declares a struct and implements [`Record`](crate::Record) for it.
///
/// Each field names its column after `=>`. A field tagged `=> _` is ignored by
/// the binder; a field with no tag makes every scan into the record fail with
/// `InvalidDestination`. The struct always derives `Default`.
///
/// ```
/// rowscan::record! {
///     #[derive(Debug, PartialEq)]
///     pub struct Reaction {
///         pub likes: i32 => "likes",
///         pub day: String => "day",
///         pub seen: bool => _,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (@field $d:ident, $field:ident, $ty:ty, _) => {
        $d.add_field(stringify!($field), $crate::ColumnTag::Ignore, None);
    };
    (@field $d:ident, $field:ident, $ty:ty, $column:literal) => {
        $d.add_field(
            stringify!($field),
            $crate::ColumnTag::Column($column),
            Some(
                (|record: &mut Self,
                  value: &$crate::Value|
                 -> ::core::result::Result<(), $crate::ConversionError> {
                    record.$field = <$ty as $crate::FromValue>::from_value(value)?;
                    Ok(())
                }) as $crate::Setter<Self>,
            ),
        );
    };
    (@field $d:ident, $field:ident, $ty:ty) => {
        $d.add_field(stringify!($field), $crate::ColumnTag::Untagged, None);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(=> $tag:tt)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Default)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn descriptor() -> $crate::RecordDescriptor<Self> {
                #[allow(unused_mut)]
                let mut descriptor = $crate::RecordDescriptor::new(stringify!($name));
                $(
                    $crate::record!(@field descriptor, $field, $ty $(, $tag)?);
                )*
                descriptor
            }
        }
    };
}
