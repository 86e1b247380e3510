/// Implements `FieldRecord` and a field-per-line `Display` for a record
/// generic over its representation. Fields are listed in declaration order.
macro_rules! field_record {
    ($name:ident { $($field:ident),+ $(,)? }) => {
        impl<T: ::plonk_arith::Representation> ::plonk_arith::FieldRecord<T> for $name<T> {
            const NUM_FIELDS: usize = [$(stringify!($field)),+].len();
            type Rebind<U: ::plonk_arith::Representation> = $name<U>;

            fn fields(&self) -> Vec<&T::Fr> {
                vec![$(&self.$field),+]
            }

            fn map_fields<U, F>(&self, mut f: F) -> $name<U>
            where
                U: ::plonk_arith::Representation,
                F: FnMut(&T::Fr) -> U::Fr,
            {
                $(let $field = f(&self.$field);)+
                $name { $($field),+ }
            }

            fn from_fields<I>(fields: I) -> Option<Self>
            where
                I: IntoIterator<Item = T::Fr>,
            {
                let mut it = fields.into_iter();
                $(let $field = it.next()?;)+
                if it.next().is_some() {
                    return None;
                }
                Some($name { $($field),+ })
            }
        }

        impl<T: ::plonk_arith::Representation> ::std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $(
                    writeln!(
                        f,
                        "{}: {}",
                        stringify!($field),
                        ::plonk_field::scalar_to_hex(&T::value(&self.$field))
                    )?;
                )+
                Ok(())
            }
        }
    };
}
