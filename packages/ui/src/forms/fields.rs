//! Field identifiers for form records.
//!
//! Each form names its inputs with an enum instead of string keys. The
//! [`record_fields!`] macro generates that enum for a record type together
//! with its input name (identical to the JSON key), a display label, and
//! typed accessors into the record.

macro_rules! record_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $record:ty : $value:ty {
            $($variant:ident => $member:ident, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every field, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Input name, identical to the JSON key.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($member),)+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn get(self, record: &$record) -> &$value {
                match self {
                    $($name::$variant => &record.$member,)+
                }
            }

            pub fn get_mut(self, record: &mut $record) -> &mut $value {
                match self {
                    $($name::$variant => &mut record.$member,)+
                }
            }
        }
    };
}

pub(crate) use record_fields;
