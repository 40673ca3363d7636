/// Define an enum whose variants map onto fixed integer codes, with a default variant.
macro_rules! code_enum {
    (
        $(#[$meta:meta])* $vis:vis $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:expr, )+
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Default for $name {
            fn default() -> Self { Self::$default }
        }

        impl $name {
            /// The integer code of this variant.
            pub const fn code(self) -> i32 {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            /// Look up the variant for an integer code.
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $( c if c == $code => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}
