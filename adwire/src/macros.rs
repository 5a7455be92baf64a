// Declares a closed protobuf enumeration together with the `as_str_name` /
// `from_str_name` pair that `prost-build` emits for generated enums.
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:tt => $proto:tt,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $proto,)+
                }
            }

            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    $($proto => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

// Implements `prost::Name` with googleapis-style type URLs.
macro_rules! impl_name {
    ($package:literal => { $($ty:ty = $name:literal),+ $(,)? }) => {
        $(
            impl ::prost::Name for $ty {
                const NAME: &'static str = $name;
                const PACKAGE: &'static str = $package;

                fn full_name() -> ::std::string::String {
                    concat!($package, ".", $name).into()
                }

                fn type_url() -> ::std::string::String {
                    concat!("type.googleapis.com/", $package, ".", $name).into()
                }
            }
        )+
    };
}
