//! String-form serde for token enumerations.
//!
//! The configuration format carries enum values as attribute strings, so the
//! serde representation is the canonical token (via `Display`) and
//! deserialization goes through the case-insensitive `FromStr`.

macro_rules! token_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let token = <String as serde::Deserialize>::deserialize(deserializer)?;
                token.parse::<$ty>().map_err(|_| {
                    serde::de::Error::custom(format_args!(
                        concat!("unrecognized ", stringify!($ty), " token `{}`"),
                        token
                    ))
                })
            }
        }
    };
}

pub(crate) use token_serde;
