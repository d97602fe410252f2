/// Generates `FromStr` and `TryFrom<String>` for `ValueEnum` types.
///
/// Matching goes through the clap possible values, so every alias declared in
/// `to_possible_value` is accepted both from env vars (serde `try_from`) and
/// from plain `str::parse`.
macro_rules! impl_value_enum_parsing {
    ($enum_type:ty, $error_reason:expr) => {
        impl std::str::FromStr for $enum_type {
            type Err = $crate::primitives::ConfigError;

            fn from_str(s: &str) -> Result<Self, $crate::primitives::ConfigError> {
                let candidate = s.trim();
                for variant in <Self as clap::ValueEnum>::value_variants() {
                    if let Some(possible_value) = clap::ValueEnum::to_possible_value(variant) {
                        if possible_value.matches(candidate, true) {
                            return Ok(*variant);
                        }
                    }
                }

                Err($crate::primitives::ConfigError::ParseError {
                    value: s.to_string(),
                    reason: $error_reason.to_string(),
                })
            }
        }

        impl TryFrom<String> for $enum_type {
            type Error = $crate::primitives::ConfigError;

            fn try_from(value: String) -> Result<Self, $crate::primitives::ConfigError> {
                value.parse()
            }
        }
    };
}

pub(crate) use impl_value_enum_parsing;
