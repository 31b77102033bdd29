/// Builds a clap value parser accepting exactly the `strum` variant names
/// of the given enum.
#[macro_export]
macro_rules! clap_enum_variants {
    ($e: ty) => {{
        use clap::builder::TypedValueParser;
        use strum::VariantNames;
        clap::builder::PossibleValuesParser::new(<$e>::VARIANTS)
            .map(|s| s.parse::<$e>().unwrap())
    }};
}
