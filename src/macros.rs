#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! by_attr {
    ($key:ident = $value:literal) => {
        $crate::AttrRule { attr: $crate::AttrKey::$key, value: $value }
    };
}

#[macro_export]
macro_rules! field_rules {
    (
        field: $field:expr
        $(, attrs: $attrs:expr)?
        , patterns: [ $($pat:literal),* $(,)? ]
        $(,)?
    ) => {{
        let mut rules: Vec<$crate::MatchRule> = Vec::new();
        $(
            let attrs: &'static [$crate::AttrRule] = $attrs;
            rules.extend(attrs.iter().copied().map($crate::MatchRule::Attr));
        )?
        $( rules.push($crate::MatchRule::Text($crate::regex!($pat))); )*
        $crate::FieldRules { field: $field, rules }
    }};
}
