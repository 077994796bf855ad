//! Resource key naming for resx bundles

/// Convert `kebab-case` or `snake_case` to `PascalCase`.
///
/// Each part keeps its first character upper-cased and the rest lower-cased,
/// so `arrow-down` becomes `ArrowDown` and `AT_sign` becomes `AtSign`.
pub fn to_pascal_case(input: &str) -> String {
    input
        .split(['-', '_'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Resource key used for an icon inside a resx bundle
pub fn resource_key(icon_name: &str) -> String {
    to_pascal_case(icon_name)
}
