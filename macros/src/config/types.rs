//! Type helper functions for Config derive macro.

use quote::quote;
use syn::Type;

/// Convert syn::Type to string representation
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Infer section name from struct name
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);
    to_snake_case(name)
}

/// Convert PascalCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Format a template value based on field type.
/// Strings and paths get quoted, everything else is written as-is.
pub fn format_default_for_type(value: &str, ty: &str) -> String {
    match ty {
        "String" | "PathBuf" => format!("\"{value}\""),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_section() {
        assert_eq!(infer_section("MenuConfig"), "menu");
        assert_eq!(infer_section("StaticFilesConfig"), "static_files");
        assert_eq!(infer_section("SiteSectionConfig"), "site");
        assert_eq!(infer_section("Widgets"), "widgets");
    }

    #[test]
    fn test_format_default_for_type() {
        assert_eq!(format_default_for_type("en", "String"), "\"en\"");
        assert_eq!(format_default_for_type("content", "PathBuf"), "\"content\"");
        assert_eq!(format_default_for_type("10", "u32"), "10");
        assert_eq!(format_default_for_type("true", "bool"), "true");
    }
}
