//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::{format_default_for_type, type_to_string};

/// Generate template code (TokenStream) for fields
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let field_codes = fields.iter().map(|f| generate_field_template_code(f));
    quote! {
        #(#field_codes)*
    }
}

/// Generate TOML template code for a single field
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;

    // Inline docs use only the first doc line as a trailing comment
    let (doc_code, suffix) = match (&info.doc, info.inline_doc) {
        (Some(doc), true) => {
            let first = doc.lines().next().unwrap_or_default().trim();
            (quote! {}, format!("  # {first}\n"))
        }
        (Some(doc), false) => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            (quote! { out.push_str(#doc_str); }, "\n".to_string())
        }
        (None, _) => (quote! {}, "\n".to_string()),
    };

    let ty_str = type_to_string(&info.ty);

    // Optional fields are written commented out, with the example value if any
    if let Some(inner) = ty_str
        .strip_prefix("Option<")
        .and_then(|s| s.strip_suffix('>'))
    {
        let example = info
            .default
            .as_deref()
            .map(|v| format_default_for_type(v, inner))
            .unwrap_or_else(|| "\"\"".to_string());
        let line = format!("# {toml_name} = {example}{suffix}");
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    if let Some(ref default_val) = info.default {
        let formatted = format_default_for_type(default_val, &ty_str);
        let line = format!("{toml_name} = {formatted}{suffix}");
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Value from Default::default() at runtime
    quote! {
        #doc_code
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push_str(#suffix);
    }
}
