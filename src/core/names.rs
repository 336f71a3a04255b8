//! Display names and human-friendly ordering for funds and categories.

use crate::core::collation;

/// Resolves a fund's display name, falling back to "Fondo <id>" when no
/// explicit name is set.
pub fn display_name(id: &str, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Fondo {id}"),
    }
}

/// Human label for a category code; unknown codes pass through unchanged.
pub fn category_display_name(code: &str) -> &str {
    match code {
        "GLOBAL" => "Global",
        "TECH" => "Tecnología",
        "HEALTH" => "Salud",
        "MONEY_MARKET" => "Mercado Monetario",
        other => other,
    }
}

/// Returns a copy of `items` ordered by display name with Spanish,
/// numeric-aware collation. The input is left untouched.
pub fn sort_by_name<T, F>(items: &[T], name_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| collation::compare_es_numeric(&name_of(a), &name_of(b)));
    sorted
}
