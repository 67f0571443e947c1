//! String transformation utilities for code generation

/// Upper-case the first character of `s`, leaving the rest untouched
pub fn first_letter_upper(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
