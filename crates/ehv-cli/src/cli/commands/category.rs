//! `ehv category <name-or-code>`.

use ehv_core::category::{category_code_from_name, Category};

/// Parse `12`, `0x8` or `0X8` as a code.
fn parse_code(query: &str) -> Option<u32> {
    let q = query.trim();
    match q.strip_prefix("0x").or_else(|| q.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => q.parse().ok(),
    }
}

pub fn run_category(query: &str) {
    let category = match parse_code(query) {
        Some(code) => Category::from_code(code),
        None => Category::from_code(category_code_from_name(query)),
    };
    println!(
        "code={:#x} name={} long={}",
        category.code(),
        category.name(),
        category.long_name().unwrap_or("-")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_code_accepts_decimal_and_hex() {
        assert_eq!(parse_code("8"), Some(8));
        assert_eq!(parse_code("0x200"), Some(0x200));
        assert_eq!(parse_code("manga"), None);
    }
}
