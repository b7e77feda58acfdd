/// Formats whole reais with Brazilian thousands separators: `R$ 10.000`.
pub fn brl(amount: u64) -> String {
    format!("R$ {}", group_thousands(amount))
}

/// Short form used on chart axes: `R$ 650 mil`, `R$ 1 mi`, `R$ 1,5 mi`.
/// The unit is picked after rounding, so `999_999` reads `R$ 1 mi`.
pub fn brl_compact(amount: u64) -> String {
    if amount < 1_000 {
        return brl(amount);
    }
    let thousands = (amount + 500) / 1_000;
    if thousands < 1_000 {
        return format!("R$ {} mil", thousands);
    }
    let tenths = (amount + 50_000) / 100_000;
    if tenths % 10 == 0 {
        format!("R$ {} mi", tenths / 10)
    } else {
        format!("R$ {},{} mi", tenths / 10, tenths % 10)
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(650_000), "650.000");
        assert_eq!(group_thousands(1_234_567), "1.234.567");
    }

    #[test]
    fn formats_reais() {
        assert_eq!(brl(50), "R$ 50");
        assert_eq!(brl(10_000), "R$ 10.000");
    }

    #[test]
    fn compacts_large_amounts() {
        assert_eq!(brl_compact(650_000), "R$ 650 mil");
        assert_eq!(brl_compact(100_000), "R$ 100 mil");
        assert_eq!(brl_compact(1_000_000), "R$ 1 mi");
        assert_eq!(brl_compact(1_500_000), "R$ 1,5 mi");
        assert_eq!(brl_compact(800), "R$ 800");
    }

    #[test]
    fn rounding_up_to_a_million_switches_unit() {
        assert_eq!(brl_compact(999_999), "R$ 1 mi");
        assert_eq!(brl_compact(999_500), "R$ 1 mi");
        assert_eq!(brl_compact(999_499), "R$ 999 mil");
        assert_eq!(brl_compact(999), "R$ 999");
    }
}
