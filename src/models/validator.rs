use std::sync::LazyLock;

use regex::Regex;

use super::ProductStatus;

// decimal(12, 2)
static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,10}(\.[0-9]{1,2})?$").expect("price pattern must compile")
});

/// Up to 10 integer digits, optionally followed by a point and 1 or 2 digits.
/// Only ASCII digits count; `regex`'s `\d` would also match other scripts.
pub fn is_valid_price(price: &str) -> bool {
    PRICE_PATTERN.is_match(price)
}

/// Statuses a client may request directly. `inactive` is only written by a delete.
pub fn is_valid_status(status: &str) -> bool {
    status == ProductStatus::Available.as_str() || status == ProductStatus::OutOfStock.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_prices() {
        for price in ["0", "1", "12.5", "12.50", "9999999999", "9999999999.99", "0.01"] {
            assert!(is_valid_price(price), "expected {price:?} to be valid");
        }
    }

    #[test]
    fn rejects_malformed_prices() {
        let cases = [
            "",
            "-1",
            "+1",
            "1e3",
            "12.",
            ".50",
            "12.505",
            "12345678901",
            "12,50",
            " 12.50",
            "12.50 ",
            "abc",
            "1.2.3",
            "\u{ff11}\u{ff12}.\u{ff15}\u{ff10}",
            "\u{0661}\u{0662}",
            "\u{0967}\u{0968}.50",
        ];
        for price in cases {
            assert!(!is_valid_price(price), "expected {price:?} to be invalid");
        }
    }

    #[test]
    fn only_client_settable_statuses_are_valid() {
        assert!(is_valid_status("available"));
        assert!(is_valid_status("out_of_stock"));

        for status in ["inactive", "", "Available", "OUT_OF_STOCK", "out-of-stock", "deleted"] {
            assert!(!is_valid_status(status), "expected {status:?} to be invalid");
        }
    }
}
