//! Static payment destination shown on the payment screen.

use compact_str::CompactString;

/// Where the player transfers the money.
///
/// This is deliberately not part of a pending request: every request is paid
/// to the same destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    /// Card number as plain digits; this is the value copied to the clipboard.
    pub card_number: CompactString,
    /// Optional card holder name shown under the number.
    pub holder: Option<CompactString>,
    /// Optional bank name shown under the number.
    pub bank: Option<CompactString>,
    /// Symbol appended to amounts, e.g. `500 ₽`.
    pub currency_symbol: CompactString,
    /// How long manual review usually takes, shown after the instructions.
    pub review_window: CompactString,
    /// Hint printed next to the amount field on the request screen.
    pub amount_hint: Option<CompactString>,
}

impl Default for PaymentDetails {
    fn default() -> Self {
        Self {
            card_number: CompactString::const_new("1234567890123456"),
            holder: None,
            bank: None,
            currency_symbol: CompactString::const_new("₽"),
            review_window: CompactString::const_new("5 to 30 minutes"),
            amount_hint: Some(CompactString::const_new("Minimum amount: 100")),
        }
    }
}

impl PaymentDetails {
    /// Card number split into groups of four digits.
    pub fn display_card_number(&self) -> String {
        let digits: Vec<char> = self
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        digits
            .chunks(4)
            .map(|group| group.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The literal placed on the clipboard by the copy action.
    pub fn copy_value(&self) -> &str {
        &self.card_number
    }

    /// Render an amount with the configured currency symbol.
    pub fn format_amount(&self, amount: u64) -> String {
        format!("{amount} {}", self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card_number_display() {
        let details = PaymentDetails::default();
        assert_eq!(details.display_card_number(), "1234 5678 9012 3456");
        assert_eq!(details.copy_value(), "1234567890123456");
    }

    #[test]
    fn test_display_ignores_existing_spacing() {
        let details = PaymentDetails {
            card_number: "2200 7001 2345".into(),
            ..PaymentDetails::default()
        };
        assert_eq!(details.display_card_number(), "2200 7001 2345");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(PaymentDetails::default().format_amount(500), "500 ₽");
    }
}
