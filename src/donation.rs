use crate::format;

pub const PRESET_AMOUNTS: [u32; 3] = [50, 100, 200];
pub const DEFAULT_AMOUNT: u32 = 100;
/// Caps the custom field at R$ 9.999.999.
pub const MAX_CUSTOM_DIGITS: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Frequency {
    Unique,
    #[default]
    Monthly,
}

impl Frequency {
    pub fn label(self) -> &'static str {
        match self {
            Frequency::Unique => "Doação Única",
            Frequency::Monthly => "Doação Mensal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Pix,
    Card,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Card => "Cartão",
        }
    }
}

/// Selection state of the donation form. `amount == 0` means the custom
/// field is the active choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DonationForm {
    amount: u32,
    custom: String,
    pub frequency: Frequency,
    pub payment_method: PaymentMethod,
}

impl Default for DonationForm {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            custom: String::new(),
            frequency: Frequency::default(),
            payment_method: PaymentMethod::default(),
        }
    }
}

impl DonationForm {
    pub fn select_preset(&mut self, value: u32) {
        self.amount = value;
        self.custom.clear();
    }

    pub fn set_custom(&mut self, raw: &str) {
        self.custom = digits_only(raw);
        self.amount = 0;
    }

    pub fn custom(&self) -> &str {
        &self.custom
    }

    pub fn is_selected(&self, preset: u32) -> bool {
        self.amount == preset
    }

    pub fn custom_selected(&self) -> bool {
        self.amount == 0
    }

    /// The amount the donor would give, if any. An empty or zero custom field yields `None`.
    pub fn effective_amount(&self) -> Option<u32> {
        if self.amount > 0 {
            return Some(self.amount);
        }
        self.custom.parse::<u32>().ok().filter(|v| *v > 0)
    }

    pub fn summary(&self) -> Option<String> {
        let amount = format::brl(self.effective_amount()? as u64);
        Some(match self.frequency {
            Frequency::Monthly => format!("Você está doando {} por mês", amount),
            Frequency::Unique => format!("Você está doando {} uma única vez", amount),
        })
    }
}

/// Keeps only ASCII digits, dropping leading zeros and anything past the cap.
pub fn digits_only(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .skip_while(|c| *c == '0')
        .take(MAX_CUSTOM_DIGITS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_monthly_hundred_by_pix() {
        let form = DonationForm::default();
        assert!(form.is_selected(100));
        assert!(!form.custom_selected());
        assert_eq!(form.frequency, Frequency::Monthly);
        assert_eq!(form.payment_method, PaymentMethod::Pix);
        assert_eq!(form.effective_amount(), Some(100));
    }

    #[test]
    fn selecting_preset_marks_only_that_button() {
        let mut form = DonationForm::default();
        form.select_preset(50);
        assert!(form.is_selected(50));
        assert!(PRESET_AMOUNTS.iter().filter(|p| form.is_selected(**p)).count() == 1);
    }

    #[test]
    fn typing_custom_amount_deselects_presets() {
        let mut form = DonationForm::default();
        form.set_custom("R$ 1.500,00");
        assert_eq!(form.custom(), "150000");
        assert!(form.custom_selected());
        assert!(PRESET_AMOUNTS.iter().all(|p| !form.is_selected(*p)));
        assert_eq!(form.effective_amount(), Some(150_000));
    }

    #[test]
    fn choosing_preset_clears_custom_text() {
        let mut form = DonationForm::default();
        form.set_custom("75");
        form.select_preset(200);
        assert_eq!(form.custom(), "");
        assert_eq!(form.effective_amount(), Some(200));
    }

    #[test]
    fn empty_custom_amount_has_no_effective_value() {
        let mut form = DonationForm::default();
        form.set_custom("abc");
        assert!(form.custom_selected());
        assert_eq!(form.effective_amount(), None);
        assert_eq!(form.summary(), None);
    }

    #[test]
    fn digits_only_strips_leading_zeros_and_caps_length() {
        assert_eq!(digits_only("007"), "7");
        assert_eq!(digits_only("0"), "");
        assert_eq!(digits_only("123456789012"), "1234567");
    }

    #[test]
    fn summary_follows_frequency() {
        let mut form = DonationForm::default();
        assert_eq!(form.summary().as_deref(), Some("Você está doando R$ 100 por mês"));
        form.frequency = Frequency::Unique;
        form.set_custom("2500");
        assert_eq!(
            form.summary().as_deref(),
            Some("Você está doando R$ 2.500 uma única vez")
        );
    }
}
