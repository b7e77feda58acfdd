use serde::Deserialize;

use crate::error::SiteError;
use crate::theme::hex_to_rgb;

const TRANSPARENCY_JSON: &str = include_str!("../content/transparencia.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub title: String,
    pub value: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Share {
    pub label: String,
    pub percent: u8,
    pub color: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RevenueSource {
    pub label: String,
    pub amount: u64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Report {
    pub title: String,
    pub date: String,
    pub href: String,
}

/// Figures published on the transparency page.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Transparency {
    pub stats: Vec<Stat>,
    pub allocation: Vec<Share>,
    pub revenue: Vec<RevenueSource>,
    pub reports: Vec<Report>,
}

impl Transparency {
    pub fn parse(raw: &str) -> Result<Self, SiteError> {
        let data: Transparency = serde_json::from_str(raw)?;
        data.validate()?;
        Ok(data)
    }

    fn validate(&self) -> Result<(), SiteError> {
        if self.stats.is_empty() || self.allocation.is_empty() || self.revenue.is_empty() {
            return Err(SiteError::InvalidContent("empty dataset".to_string()));
        }
        let total: u32 = self.allocation.iter().map(|s| s.percent as u32).sum();
        if total != 100 {
            return Err(SiteError::InvalidContent(format!(
                "allocation shares sum to {}%",
                total
            )));
        }
        for share in &self.allocation {
            hex_to_rgb(&share.color)?;
        }
        Ok(())
    }
}

pub fn transparency() -> Result<Transparency, SiteError> {
    Transparency::parse(TRANSPARENCY_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_loads() {
        let data = transparency().expect("embedded transparency data");
        assert_eq!(data.stats.len(), 3);
        assert_eq!(data.allocation[0].percent, 85);
        assert_eq!(data.revenue[0].amount, 650_000);
        assert_eq!(data.reports.len(), 3);
    }

    #[test]
    fn rejects_shares_not_summing_to_hundred() {
        let raw = r##"{
            "stats": [{ "title": "t", "value": "v" }],
            "allocation": [{ "label": "a", "percent": 60, "color": "#000000" }],
            "revenue": [{ "label": "r", "amount": 1 }],
            "reports": []
        }"##;
        assert!(matches!(
            Transparency::parse(raw),
            Err(SiteError::InvalidContent(_))
        ));
    }

    #[test]
    fn rejects_bad_colors() {
        let raw = r##"{
            "stats": [{ "title": "t", "value": "v" }],
            "allocation": [{ "label": "a", "percent": 100, "color": "teal" }],
            "revenue": [{ "label": "r", "amount": 1 }],
            "reports": []
        }"##;
        assert!(matches!(
            Transparency::parse(raw),
            Err(SiteError::InvalidColor(_))
        ));
    }

    #[test]
    fn reports_malformed_json() {
        assert!(matches!(
            Transparency::parse("{"),
            Err(SiteError::Content(_))
        ));
    }
}
