//! HTML pages rendered with askama.
//!
//! Every interpolated field goes through askama's HTML escaper, including
//! attribute values such as flag URLs and the admin edit payload.

use askama::Template;
use serde::Serialize;

use forex_types::{AppError, Rate, RateId, StoredRate};

/// Public read-only rate table.
#[derive(Template)]
#[template(path = "rates.html")]
pub struct RatesPage<'a> {
    pub rates: &'a [StoredRate],
    /// Date stamp shown above the table, formatted at render time.
    pub date: String,
}

impl<'a> RatesPage<'a> {
    pub fn new(rates: &'a [StoredRate]) -> Self {
        Self {
            rates,
            date: chrono::Local::now().format("%d/%m/%Y").to_string(),
        }
    }
}

/// One row of the admin table.
pub struct AdminRow<'a> {
    pub id: &'a RateId,
    pub rate: &'a Rate,
    /// Record as JSON, read back by the edit button to fill the form.
    pub edit_json: String,
}

#[derive(Serialize)]
struct EditPayload<'a> {
    id: &'a RateId,
    #[serde(flatten)]
    rate: &'a Rate,
}

/// Admin page: add/edit form plus a table with edit and delete per record.
#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminPage<'a> {
    pub rows: Vec<AdminRow<'a>>,
}

impl<'a> AdminPage<'a> {
    pub fn new(rates: &'a [StoredRate]) -> Result<Self, AppError> {
        let rows = rates
            .iter()
            .map(|stored| -> Result<AdminRow<'a>, AppError> {
                let edit_json = serde_json::to_string(&EditPayload {
                    id: &stored.id,
                    rate: &stored.rate,
                })
                .map_err(|e| AppError::Internal(e.to_string()))?;
                Ok(AdminRow {
                    id: &stored.id,
                    rate: &stored.rate,
                    edit_json,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }
}

/// Renders a page, mapping template failures to an internal error.
pub fn render(page: &impl Template) -> Result<String, AppError> {
    page.render()
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(rate: Rate) -> StoredRate {
        StoredRate::new(RateId::new(rate.code.clone()), rate)
    }

    #[test]
    fn test_rates_page_lists_every_rate() {
        let rates: Vec<_> = forex_types::default_rates().into_iter().map(stored).collect();

        let html = render(&RatesPage::new(&rates)).unwrap();

        for code in ["USD", "EURO", "GBP"] {
            assert!(html.contains(&format!("<td>{}</td>", code)));
        }
        assert!(html.contains(r#"<td class="buy">83.94</td>"#));
        assert!(html.contains(r#"<td class="sell">105.5</td>"#));
        assert!(html.contains("€"));
    }

    #[test]
    fn test_stored_fields_are_escaped() {
        let rates = vec![stored(Rate::new(
            "EVIL",
            "<script>alert(1)</script>",
            "$",
            r#"x" onerror="alert(2)"#,
            "1",
            "1",
        ))];

        let public = render(&RatesPage::new(&rates)).unwrap();
        let admin = render(&AdminPage::new(&rates).unwrap()).unwrap();

        for html in [&public, &admin] {
            assert!(!html.contains("<script>alert(1)</script>"));
            assert!(html.contains("&lt;script&gt;alert(1)"));
        }
        assert!(!public.contains(r#"onerror="alert(2)""#));
    }

    #[test]
    fn test_admin_rows_carry_edit_payload() {
        let rates = vec![stored(Rate::new(
            "JPY",
            "YEN",
            "¥",
            "https://flags/jp.svg",
            "0.55",
            "0.50",
        ))];

        let page = AdminPage::new(&rates).unwrap();

        let payload: serde_json::Value = serde_json::from_str(&page.rows[0].edit_json).unwrap();
        assert_eq!(payload["id"], "JPY");
        assert_eq!(payload["buy"], "0.55");
        assert_eq!(payload["sell"], "0.50");

        let html = render(&page).unwrap();
        assert!(html.contains(r#"data-id="JPY""#));
        assert!(html.contains("<td>0.55</td>"));
    }
}
