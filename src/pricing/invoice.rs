//! Invoice line items derived from a price breakdown.

use super::currency::format_currency;
use crate::model::PriceBreakdown;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write;

/// Kind of line on an itemized invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Charge,
    Deduction,
    Summary,
}

/// One display line of an itemized price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
    pub kind: LineKind,
}

impl LineItem {
    fn new(label: impl Into<String>, amount: Decimal, kind: LineKind) -> Self {
        Self {
            label: label.into(),
            amount,
            kind,
        }
    }
}

/// Display lines in invoice order. Absent optional amounts produce no line.
pub fn itemize(breakdown: &PriceBreakdown) -> Vec<LineItem> {
    let mut lines = vec![LineItem::new(
        "Service fee",
        breakdown.base_service_fee,
        LineKind::Charge,
    )];

    lines.push(LineItem::new(
        format!(
            "Chairs ({} x {})",
            breakdown.chair_count,
            format_currency(breakdown.price_per_chair)
        ),
        breakdown.chairs_total(),
        LineKind::Charge,
    ));

    for add_on in &breakdown.additional_services {
        let label = if add_on.quantity > 1 {
            format!("{} x {}", add_on.name, add_on.quantity)
        } else {
            add_on.name.clone()
        };
        lines.push(LineItem::new(label, add_on.line_total(), LineKind::Charge));
    }

    if let Some(parts) = breakdown.parts_and_materials {
        lines.push(LineItem::new("Parts & materials", parts, LineKind::Charge));
    }
    if let Some(travel) = breakdown.travel_fee {
        lines.push(LineItem::new("Travel", travel, LineKind::Charge));
    }
    if let Some(urgency) = breakdown.urgency_fee {
        lines.push(LineItem::new("Urgent service", urgency, LineKind::Charge));
    }
    if let Some(discount) = breakdown.discount {
        lines.push(LineItem::new("Discount", -discount, LineKind::Deduction));
    }

    lines.push(LineItem::new("Subtotal", breakdown.subtotal, LineKind::Summary));
    lines.push(LineItem::new("VAT", breakdown.tax, LineKind::Summary));
    lines.push(LineItem::new("Total", breakdown.total, LineKind::Summary));

    lines
}

/// Plain-text itemized invoice block, one right-aligned amount per line.
pub fn render_itemized(breakdown: &PriceBreakdown) -> String {
    let lines = itemize(breakdown);
    let amounts: Vec<String> = lines.iter().map(|l| format_currency(l.amount)).collect();

    let label_width = lines.iter().map(|l| l.label.chars().count()).max().unwrap_or(0);
    let amount_width = amounts.iter().map(|a| a.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    let mut rule_written = false;
    for (line, amount) in lines.iter().zip(&amounts) {
        if line.kind == LineKind::Summary && !rule_written {
            let _ = writeln!(out, "{}", "-".repeat(label_width + amount_width + 2));
            rule_written = true;
        }
        let _ = writeln!(
            out,
            "{:<lw$}  {:>aw$}",
            line.label,
            amount,
            lw = label_width,
            aw = amount_width
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PricingRequest, ServiceType, TravelTier, Urgency};
    use crate::pricing::calculate_job_pricing;

    fn labels(lines: &[LineItem]) -> Vec<&str> {
        lines.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn test_itemize_defaults_has_no_optional_lines() {
        let breakdown =
            calculate_job_pricing(&PricingRequest::new(ServiceType::Cleaning, 3)).unwrap();
        let lines = itemize(&breakdown);
        assert_eq!(
            labels(&lines),
            vec!["Service fee", "Chairs (3 x R\u{a0}25,00)", "Subtotal", "VAT", "Total"]
        );
        assert_eq!(lines[1].amount, Decimal::new(75, 0));
    }

    #[test]
    fn test_itemize_full_request_order() {
        let request = PricingRequest::new(ServiceType::Repair, 2)
            .with_add_on("castor_replacement")
            .with_add_on("pickup_delivery")
            .with_parts_cost(Decimal::new(40, 0))
            .with_travel_tier(TravelTier::Extended)
            .with_urgency(Urgency::Urgent)
            .with_discount(Decimal::new(25, 0));
        let lines = itemize(&calculate_job_pricing(&request).unwrap());
        assert_eq!(
            labels(&lines)[2..],
            [
                "Castor Replacement Set (per chair) x 2",
                "Pickup & Delivery",
                "Parts & materials",
                "Travel",
                "Urgent service",
                "Discount",
                "Subtotal",
                "VAT",
                "Total",
            ]
        );

        let discount = lines.iter().find(|l| l.label == "Discount").unwrap();
        assert_eq!(discount.amount, Decimal::new(-25, 0));
        assert_eq!(discount.kind, LineKind::Deduction);
    }

    #[test]
    fn test_itemized_charges_sum_to_subtotal() {
        let request = PricingRequest::new(ServiceType::Maintenance, 5)
            .with_add_on("odour_treatment")
            .with_travel_tier(TravelTier::Regional)
            .with_discount(Decimal::new(15, 0));
        let breakdown = calculate_job_pricing(&request).unwrap();
        let sum: Decimal = itemize(&breakdown)
            .iter()
            .filter(|l| l.kind != LineKind::Summary)
            .map(|l| l.amount)
            .sum();
        assert_eq!(sum, breakdown.subtotal);
    }

    #[test]
    fn test_render_itemized() {
        let request = PricingRequest::new(ServiceType::Cleaning, 3)
            .with_travel_tier(TravelTier::Remote)
            .with_urgency(Urgency::Urgent);
        let text = render_itemized(&calculate_job_pricing(&request).unwrap()).replace('\u{a0}', " ");
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 8);
        assert!(rows[0].starts_with("Service fee"));
        assert!(rows[0].ends_with("R 50,00"));
        assert!(rows[4].chars().all(|c| c == '-'));
        assert!(rows[7].starts_with("Total"));
        assert!(rows[7].ends_with("R 373,75"));

        let widths: Vec<usize> = rows
            .iter()
            .filter(|r| !r.starts_with('-'))
            .map(|r| r.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
