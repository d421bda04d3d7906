//! Integration tests for job pricing and chair QR payloads.
//!
//! These exercise the public API the way the job, invoice and chair-scan
//! flows use it: build a request, price it, persist the snapshot as JSON,
//! render it; print a payload, scan it back.

use chaircare_rs::{
    calculate_job_pricing, format_currency, get_estimated_price, itemize, load_tables, qr,
    ChairCareError, ErrorCode, PayloadFormat, PriceBreakdown, PricingCalculator, PricingRequest,
    PricingTables, ServiceType, TravelTier, Urgency,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use std::io::Write;

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

// ==================== Pricing ====================

#[test]
fn test_estimate_matches_full_calculation_at_defaults() {
    for service_type in ServiceType::ALL {
        for chair_count in 1..=12 {
            let full = calculate_job_pricing(&PricingRequest::new(service_type, chair_count))
                .expect("valid request");
            let estimate = get_estimated_price(service_type, chair_count).expect("valid estimate");
            assert_eq!(full.total, estimate, "{} x {}", service_type, chair_count);
            assert_eq!(full.tax, full.subtotal * dec("0.15"));
        }
    }
}

#[test]
fn test_remote_urgent_cleaning_of_three_chairs() {
    let request = PricingRequest {
        service_type: ServiceType::Cleaning,
        chair_count: 3,
        additional_service_keys: vec![],
        travel_tier: TravelTier::Remote,
        urgency: Urgency::Urgent,
        discount: Decimal::ZERO,
        parts_and_materials_cost: Decimal::ZERO,
    };
    let breakdown = calculate_job_pricing(&request).unwrap();
    assert_eq!(breakdown.subtotal, dec("325"));
    assert_eq!(breakdown.tax, dec("48.75"));
    assert_eq!(breakdown.total, dec("373.75"));
}

#[test]
fn test_optional_fields_present_only_when_positive() {
    let bare = calculate_job_pricing(&PricingRequest::new(ServiceType::Repair, 1)).unwrap();
    assert_eq!(bare.travel_fee, None);
    assert_eq!(bare.urgency_fee, None);
    assert_eq!(bare.discount, None);
    assert_eq!(bare.parts_and_materials, None);

    let full = calculate_job_pricing(
        &PricingRequest::new(ServiceType::Repair, 1)
            .with_travel_tier(TravelTier::Extended)
            .with_urgency(Urgency::Urgent)
            .with_discount(dec("10"))
            .with_parts_cost(dec("55.90")),
    )
    .unwrap();
    assert_eq!(full.travel_fee, Some(dec("65")));
    assert_eq!(full.urgency_fee, Some(dec("100")));
    assert_eq!(full.discount, Some(dec("10")));
    assert_eq!(full.parts_and_materials, Some(dec("55.90")));
    // 150 + 75 + 65 + 100 + 55.90 - 10
    assert_eq!(full.subtotal, dec("435.90"));
}

#[test]
fn test_price_snapshot_json_round_trip() {
    let request = PricingRequest::new(ServiceType::Cleaning, 6)
        .with_add_on("stain_removal")
        .with_add_on("pickup_delivery")
        .with_travel_tier(TravelTier::Regional);
    let breakdown = calculate_job_pricing(&request).unwrap();

    let json = serde_json::to_string(&breakdown).unwrap();
    assert!(json.contains("\"travelFee\""));
    assert!(!json.contains("\"urgencyFee\""));
    assert!(!json.contains("\"discount\""));

    let restored: PriceBreakdown = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, breakdown);
}

#[test]
fn test_request_from_form_json() {
    let form = r#"{
        "serviceType": "maintenance",
        "chairCount": 10,
        "additionalServiceKeys": ["castor_replacement", "condition_report"],
        "discount": 150
    }"#;
    let request: PricingRequest = serde_json::from_str(form).unwrap();
    let breakdown = calculate_job_pricing(&request).unwrap();
    // 100 + 10*45 + 10*120 + 100 - 150
    assert_eq!(breakdown.subtotal, dec("1700"));
    assert_eq!(breakdown.total, dec("1955"));
    assert_eq!(
        format_currency(breakdown.total).replace('\u{a0}', " "),
        "R 1 955,00"
    );
}

#[test]
fn test_itemized_lines_end_with_total() {
    let breakdown = calculate_job_pricing(
        &PricingRequest::new(ServiceType::Assessment, 2).with_add_on("after_hours"),
    )
    .unwrap();
    let lines = itemize(&breakdown);
    let last = lines.last().unwrap();
    assert_eq!(last.label, "Total");
    assert_eq!(last.amount, breakdown.total);
}

#[test]
fn test_invalid_requests() {
    let err = calculate_job_pricing(&PricingRequest::new(ServiceType::Cleaning, 0)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let err = calculate_job_pricing(
        &PricingRequest::new(ServiceType::Cleaning, 1).with_add_on("teleportation"),
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigurationError);

    let err = "polishing".parse::<ServiceType>().unwrap_err();
    assert!(matches!(err, ChairCareError::UnknownServiceType { .. }));
}

#[test]
fn test_calculator_reports_every_request_error() {
    let request = PricingRequest::new(ServiceType::Cleaning, 0)
        .with_discount(dec("-5"))
        .with_parts_cost(dec("-1"));
    let err = PricingCalculator::new(PricingTables::standard())
        .calculate(&request)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
    let message = err.to_string();
    assert!(message.contains("Chair count"));
    assert!(message.contains("Discount"));
    assert!(message.contains("Parts and materials"));
}

#[test]
fn test_huge_parts_cost_is_rejected_not_panicking() {
    let request = PricingRequest::new(ServiceType::Cleaning, 1).with_parts_cost(Decimal::MAX);
    let err = calculate_job_pricing(&request).unwrap_err();
    assert!(matches!(err, ChairCareError::AmountOverflow { .. }));
}

#[test]
fn test_format_currency_thousand_rand() {
    let formatted = format_currency(dec("1000"));
    assert!(formatted.contains('R'));
    let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
    assert!(digits.starts_with("1000"));
}

// ==================== Tables files ====================

#[test]
fn test_custom_tables_file() {
    let mut tables = PricingTables::default();
    tables.services.get_mut(&ServiceType::Cleaning).unwrap().price_per_chair = dec("30");
    tables.travel_fees.insert(TravelTier::Remote, dec("150"));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string_pretty(&tables).unwrap().as_bytes())
        .unwrap();

    let loaded = load_tables(Some(file.path())).unwrap();
    let breakdown = PricingCalculator::new(&loaded)
        .calculate(
            &PricingRequest::new(ServiceType::Cleaning, 3).with_travel_tier(TravelTier::Remote),
        )
        .unwrap();
    // 50 + 3*30 + 150
    assert_eq!(breakdown.subtotal, dec("290"));
}

#[test]
fn test_rejected_tables_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "taxRate": 1.5, "services": {} }"#).unwrap();
    let err = load_tables(Some(file.path())).unwrap_err();
    assert!(matches!(err, ChairCareError::InvalidTables { .. }));
}

#[test]
fn test_default_tables_when_no_file() {
    assert_eq!(load_tables(None).unwrap(), *PricingTables::standard());
}

// ==================== QR payloads ====================

#[test]
fn test_qr_examples() {
    let decoded = qr::decode("CHAIRCARE:abc:123");
    assert_eq!((decoded.id(), decoded.number()), ("abc", "123"));

    let decoded = qr::decode("CHAIRCARE:abc:123:executive");
    assert_eq!((decoded.id(), decoded.number()), ("abc", "123"));

    let decoded = qr::decode("not json, not prefixed");
    assert_eq!(
        (decoded.id(), decoded.number()),
        ("not json, not prefixed", "not json, not prefixed")
    );

    let decoded = qr::decode(r#"{"type":"chair","id":"x1","number":"N1"}"#);
    assert_eq!((decoded.id(), decoded.number()), ("x1", "N1"));
}

#[test]
fn test_bulk_created_payload_scans_back() {
    let payload = qr::encode_with_category("q7Lm2", "EX-019", "executive");
    let decoded = qr::decode(&payload);
    assert_eq!((decoded.id(), decoded.number()), ("q7Lm2", "EX-019"));
    assert_eq!(decoded.format, PayloadFormat::Canonical);
}

#[test]
fn test_truncated_canonical_payload_is_low_confidence() {
    let decoded = qr::decode("CHAIRCARE:q7Lm2");
    assert!(decoded.is_low_confidence());
    assert_eq!(decoded.id(), "CHAIRCARE:q7Lm2");
    assert_eq!(decoded.number(), "CHAIRCARE:q7Lm2");
}

#[test]
fn test_scan_batch_never_panics() {
    let scans = [
        "",
        ":",
        "CHAIRCARE:",
        "CHAIRCARE::",
        "{",
        "{}",
        "null",
        "{\"type\":\"chair\",\"id\":{},\"number\":[]}",
        "\u{0}\u{1}",
    ];
    for scan in scans {
        let decoded = qr::decode(scan);
        if decoded.is_low_confidence() {
            assert_eq!(decoded.id(), scan);
        }
    }
}
