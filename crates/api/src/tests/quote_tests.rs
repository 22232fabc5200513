// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_saturday_evening_surcharge;
use crate::{
    AmenityInfo, ApiError, CoachQuoteRequest, CoachQuoteResponse, CombinedQuoteRequest,
    CombinedQuoteResponse, FieldQuoteRequest, FieldQuoteResponse, PriceRangeInfo, quote_coach,
    quote_combined, quote_field,
};

fn saturday_field_request(start: &str, end: &str) -> FieldQuoteRequest {
    FieldQuoteRequest {
        date: String::from("2025-03-15"),
        start_time: String::from(start),
        end_time: String::from(end),
        base_price: 150_000,
        price_ranges: create_saturday_evening_surcharge(),
    }
}

#[test]
fn test_saturday_evening_field_quote() {
    let response: FieldQuoteResponse =
        quote_field(&saturday_field_request("18:00", "20:00")).unwrap();

    assert_eq!(response.day, "saturday");
    assert_eq!(response.total, 360_000);
    assert_eq!(response.lines.len(), 2);
    assert_eq!(response.lines[0].start_time, "18:00");
    assert!((response.lines[0].multiplier - 1.2).abs() < f64::EPSILON);
}

#[test]
fn test_field_quote_mixes_multipliers() {
    let request: FieldQuoteRequest = FieldQuoteRequest {
        date: String::from("2025-03-10"),
        start_time: String::from("18:00"),
        end_time: String::from("20:00"),
        base_price: 100_000,
        price_ranges: vec![PriceRangeInfo {
            day: String::from("monday"),
            start: String::from("18:00"),
            end: String::from("19:00"),
            multiplier: 1.5,
        }],
    };

    let first: FieldQuoteResponse = quote_field(&request).unwrap();
    let second: FieldQuoteResponse = quote_field(&request).unwrap();

    assert_eq!(first.total, 250_000);
    assert_eq!(first, second);
}

#[test]
fn test_field_quote_outside_surcharge_uses_base_price() {
    let response: FieldQuoteResponse =
        quote_field(&saturday_field_request("16:00", "18:00")).unwrap();

    assert_eq!(response.total, 300_000);
}

#[test]
fn test_field_quote_with_inverted_range_is_rejected() {
    let result: Result<FieldQuoteResponse, ApiError> =
        quote_field(&saturday_field_request("15:00", "13:00"));

    assert_eq!(
        result,
        Err(ApiError::DomainRuleViolation {
            rule: String::from("end_after_start"),
            message: String::from("End time 13:00 must be after start time 15:00"),
        })
    );
}

#[test]
fn test_field_quote_with_negative_multiplier_is_rejected() {
    let mut request: FieldQuoteRequest = saturday_field_request("18:00", "20:00");
    request.price_ranges[0].multiplier = -1.0;

    let result: Result<FieldQuoteResponse, ApiError> = quote_field(&request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "multiplier"
    ));
}

#[test]
fn test_field_quote_with_unreadable_time_is_rejected() {
    let result: Result<FieldQuoteResponse, ApiError> =
        quote_field(&saturday_field_request("noon", "20:00"));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "start_time"
    ));
}

#[test]
fn test_coach_quote() {
    let response: CoachQuoteResponse = quote_coach(&CoachQuoteRequest {
        start_time: String::from("15:00"),
        end_time: String::from("17:00"),
        price: 200_000,
    })
    .unwrap();

    assert_eq!(response.duration_hours, 2);
    assert_eq!(response.hourly_rate, 200_000);
    assert_eq!(response.total, 400_000);
}

#[test]
fn test_coach_quote_overflow_is_rejected() {
    let result: Result<CoachQuoteResponse, ApiError> = quote_coach(&CoachQuoteRequest {
        start_time: String::from("08:00"),
        end_time: String::from("10:00"),
        price: u64::MAX,
    });

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "price_representable"
    ));
}

fn combined_request(coach_price: Option<u64>) -> CombinedQuoteRequest {
    CombinedQuoteRequest {
        date: String::from("2025-03-15"),
        start_time: String::from("18:00"),
        end_time: String::from("20:00"),
        base_price: 150_000,
        price_ranges: create_saturday_evening_surcharge(),
        amenities: vec![
            AmenityInfo {
                id: String::from("a-1"),
                name: String::from("Ball rental"),
                price: 50_000,
            },
            AmenityInfo {
                id: String::from("a-2"),
                name: String::from("Bibs"),
                price: 30_000,
            },
        ],
        coach_price,
    }
}

#[test]
fn test_combined_quote_sums_parts_without_discount() {
    let response: CombinedQuoteResponse = quote_combined(&combined_request(Some(200_000))).unwrap();

    assert_eq!(response.field, 360_000);
    assert_eq!(response.amenities, 80_000);
    assert_eq!(response.coach, 400_000);
    assert_eq!(response.total, 840_000);
    assert_eq!(response.field_lines.len(), 2);
}

#[test]
fn test_combined_quote_without_coach() {
    let response: CombinedQuoteResponse = quote_combined(&combined_request(None)).unwrap();

    assert_eq!(response.coach, 0);
    assert_eq!(response.total, 440_000);
}
