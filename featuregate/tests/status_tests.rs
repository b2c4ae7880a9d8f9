use chrono::DateTime;
use featuregate::{status_from_json, LicenseDoc, LicenseState, LicenseStatus, LicenseTier};
use pretty_assertions::assert_eq;

const EXPIRY_MS: i64 = 1_700_000_000_000;

fn at(ms: i64) -> DateTime<chrono::Utc> {
    DateTime::from_timestamp_millis(ms).expect("valid timestamp")
}

#[test]
fn parses_endpoint_document() {
    let doc = LicenseDoc::from_json(
        r#"{"type":"gold","status":"active","expiry_date_in_millis":1700000000000}"#,
    )
    .unwrap();
    assert_eq!(doc.tier, LicenseTier::Gold);
    assert_eq!(doc.status, LicenseState::Active);
    assert_eq!(doc.expiry_date_in_millis, Some(EXPIRY_MS));
}

#[test]
fn active_document_inside_window_resolves_active() {
    let doc = LicenseDoc {
        tier: LicenseTier::Platinum,
        status: LicenseState::Active,
        expiry_date_in_millis: Some(EXPIRY_MS),
    };
    assert_eq!(
        doc.status_at(at(EXPIRY_MS - 1)),
        LicenseStatus::active(LicenseTier::Platinum)
    );
}

#[test]
fn expiry_in_past_resolves_inactive() {
    // A stale document can still claim to be active; the window wins.
    let doc = LicenseDoc {
        tier: LicenseTier::Platinum,
        status: LicenseState::Active,
        expiry_date_in_millis: Some(EXPIRY_MS),
    };
    assert_eq!(
        doc.status_at(at(EXPIRY_MS)),
        LicenseStatus::expired(LicenseTier::Platinum)
    );
}

#[test]
fn perpetual_document_stays_active() {
    let doc = LicenseDoc {
        tier: LicenseTier::Enterprise,
        status: LicenseState::Active,
        expiry_date_in_millis: None,
    };
    // Far future: year 3000.
    assert_eq!(
        doc.status_at(at(32_503_680_000_000)),
        LicenseStatus::active(LicenseTier::Enterprise)
    );
}

#[test]
fn invalid_state_resolves_inactive() {
    let doc = LicenseDoc {
        tier: LicenseTier::Gold,
        status: LicenseState::Invalid,
        expiry_date_in_millis: None,
    };
    assert_eq!(
        doc.status_at(at(0)),
        LicenseStatus::expired(LicenseTier::Gold)
    );
}

#[test]
fn missing_expiry_field_deserializes_as_perpetual() {
    let doc = LicenseDoc::from_json(r#"{"type":"basic","status":"active"}"#).unwrap();
    assert_eq!(doc.expiry_date_in_millis, None);
}

#[test]
fn unknown_tier_is_an_error() {
    let result = LicenseDoc::from_json(r#"{"type":"titanium","status":"active"}"#);
    assert!(result.is_err());
}

#[test]
fn garbage_json_resolves_unavailable() {
    assert_eq!(status_from_json("not json at all"), LicenseStatus::Unavailable);
    assert_eq!(status_from_json("{}"), LicenseStatus::Unavailable);
}

#[test]
fn well_formed_json_resolves_through() {
    let status = status_from_json(r#"{"type":"trial","status":"active"}"#);
    assert_eq!(status, LicenseStatus::active(LicenseTier::Trial));
}
