use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config;
use crate::leads::models::{ContactInquiry, DemoRequest};

/// Same shape `Date.prototype.toISOString` produces, e.g. `2025-03-01T09:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactEnvelope {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub query: String,
    pub timestamp: String,
    pub source: &'static str,
}

impl ContactEnvelope {
    pub fn new(inquiry: &ContactInquiry, captured_at: DateTime<Utc>) -> Self {
        Self {
            name: inquiry.name.trim().to_string(),
            phone_number: inquiry.phone_number.trim().to_string(),
            email: inquiry.email.trim().to_lowercase(),
            query: inquiry.query.trim().to_string(),
            timestamp: iso_timestamp(captured_at),
            source: config::CONTACT_SOURCE,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DemoEnvelope {
    pub name: String,
    pub email: String,
    pub phone_number: String, // the demo form never asks for one
    pub query: String,
    pub timestamp: String,
    pub source: &'static str,
    #[serde(rename = "req_url")]
    pub req_url: &'static str,
    pub company_name: String,
    pub company_role: String,
    pub region: String,
    pub company_type: String,
    pub expectations: String,
    pub linkedin_profile: String,
}

/// Human-readable one-liner for the collector's free-text `query` column.
pub fn demo_query_summary(request: &DemoRequest) -> String {
    format!(
        "Demo Request - Company: {}, Role: {}, Region: {}, Company Type: {}, Expectations: {}, LinkedIn: {}",
        request.company_name.trim(),
        request.company_role.trim(),
        request.region.map(|r| r.label()).unwrap_or(""),
        request.company_type.map(|t| t.label()).unwrap_or(""),
        request.expectations.trim(),
        request.linkedin().unwrap_or("Not provided"),
    )
}

impl DemoEnvelope {
    pub fn new(request: &DemoRequest, captured_at: DateTime<Utc>) -> Self {
        Self {
            name: format!("{} {}", request.first_name.trim(), request.last_name.trim()),
            email: request.work_email.trim().to_lowercase(),
            phone_number: String::new(),
            query: demo_query_summary(request),
            timestamp: iso_timestamp(captured_at),
            source: config::DEMO_SOURCE,
            req_url: config::REQUEST_ORIGIN,
            company_name: request.company_name.trim().to_string(),
            company_role: request.company_role.trim().to_string(),
            region: request.region.map(|r| r.label().to_string()).unwrap_or_default(),
            company_type: request
                .company_type
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
            expectations: request.expectations.trim().to_string(),
            linkedin_profile: request.linkedin_profile.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::models::{CompanyType, Region};
    use chrono::TimeZone;
    use serde_json::json;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    }

    fn demo() -> DemoRequest {
        DemoRequest {
            first_name: " Jane ".to_string(),
            last_name: "Doe".to_string(),
            work_email: " Jane@Studio.IO ".to_string(),
            company_name: "Pixel Forge ".to_string(),
            company_role: "CTO".to_string(),
            region: Some(Region::Europe),
            company_type: Some(CompanyType::GameStudio),
            expectations: " Higher eCPM on rewarded ".to_string(),
            linkedin_profile: String::new(),
        }
    }

    #[test]
    fn timestamp_matches_js_iso_format() {
        assert_eq!(iso_timestamp(at()), "2025-03-01T09:30:00.000Z");
    }

    #[test]
    fn contact_envelope_wire_shape() {
        let inquiry = ContactInquiry {
            name: "  Jane Doe ".to_string(),
            phone_number: " 555-123-4567".to_string(),
            email: " JANE@Studio.io ".to_string(),
            query: "Need help with mediation setup  ".to_string(),
        };
        let body = serde_json::to_value(ContactEnvelope::new(&inquiry, at())).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Jane Doe",
                "phoneNumber": "555-123-4567",
                "email": "jane@studio.io",
                "query": "Need help with mediation setup",
                "timestamp": "2025-03-01T09:30:00.000Z",
                "source": "contact_modal",
            })
        );
    }

    #[test]
    fn demo_query_mentions_every_structured_field() {
        let envelope = DemoEnvelope::new(&demo(), at());
        for part in [
            "Company: Pixel Forge",
            "Role: CTO",
            "Region: Europe",
            "Company Type: Game Studio",
            "Expectations: Higher eCPM on rewarded",
            "LinkedIn: Not provided",
        ] {
            assert!(envelope.query.contains(part), "missing {part:?} in {}", envelope.query);
        }
        assert!(envelope.query.starts_with("Demo Request - "));
    }

    #[test]
    fn demo_query_includes_linkedin_when_given() {
        let mut request = demo();
        request.linkedin_profile = " https://linkedin.com/in/jane ".to_string();
        assert!(demo_query_summary(&request).ends_with("LinkedIn: https://linkedin.com/in/jane"));
    }

    #[test]
    fn demo_envelope_wire_shape() {
        let body = serde_json::to_value(DemoEnvelope::new(&demo(), at())).unwrap();
        assert_eq!(body["name"], "Jane Doe");
        assert_eq!(body["email"], "jane@studio.io");
        assert_eq!(body["phoneNumber"], "");
        assert_eq!(body["source"], "request_demo");
        assert_eq!(body["req_url"], "adpocket.ai");
        assert_eq!(body["companyName"], "Pixel Forge");
        assert_eq!(body["companyRole"], "CTO");
        assert_eq!(body["region"], "Europe");
        assert_eq!(body["companyType"], "Game Studio");
        assert_eq!(body["expectations"], "Higher eCPM on rewarded");
        assert_eq!(body["linkedinProfile"], "");
        assert_eq!(body["timestamp"], "2025-03-01T09:30:00.000Z");
        assert_eq!(body.as_object().map(|o| o.len()), Some(13));
    }
}
