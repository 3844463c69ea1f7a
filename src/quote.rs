use serde::Deserialize;

pub const THANKS_MESSAGE: &str = "Thanks for your submission!";
pub const GENERIC_FAILURE_MESSAGE: &str = "Oops! There was a problem submitting your form.";

/// The fixed list a visitor can tick on the quote form. Distinct from the
/// pricing catalog; these are free-text labels sent to the intake endpoint.
pub const REQUESTED_SERVICES: [&str; 6] = [
    "Exterior Detailing",
    "Interior Detailing",
    "Wax Protection",
    "Leather Treatment",
    "Carpet Cleaning",
    "Sanitization",
];

/// One in-progress customer inquiry. Lives only for the current mount of
/// the quote form; reset to `Default` after a successful submission.
#[derive(Clone, PartialEq, Default)]
pub struct QuoteDraft {
    pub email: String,
    pub aircraft_type: String,
    pub tail_number: String,
    pub location: String,
    pub phone_number: String,
    pub preferred_date: String,
    pub notes: String,
    pub services: Vec<String>,
    pub hose_access: bool,
}

impl QuoteDraft {
    /// Add the service if absent, remove it if present.
    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service.to_string());
        }
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    /// Email, aircraft type and tail number must be filled in before we
    /// bother the intake endpoint. Email format itself is left to the
    /// input control's own constraint.
    pub fn has_required(&self) -> bool {
        !self.email.trim().is_empty()
            && !self.aircraft_type.trim().is_empty()
            && !self.tail_number.trim().is_empty()
    }

    /// Flatten the draft into the key/value pairs the intake endpoint
    /// expects: scalars verbatim, the services list comma-joined.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("email", self.email.clone()),
            ("aircraftType", self.aircraft_type.clone()),
            ("tailNumber", self.tail_number.clone()),
            ("location", self.location.clone()),
            ("phoneNumber", self.phone_number.clone()),
            ("preferredDate", self.preferred_date.clone()),
            ("notes", self.notes.clone()),
            ("services", self.services.join(", ")),
            ("hoseAccess", self.hose_access.to_string()),
        ]
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Option<Vec<FieldError>>,
}

#[derive(Deserialize)]
struct FieldError {
    message: String,
}

/// What one submission attempt came to. Overwrites the previous outcome on
/// every attempt; the form surfaces exactly one message at a time.
#[derive(Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Endpoint accepted the inquiry.
    Success,
    /// Endpoint rejected it with field-level messages.
    Rejected(String),
    /// The exchange itself failed, or the failure body was unreadable.
    TransportFailure,
}

impl SubmitOutcome {
    /// Classify a settled HTTP response. `body` is the raw response text of
    /// a non-OK response, when one could be read at all.
    pub fn from_response(ok: bool, body: Option<&str>) -> Self {
        if ok {
            return SubmitOutcome::Success;
        }
        let messages = body
            .and_then(|text| serde_json::from_str::<ErrorBody>(text).ok())
            .and_then(|parsed| parsed.errors)
            .filter(|errors| !errors.is_empty());
        match messages {
            Some(errors) => {
                let joined = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join(", ");
                SubmitOutcome::Rejected(joined)
            }
            None => SubmitOutcome::TransportFailure,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Success => THANKS_MESSAGE.to_string(),
            SubmitOutcome::Rejected(messages) => messages.clone(),
            SubmitOutcome::TransportFailure => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Submit gate: a draft goes out only when required fields are present and
/// no earlier request is still in flight.
pub fn can_submit(draft: &QuoteDraft, submitting: bool) -> bool {
    !submitting && draft.has_required()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> QuoteDraft {
        QuoteDraft {
            email: "owner@example.com".into(),
            aircraft_type: "Cessna 172".into(),
            tail_number: "N12345".into(),
            location: "KAGS".into(),
            phone_number: "555-0100".into(),
            preferred_date: "Next Saturday".into(),
            notes: "Hangar 4".into(),
            services: vec!["Exterior Detailing".into(), "Wax Protection".into()],
            hose_access: true,
        }
    }

    #[test]
    fn toggle_service_twice_restores_membership() {
        let mut draft = filled_draft();
        let before = draft.services.clone();
        draft.toggle_service("Sanitization");
        assert!(draft.has_service("Sanitization"));
        draft.toggle_service("Sanitization");
        assert_eq!(draft.services, before);
    }

    #[test]
    fn required_fields_guard() {
        assert!(filled_draft().has_required());
        let mut draft = filled_draft();
        draft.tail_number = "  ".into();
        assert!(!draft.has_required());
        assert!(!QuoteDraft::default().has_required());
    }

    #[test]
    fn fields_flatten_services_and_hose_access() {
        let fields = filled_draft().fields();
        let lookup = |key: &str| {
            fields
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(lookup("services"), "Exterior Detailing, Wax Protection");
        assert_eq!(lookup("hoseAccess"), "true");
        assert_eq!(lookup("aircraftType"), "Cessna 172");
        assert_eq!(fields.len(), 9);
    }

    #[test]
    fn empty_draft_still_produces_every_field() {
        let fields = QuoteDraft::default().fields();
        assert_eq!(fields.len(), 9);
        assert!(fields
            .iter()
            .all(|(k, v)| if *k == "hoseAccess" { v == "false" } else { v.is_empty() }));
    }

    #[test]
    fn ok_response_is_success() {
        let outcome = SubmitOutcome::from_response(true, None);
        assert_eq!(outcome.message(), THANKS_MESSAGE);
    }

    #[test]
    fn structured_errors_are_joined_verbatim() {
        let body = r#"{"errors":[{"message":"Email is required"}]}"#;
        let outcome = SubmitOutcome::from_response(false, Some(body));
        assert_eq!(outcome.message(), "Email is required");

        let body = r#"{"errors":[{"message":"Email is required"},{"message":"Tail number looks wrong"}]}"#;
        let outcome = SubmitOutcome::from_response(false, Some(body));
        assert_eq!(outcome.message(), "Email is required, Tail number looks wrong");
    }

    #[test]
    fn unparseable_failures_use_the_generic_message() {
        for body in [None, Some("<html>502</html>"), Some(r#"{"errors":[]}"#), Some("{}")] {
            let outcome = SubmitOutcome::from_response(false, body);
            assert_eq!(outcome.message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn submit_gate_blocks_inflight_and_incomplete_drafts() {
        assert!(can_submit(&filled_draft(), false));
        assert!(!can_submit(&filled_draft(), true));
        assert!(!can_submit(&QuoteDraft::default(), false));
    }
}
