use crate::draft::{FIELD_CREATED_AT, FIELD_PASSWORD, FIELD_USERNAME, SignupDraft, SignupRecord};
use crate::error::IntakeError;
use gate_domain::config::IntakePolicy;
use gate_kernel::assert::{InvariantError, require_some};
use tracing::debug;

/// Checks that every required field is present and produces the complete record.
///
/// Field order is declaration order: `username`, `password`, `createdAt`.
/// Under [`IntakePolicy::FailFast`] the first absent field is reported alone;
/// under [`IntakePolicy::Aggregate`] every absent field is listed.
///
/// # Errors
/// Returns [`IntakeError::Missing`] naming the absent field(s).
pub fn assemble(draft: SignupDraft, policy: IntakePolicy) -> Result<SignupRecord, IntakeError> {
    let mut missing = Vec::new();

    if draft.username.is_none() {
        missing.push(FIELD_USERNAME);
    }
    if draft.password.is_none() {
        missing.push(FIELD_PASSWORD);
    }
    if draft.created_at.is_none() {
        missing.push(FIELD_CREATED_AT);
    }

    if let Some(&first) = missing.first() {
        debug!(?missing, ?policy, "Signup draft incomplete");
        return Err(match policy {
            IntakePolicy::FailFast => IntakeError::missing(vec![first]),
            IntakePolicy::Aggregate => IntakeError::missing(missing),
        });
    }

    // The checks above make these infallible; a violation here is a defect.
    let username = require_some(draft.username, FIELD_USERNAME).map_err(defect)?;
    let password = require_some(draft.password, FIELD_PASSWORD).map_err(defect)?;
    let created_at = require_some(draft.created_at, FIELD_CREATED_AT).map_err(defect)?;

    Ok(SignupRecord { username, password, created_at })
}

fn defect(e: InvariantError) -> IntakeError {
    IntakeError::Internal { message: e.to_string().into(), context: Some("Assembling record".into()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn full_draft() -> SignupDraft {
        SignupDraft {
            username: Some("hello".to_owned()),
            password: Some("World1234".to_owned()),
            created_at: Some(Utc::now()),
        }
    }

    #[test]
    fn complete_drafts_assemble() {
        let record = assemble(full_draft(), IntakePolicy::Aggregate).unwrap();
        assert_eq!(record.username, "hello");
    }

    #[test]
    fn fail_fast_reports_the_first_absence_only() {
        let draft = SignupDraft::default();
        let err = assemble(draft, IntakePolicy::FailFast).unwrap_err();
        let IntakeError::Missing { fields, .. } = err else { panic!("expected Missing") };
        assert_eq!(fields, vec![FIELD_USERNAME]);
    }

    #[test]
    fn aggregate_reports_every_absence() {
        let draft = SignupDraft { username: Some("hello".to_owned()), ..SignupDraft::default() };
        let err = assemble(draft, IntakePolicy::Aggregate).unwrap_err();
        let IntakeError::Missing { fields, .. } = err else { panic!("expected Missing") };
        assert_eq!(fields, vec![FIELD_PASSWORD, FIELD_CREATED_AT]);
    }
}
