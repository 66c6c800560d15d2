use crate::assembler::assemble;
use crate::draft::{SignupDraft, SignupRecord};
use crate::error::IntakeError;
use chrono::{DateTime, Utc};
use gate_credentials::{Password, Username, login};
use gate_domain::config::RulesConfig;
use gate_kernel::id::TaggedId;
use tracing::info;

/// The outcome of a fully admitted signup: branded values plus a session.
#[derive(Debug, Clone)]
pub struct Admission {
    pub username: Username,
    pub password: Password,
    pub created_at: DateTime<Utc>,
    pub session: TaggedId,
}

/// Runs the whole intake pipeline: presence check, branding, session mint.
///
/// Per-field validation failures are aggregated — a draft with a bad username
/// *and* a bad password reports both at once, so the caller can respond with
/// everything that is wrong instead of dribbling errors one at a time.
///
/// # Errors
/// * [`IntakeError::Missing`] if required fields are absent (policy from `rules`).
/// * [`IntakeError::Invalid`] listing every field that failed its category rule.
/// * [`IntakeError::Internal`] if the session cannot be opened.
pub fn admit(draft: SignupDraft, rules: &RulesConfig) -> Result<Admission, IntakeError> {
    let SignupRecord { username, password, created_at } =
        assemble(draft, rules.intake.policy)?;

    let username = Username::parse_with(username, &rules.username);
    let password = Password::parse_with(password, &rules.password);

    let (username, password) = match (username, password) {
        (Ok(u), Ok(p)) => (u, p),
        (u, p) => {
            let failures: Vec<_> = [u.err(), p.err()].into_iter().flatten().collect();
            return Err(IntakeError::invalid(failures));
        },
    };

    let session = login(&username, &password).map_err(|e| IntakeError::Internal {
        message: e.to_string().into(),
        context: Some("Opening session".into()),
    })?;

    info!(user = %username, session = %session, "Signup admitted");

    Ok(Admission { username, password, created_at, session })
}
