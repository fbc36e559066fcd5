use super::prelude::*;

/// Free-form visitor feedback. Deliberately validation-free: every question
/// is optional. A response with no answers at all is dropped without a
/// write and without an error.
pub fn submit_survey<R: SurveyRepo>(
    repo: &R,
    user: Option<&SessionUser>,
    now: Timestamp,
    mut response: SurveyResponse,
) -> Result<Option<Id>> {
    if response.is_empty() {
        return Ok(None);
    }
    response.author = user.map(|u| u.email.clone());
    response.created_at = Some(now);
    response.id = repo.add_survey_response(&response)?;
    Ok(Some(response.id))
}
