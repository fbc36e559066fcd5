use std::collections::HashMap;

use itertools::Itertools;

use super::prelude::*;

/// Aggregated survey answers for the administrative dashboard.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SurveyStatistics {
    pub total: usize,
    pub by_visit_status: HashMap<VisitStatus, usize>,
    pub by_companions: HashMap<String, usize>,
    pub by_stay: HashMap<String, usize>,
}

pub fn survey_statistics<R: SurveyRepo>(
    repo: &R,
    user: Option<&SessionUser>,
) -> Result<SurveyStatistics> {
    authorize_min_role(user, Role::Admin)?;
    let responses = repo.fetch_all_survey_responses()?;
    let by_visit_status = responses.iter().filter_map(|r| r.visit_status).counts();
    let by_companions = responses
        .iter()
        .filter_map(|r| r.companions.clone())
        .counts();
    let by_stay = responses.iter().filter_map(|r| r.stay.clone()).counts();
    Ok(SurveyStatistics {
        total: responses.len(),
        by_visit_status,
        by_companions,
        by_stay,
    })
}
