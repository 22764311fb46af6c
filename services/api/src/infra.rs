use maturity_diagnosis::diagnosis::{CompanySize, DiagnosisEngine, Preset, RandomFallback};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared engine plus the seed used for action padding, if any.
#[derive(Clone)]
pub(crate) struct DiagnosisState {
    pub(crate) engine: Arc<DiagnosisEngine>,
    pub(crate) fallback_seed: Option<u64>,
}

impl DiagnosisState {
    pub(crate) fn new(engine: DiagnosisEngine, fallback_seed: Option<u64>) -> Self {
        Self {
            engine: Arc::new(engine),
            fallback_seed,
        }
    }
}

/// A seeded source replays the same padding for every request.
pub(crate) fn fallback_for(seed: Option<u64>) -> RandomFallback {
    match seed {
        Some(seed) => RandomFallback::seeded(seed),
        None => RandomFallback::from_entropy(),
    }
}

pub(crate) fn parse_company_size(raw: &str) -> Result<CompanySize, String> {
    raw.parse::<CompanySize>().map_err(|err| err.to_string())
}

pub(crate) fn parse_preset(raw: &str) -> Result<Preset, String> {
    raw.parse::<Preset>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maturity_diagnosis::diagnosis::FallbackSource;

    #[test]
    fn company_size_errors_list_known_tiers() {
        assert_eq!(parse_company_size("200+"), Ok(CompanySize::Enterprise));
        let err = parse_company_size("huge").expect_err("unknown tier");
        assert!(err.contains("6-15"));
    }

    #[test]
    fn seeded_fallbacks_repeat() {
        let mut first = fallback_for(Some(3));
        let mut second = fallback_for(Some(3));
        assert_eq!(first.next_index(5), second.next_index(5));
    }
}
