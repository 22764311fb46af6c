use super::domain::CompanySize;
use super::narrative::budget_band;

/// Overall percentage bucket used by the timeframe and investment tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PercentageTier {
    /// 70 and above.
    Ready,
    /// 50 to 69.
    Developing,
    /// Below 50.
    Emerging,
}

impl PercentageTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Ready, Self::Developing, Self::Emerging]
    }

    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            70.. => Self::Ready,
            50..=69 => Self::Developing,
            _ => Self::Emerging,
        }
    }
}

pub fn timeframe(tier: PercentageTier, size: CompanySize) -> &'static str {
    use CompanySize::*;

    match (tier, size) {
        (PercentageTier::Ready, Solo | Micro) => {
            "Puedes empezar CON AUTOMATIZACIONES BÁSICAS en 1-2 semanas, e implementar IA avanzada en 3-6 meses."
        }
        (PercentageTier::Ready, Small | Medium | Large | Enterprise) => {
            "Inicia automatizaciones simples YA (1 mes), lanza IA piloto en 6-9 meses, escala en 12-18 meses."
        }
        (PercentageTier::Developing, Solo | Micro | Small) => {
            "Empieza con chatbots y automatizaciones básicas AHORA (2-4 semanas), construye capacidades de IA en 6-12 meses."
        }
        (PercentageTier::Developing, Medium | Large | Enterprise) => {
            "Implementa automatizaciones inmediatas (1-2 meses), desarrolla capacidades de IA en 12-18 meses."
        }
        (PercentageTier::Emerging, Solo | Micro) => {
            "ACCIÓN INMEDIATA: automatizaciones básicas (1 mes), transformación digital en 6-12 meses, IA avanzada en 12-18 meses."
        }
        (PercentageTier::Emerging, Small | Medium | Large | Enterprise) => {
            "Plan dual: automatizaciones rápidas (2-3 meses) + transformación estructural (18-24 meses) en paralelo."
        }
    }
}

pub fn investment_guidance(tier: PercentageTier, size: CompanySize) -> String {
    let budget = budget_band(size);

    match tier {
        PercentageTier::Ready => format!(
            "EMPIEZA YA: Automatizaciones básicas {}/mes (chatbots, emails). Inversión IA avanzada: {}. ROI esperado: 200-500% en 6 meses.",
            budget.immediate, budget.advanced
        ),
        PercentageTier::Developing => format!(
            "PLAN DUAL: Automatizaciones inmediatas {}/mes + Preparación para IA {}/año. ROI automatizaciones: 10-20 horas/semana recuperadas.",
            budget.immediate, budget.advanced
        ),
        PercentageTier::Emerging => format!(
            "ESTRATEGIA GRADUAL: Empieza con automatizaciones {}/mes (ROI inmediato: 5-15 horas/semana). Construye capacidades para IA: {} en 12-18 meses.",
            budget.immediate, budget.advanced
        ),
    }
}
