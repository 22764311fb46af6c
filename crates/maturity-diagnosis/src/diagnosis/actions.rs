use super::aggregate::{Aggregate, ResponseSheet};
use super::domain::CompanySize;
use super::narrative::automation_starter;
use super::rules::{fire, PatternRule, Threshold};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const PRIORITY_ACTION_COUNT: usize = 3;
/// Average block percentage at which the plan leads with advanced analytics.
pub const MATURE_CUTOFF: f64 = 85.0;
const SPECIFIC_ACTION_LIMIT: usize = 2;

pub const MATURE_ACTION: &str = "Implementar IA predictiva para forecasting de ventas y detección de churn de clientes";

pub const FALLBACK_ACTIONS: [&str; 5] = [
    "Automatizar el seguimiento de leads: secuencia de 5 emails automáticos con contenido de valor personalizado",
    "Crear un sistema de calificación automática de prospectos usando formularios inteligentes y scoring",
    "Implementar automatización de redes sociales: programación de posts, respuestas automáticas y generación de leads",
    "Desarrollar un sistema de reportes automáticos que consolide métricas clave semanalmente",
    "Implementar un workflow de onboarding automatizado para nuevos clientes o empleados",
];

pub const SPECIFIC_ACTION_PATTERNS: &[PatternRule] = &[
    PatternRule {
        name: "documented_processes_without_kpis",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["proc1"], 4.0),
            Threshold::at_least(&["proc2"], 4.0),
            Threshold::at_most(&["proc3"], 2.0),
        ],
        text: "Implementar un dashboard de KPIs automático que mida la eficiencia de tus procesos ya documentados",
    },
    PatternRule {
        name: "centralized_data_poor_quality",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["dat1"], 4.0),
            Threshold::at_most(&["dat2"], 2.0),
        ],
        text: "Ejecutar un proyecto de limpieza de datos: eliminar duplicados, estandarizar formatos y validar información",
    },
    PatternRule {
        name: "good_tools_without_integration",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["tec1"], 4.0),
            Threshold::at_least(&["tec2"], 4.0),
            Threshold::at_most(&["dat3"], 2.0),
        ],
        text: "Integrar tus sistemas existentes usando APIs o herramientas como Zapier para crear flujos de datos automáticos",
    },
    PatternRule {
        name: "skilled_team_without_leadership",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["cul1"], 4.0),
            Threshold::at_most(&["cul3"], 2.0),
        ],
        text: "Designar un Chief Digital Officer interno y crear un comité de transformación digital con reuniones semanales",
    },
    PatternRule {
        name: "strategy_without_sponsorship",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["est1"], 4.0),
            Threshold::at_most(&["est2"], 2.0),
        ],
        text: "Organizar una presentación ejecutiva mostrando ROI de casos de éxito de IA en tu sector para conseguir buy-in directivo",
    },
    PatternRule {
        name: "mature_operations_legacy_stack",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["proc1", "proc2", "proc3"], 4.0),
            Threshold::at_least(&["dat1", "dat2"], 4.0),
            Threshold::at_most(&["tec1", "tec2"], 2.0),
        ],
        text: "Migrar a la nube y modernizar tu stack tecnológico - tienes la base de procesos y datos perfecta para maximizar el ROI",
    },
    PatternRule {
        name: "innovative_culture_weak_operations",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["cul1", "cul2"], 4.0),
            Threshold::at_least(&["est1"], 4.0),
            Threshold::at_most(&["proc1", "proc2"], 2.0),
        ],
        text: "Aprovechar tu cultura innovadora para pilotar metodologías ágiles y documentar procesos sobre la marcha",
    },
    PatternRule {
        name: "identified_but_unautomated",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["proc4"], 4.0),
            Threshold::at_most(&["tec3"], 2.0),
        ],
        text: "Priorizar las 3 automatizaciones más fáciles que ya identificaste - calcula horas ahorradas por semana y empieza por la de mayor impacto",
    },
    PatternRule {
        name: "modern_systems_without_automation",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["tec2"], 4.0),
            Threshold::at_most(&["tec3"], 2.0),
        ],
        text: "Tu infraestructura moderna te permite implementar RPA básico - automatiza reportes, facturación y seguimientos como primer paso",
    },
    PatternRule {
        name: "enterprise_ai_center_of_excellence",
        sizes: Some(&[CompanySize::Enterprise]),
        all_of: &[
            Threshold::at_least(&["cul1"], 4.0),
            Threshold::at_least(&["cul2"], 4.0),
            Threshold::at_least(&["est2"], 4.0),
        ],
        text: "Crear un Centro de Excelencia en IA con budget dedicado y KPIs específicos - tienes la cultura y compromiso ideales",
    },
    PatternRule {
        name: "enterprise_data_lake",
        sizes: Some(&[CompanySize::Enterprise]),
        all_of: &[
            Threshold::at_least(&["dat1"], 4.0),
            Threshold::at_least(&["dat2"], 4.0),
            Threshold::at_least(&["tec1"], 4.0),
        ],
        text: "Implementar un Data Lake empresarial con analytics avanzado - tu infraestructura de datos está lista para Big Data e IA",
    },
];

/// Source of indices for the generic padding actions.
pub trait FallbackSource {
    /// Returns an index in `0..len`; `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<S: FallbackSource + ?Sized> FallbackSource for &mut S {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Uniform draws, either from entropy or from a fixed seed.
#[derive(Debug, Clone)]
pub struct RandomFallback {
    rng: SmallRng,
}

impl RandomFallback {
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic draws, useful for tests and reproducible reports.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl FallbackSource for RandomFallback {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceFallback {
    indices: Vec<usize>,
    cursor: usize,
}

impl SequenceFallback {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            cursor: 0,
        }
    }
}

impl FallbackSource for SequenceFallback {
    fn next_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % len
    }
}

pub fn specific_actions(sheet: &ResponseSheet, size: CompanySize) -> Vec<&'static str> {
    fire(SPECIFIC_ACTION_PATTERNS, sheet, size, usize::MAX).collect()
}

/// Builds exactly [`PRIORITY_ACTION_COUNT`] actions: a maturity-dependent lead,
/// up to two pattern matches, then generic padding.
pub fn plan_actions<F: FallbackSource>(
    aggregate: &Aggregate,
    sheet: &ResponseSheet,
    size: CompanySize,
    fallback: &mut F,
) -> [String; PRIORITY_ACTION_COUNT] {
    let lead = if aggregate.average_block_percentage() < MATURE_CUTOFF {
        automation_starter(size)
    } else {
        MATURE_ACTION
    };

    let mut actions = vec![lead];
    actions.extend(fire(SPECIFIC_ACTION_PATTERNS, sheet, size, SPECIFIC_ACTION_LIMIT));

    while actions.len() < PRIORITY_ACTION_COUNT {
        let index = fallback.next_index(FALLBACK_ACTIONS.len()) % FALLBACK_ACTIONS.len();
        actions.push(FALLBACK_ACTIONS[index]);
    }

    let mut planned: [String; PRIORITY_ACTION_COUNT] = Default::default();
    for (slot, action) in planned.iter_mut().zip(actions) {
        *slot = action.to_string();
    }
    planned
}
