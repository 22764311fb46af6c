use super::aggregate::{Aggregate, ResponseSheet};
use super::domain::{BlockAnalysis, CompanySize};
use super::narrative::size_insight;
use super::questionnaire::{strip_ordinal, BlockKind};
use super::rules::{fire, PatternRule, Threshold};

/// Personalized archetype insights are capped so they do not drown the rest.
pub const PERSONALIZED_INSIGHT_LIMIT: usize = 2;
/// Average block percentage below which quick automation wins are suggested.
pub const QUICK_WIN_MATURITY_CUTOFF: f64 = 70.0;
pub const STRENGTH_CUTOFF: u8 = 70;
pub const WEAKNESS_CUTOFF: u8 = 50;
const WEAKEST_BLOCKS_CONSIDERED: usize = 2;

pub(crate) const QUICK_AUTOMATION_INSIGHT: &str = "Aunque tu madurez en IA sea temprana, puedes obtener beneficios inmediatos con automatizaciones simples: chatbots para atención al cliente, emails automáticos, o flujos de WhatsApp Business.";

pub const PERSONALIZED_PATTERNS: &[PatternRule] = &[
    PatternRule {
        name: "digital_visionary",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["est1"], 4.0),
            Threshold::at_least(&["cul2"], 4.0),
            Threshold::at_most(&["tec1", "tec2", "tec3"], 2.5),
        ],
        text: "Eres un \"Visionario Digital\": tienes la visión y cultura, pero necesitas acelerar la implementación tecnológica para materializar tus ideas.",
    },
    PatternRule {
        name: "technical_implementer",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["tec1", "tec2", "tec3"], 4.0),
            Threshold::at_most(&["est1", "est2"], 2.5),
        ],
        text: "Eres un \"Implementador Técnico\": dominas la tecnología pero necesitas una estrategia más clara para maximizar el impacto del negocio.",
    },
    PatternRule {
        name: "operational_machine",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["proc1", "proc2", "proc3", "proc4"], 3.5),
            Threshold::at_least(&["dat1", "dat2", "dat3"], 3.5),
            Threshold::at_most(&["cul1", "cul2", "cul3"], 2.5),
        ],
        text: "Eres una \"Máquina Operativa\": excelente en procesos y datos, pero necesitas trabajar la cultura de cambio para impulsar la innovación.",
    },
    PatternRule {
        name: "freelancer_automation_ready",
        sizes: Some(&[CompanySize::Solo]),
        all_of: &[
            Threshold::at_least(&["proc4"], 4.0),
            Threshold::at_most(&["tec3"], 2.0),
        ],
        text: "Como freelancer que ya identificaste automatizaciones, estás a 2-3 semanas de recuperar 10-15 horas semanales con las herramientas adecuadas.",
    },
    PatternRule {
        name: "open_team_without_champion",
        sizes: Some(&[CompanySize::Micro, CompanySize::Small]),
        all_of: &[
            Threshold::at_least(&["cul2"], 4.0),
            Threshold::at_most(&["cul3"], 2.0),
        ],
        text: "Tu equipo está abierto al cambio pero falta liderazgo digital - designar un \"champion\" interno multiplicará la adopción por 3.",
    },
    PatternRule {
        name: "solid_data_outdated_tools",
        sizes: Some(&[CompanySize::Medium, CompanySize::Large]),
        all_of: &[
            Threshold::at_least(&["dat1"], 4.0),
            Threshold::at_least(&["dat2"], 4.0),
            Threshold::at_most(&["tec1"], 2.0),
        ],
        text: "Tienes una base de datos sólida pero herramientas obsoletas - una modernización tecnológica te daría ventaja competitiva inmediata.",
    },
    PatternRule {
        name: "kpi_quick_win",
        sizes: None,
        all_of: &[
            Threshold::at_least(&["proc1"], 4.0),
            Threshold::at_most(&["proc3"], 2.0),
            Threshold::at_least(&["tec1"], 3.0),
        ],
        text: "QUICK WIN identificado: tus procesos están documentados y tienes herramientas - implementar KPIs automáticos te dará resultados en 2-4 semanas.",
    },
];

pub fn personalized_insights(sheet: &ResponseSheet, size: CompanySize) -> Vec<&'static str> {
    fire(PERSONALIZED_PATTERNS, sheet, size, PERSONALIZED_INSIGHT_LIMIT).collect()
}

/// Explains what makes a strong block strong, looking at its key question.
pub fn strength_context(block: BlockKind, sheet: &ResponseSheet) -> &'static str {
    match block {
        BlockKind::Procesos if sheet.value("proc3") >= 4 => {
            "tienes KPIs implementados que te permiten optimizar continuamente"
        }
        BlockKind::Procesos => "tus procesos están bien estructurados, ideal para automatización",
        BlockKind::Datos if sheet.value("dat2") >= 4 => {
            "la calidad de tus datos es excelente, perfecta para algoritmos de IA"
        }
        BlockKind::Datos => "tienes buena centralización, el siguiente paso es mejorar la calidad",
        BlockKind::Cultura if sheet.value("cul3") >= 4 => {
            "cuentas con liderazgo digital, lo más difícil de conseguir"
        }
        BlockKind::Cultura => "tu equipo tiene competencias digitales sólidas",
        BlockKind::Tecnologia if sheet.value("tec3") >= 4 => {
            "ya tienes experiencia con automatizaciones, puedes escalar rápido"
        }
        BlockKind::Tecnologia => "tu infraestructura moderna facilita implementar nuevas soluciones",
        BlockKind::Estrategia if sheet.value("est2") >= 4 => {
            "el compromiso directivo garantiza los recursos necesarios"
        }
        BlockKind::Estrategia => "tienes una hoja de ruta clara para la transformación digital",
        BlockKind::Seguridad => "tienes una base sólida para expandir a otras áreas",
    }
}

pub fn weakness_context(block: BlockKind, sheet: &ResponseSheet) -> &'static str {
    match block {
        BlockKind::Procesos if sheet.value("proc1") <= 2 => {
            "sin procesos documentados, la IA puede amplificar problemas existentes"
        }
        BlockKind::Procesos => "necesitas medir la eficiencia antes de automatizar",
        BlockKind::Datos if sheet.value("dat2") <= 2 => {
            "la calidad de datos es crítica - ningún algoritmo funciona con datos incorrectos"
        }
        BlockKind::Datos => "datos fragmentados limitan el potencial de análisis avanzado",
        BlockKind::Cultura if sheet.value("cul3") <= 2 => {
            "sin liderazgo digital, los proyectos de transformación fracasan en el 70% de los casos"
        }
        BlockKind::Cultura => "necesitas formar al equipo antes de introducir nuevas tecnologías",
        BlockKind::Tecnologia if sheet.value("tec2") <= 2 => {
            "sistemas legacy requieren modernización antes de implementar IA"
        }
        BlockKind::Tecnologia => "falta integración entre herramientas, creando silos de información",
        BlockKind::Estrategia if sheet.value("est2") <= 2 => {
            "sin compromiso directivo, es difícil conseguir presupuesto y recursos"
        }
        BlockKind::Estrategia => {
            "necesitas definir objetivos específicos y medibles para la digitalización"
        }
        BlockKind::Seguridad => {
            "requiere atención urgente para el éxito de la transformación digital"
        }
    }
}

/// Best block first; ties keep declaration order.
pub(crate) fn strongest_block(blocks: &[BlockAnalysis]) -> Option<&BlockAnalysis> {
    let mut ranked: Vec<&BlockAnalysis> = blocks.iter().collect();
    ranked.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    ranked.into_iter().next()
}

/// Weakest blocks first; ties keep declaration order.
pub(crate) fn weakest_blocks(blocks: &[BlockAnalysis], count: usize) -> Vec<&BlockAnalysis> {
    let mut ranked: Vec<&BlockAnalysis> = blocks.iter().collect();
    ranked.sort_by_key(|block| block.percentage);
    ranked.truncate(count);
    ranked
}

pub(crate) fn main_insights(
    blocks: &[BlockAnalysis],
    aggregate: &Aggregate,
    sheet: &ResponseSheet,
    size: CompanySize,
) -> Vec<String> {
    let mut insights = vec![size_insight(size).to_string()];

    insights.extend(
        personalized_insights(sheet, size)
            .into_iter()
            .map(str::to_string),
    );

    if aggregate.average_block_percentage() < QUICK_WIN_MATURITY_CUTOFF {
        insights.push(QUICK_AUTOMATION_INSIGHT.to_string());
    }

    if let Some(strongest) = strongest_block(blocks) {
        if strongest.percentage >= STRENGTH_CUTOFF {
            insights.push(format!(
                "Tu mayor fortaleza está en {}: {}",
                display_name(strongest).to_lowercase(),
                strength_context(strongest.id, sheet)
            ));
        }
    }

    for weak in weakest_blocks(blocks, WEAKEST_BLOCKS_CONSIDERED) {
        if weak.percentage < WEAKNESS_CUTOFF {
            insights.push(format!(
                "{}: {}",
                display_name(weak),
                weakness_context(weak.id, sheet)
            ));
        }
    }

    insights
}

fn display_name(block: &BlockAnalysis) -> &str {
    strip_ordinal(&block.title)
}
