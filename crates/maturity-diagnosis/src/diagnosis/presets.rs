use super::levels::{BlockLadder, LadderError, OverallLadder};
use super::questionnaire::{Block, BlockKind, Question, Questionnaire, QuestionnaireError, SchemaWarning};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named questionnaire variants shipped with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Five blocks, fifteen 1–5 statements, 500 points.
    Compact,
    /// Six blocks including security, 600 declared points.
    Extended,
}

impl Preset {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Extended => "extended",
        }
    }

    pub fn questionnaire(self) -> Questionnaire {
        match self {
            Self::Compact => Questionnaire::compact(),
            Self::Extended => Questionnaire::extended(),
        }
    }

    pub const fn block_bounds(self) -> [u8; 3] {
        match self {
            Self::Compact => [80, 60, 40],
            Self::Extended => [80, 60, 30],
        }
    }

    pub const fn overall_bounds(self) -> [u8; 3] {
        match self {
            Self::Compact => [75, 55, 35],
            Self::Extended => [80, 60, 35],
        }
    }

    pub fn profile(self) -> Result<DiagnosisProfile, ProfileError> {
        DiagnosisProfile::new(
            self.questionnaire(),
            BlockLadder::for_blocks(self.block_bounds())?,
            OverallLadder::for_overall(self.overall_bounds())?,
        )
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "simplified" | "v2-simplified" => Ok(Self::Compact),
            "extended" | "full" | "v2" => Ok(Self::Extended),
            other => Err(format!("unknown questionnaire preset '{other}'")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),
    #[error("invalid threshold ladder: {0}")]
    Ladder(#[from] LadderError),
}

/// Everything a deployment selects: one questionnaire and its two level ladders.
#[derive(Debug, Clone)]
pub struct DiagnosisProfile {
    questionnaire: Questionnaire,
    block_ladder: BlockLadder,
    overall_ladder: OverallLadder,
    warnings: Vec<SchemaWarning>,
}

impl DiagnosisProfile {
    /// Validates the questionnaire and logs any authoring warnings.
    pub fn new(
        questionnaire: Questionnaire,
        block_ladder: BlockLadder,
        overall_ladder: OverallLadder,
    ) -> Result<Self, ProfileError> {
        let warnings = questionnaire.validate()?;
        for warning in &warnings {
            tracing::warn!(questionnaire = %questionnaire.name, "{warning}");
        }

        Ok(Self {
            questionnaire,
            block_ladder,
            overall_ladder,
            warnings,
        })
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn block_ladder(&self) -> &BlockLadder {
        &self.block_ladder
    }

    pub fn overall_ladder(&self) -> &OverallLadder {
        &self.overall_ladder
    }

    pub fn warnings(&self) -> &[SchemaWarning] {
        &self.warnings
    }
}

fn question(id: &str, prompt: &str, weight: f64) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        explanation: None,
        weight,
    }
}

fn explained(id: &str, prompt: &str, explanation: &str, weight: f64) -> Question {
    Question {
        explanation: Some(explanation.to_string()),
        ..question(id, prompt, weight)
    }
}

fn block(id: BlockKind, title: &str, description: &str, questions: Vec<Question>) -> Block {
    Block {
        id,
        title: title.to_string(),
        description: description.to_string(),
        max_points: 100.0,
        questions,
    }
}

impl Questionnaire {
    pub fn compact() -> Self {
        Self {
            name: Preset::Compact.label().to_string(),
            max_total_points: 500.0,
            blocks: vec![
                block(
                    BlockKind::Procesos,
                    "Procesos y Organización",
                    "Evaluamos la madurez de tus procesos organizacionales y su preparación para la digitalización",
                    vec![
                        question("proc1", "Los procesos de negocio de la empresa están definidos y documentados.", 25.0),
                        question("proc2", "Los procesos se siguen de forma consistente en toda la organización.", 25.0),
                        question("proc3", "Existen indicadores (KPIs) que miden la eficiencia de los procesos.", 25.0),
                        question("proc4", "Hemos identificado tareas repetitivas o de bajo valor que podrían ser automatizadas.", 25.0),
                    ],
                ),
                block(
                    BlockKind::Datos,
                    "Datos y Conectividad",
                    "Analizamos la calidad, accesibilidad y gestión de tus datos empresariales",
                    vec![
                        question("dat1", "Los datos de la empresa están centralizados y accesibles.", 33.33),
                        question("dat2", "La calidad de los datos es alta (sin duplicados, errores o incompletos).", 33.33),
                        question("dat3", "Los sistemas principales (ERP, CRM, email, etc.) están integrados entre sí.", 33.34),
                    ],
                ),
                block(
                    BlockKind::Cultura,
                    "Personas y Cultura",
                    "Evaluamos la preparación cultural y las competencias del equipo para adoptar IA",
                    vec![
                        question("cul1", "Los empleados tienen un nivel suficiente de competencias digitales.", 33.33),
                        question("cul2", "Existe una cultura abierta al cambio y a la innovación tecnológica.", 33.33),
                        question("cul3", "La empresa cuenta con un responsable o equipo que lidere la digitalización.", 33.34),
                    ],
                ),
                block(
                    BlockKind::Tecnologia,
                    "Tecnología y Herramientas",
                    "Analizamos tu infraestructura tecnológica y preparación técnica",
                    vec![
                        question("tec1", "La empresa utiliza herramientas digitales de gestión (ERP, CRM, herramientas colaborativas).", 33.33),
                        question("tec2", "Los sistemas tecnológicos son modernos, escalables o en la nube.", 33.33),
                        question("tec3", "Ya se han implementado automatizaciones o pilotos de IA en algún proceso.", 33.34),
                    ],
                ),
                block(
                    BlockKind::Estrategia,
                    "Estrategia y Visión",
                    "Analizamos tu planificación estratégica y visión sobre IA y automatización",
                    vec![
                        question("est1", "La empresa tiene una estrategia digital definida alineada con el negocio.", 50.0),
                        question("est2", "Existe un compromiso claro de la dirección para invertir en digitalización e IA.", 50.0),
                    ],
                ),
            ],
        }
    }

    /// The security block only carries four questions, so its computed maximum
    /// (80) trails the declared 100 and validation reports the drift.
    pub fn extended() -> Self {
        Self {
            name: Preset::Extended.label().to_string(),
            max_total_points: 600.0,
            blocks: vec![
                block(
                    BlockKind::Procesos,
                    "1. Procesos y Organización",
                    "Evaluamos cómo tienes organizados y optimizados tus procesos de negocio",
                    vec![
                        explained("proc1", "¿Tienen definidos y documentados sus procesos de negocio clave?", "Evalúa el nivel de documentación de tus procesos más importantes", 20.0),
                        explained("proc2", "¿Con qué frecuencia revisan y optimizan sus procesos actuales?", "Nunca/raramente, anualmente, trimestralmente o más frecuente", 20.0),
                        explained("proc3", "¿Existen métricas o indicadores (KPIs) que midan la eficiencia de sus procesos?", "No medimos, algunas métricas básicas, KPIs completos y seguimiento regular", 20.0),
                        explained("proc4", "¿Identifican claramente cuáles son las tareas repetitivas o de poco valor añadido?", "No lo analizamos, tenemos idea general, mapeo detallado de tareas", 20.0),
                        explained("proc5", "¿Disponen de un mapa de procesos digitalizado (workflow, BPM, etc.)?", "No existe, mapas básicos en documentos, sistema digital de gestión de procesos", 20.0),
                    ],
                ),
                block(
                    BlockKind::Datos,
                    "2. Datos y Conectividad",
                    "Analizamos cómo gestionas, almacenas y conectas tus datos empresariales",
                    vec![
                        explained("dat1", "¿Dónde se almacenan actualmente sus datos (Excel, ERP, CRM, otros sistemas)?", "Principalmente Excel/archivos, sistemas mixtos, sistemas integrados (ERP/CRM)", 20.0),
                        explained("dat2", "¿Los datos están centralizados o dispersos en diferentes plataformas?", "Muy dispersos, parcialmente centralizados, centralizados en pocos sistemas", 20.0),
                        explained("dat3", "¿Qué grado de calidad y fiabilidad tienen sus datos?", "Muchos errores/duplicados, calidad aceptable, datos limpios y confiables", 20.0),
                        explained("dat4", "¿Existen integraciones entre sus herramientas principales (ERP, CRM, email, etc.)?", "Sin integraciones, algunas integraciones manuales, integraciones automáticas", 20.0),
                        explained("dat5", "¿Tienen políticas de gobierno del dato (accesos, seguridad, actualizaciones)?", "Sin políticas, normas básicas, políticas formales y aplicadas", 20.0),
                    ],
                ),
                block(
                    BlockKind::Cultura,
                    "3. Cultura y Personas",
                    "Evaluamos la preparación del equipo humano para la transformación digital e IA",
                    vec![
                        explained("cul1", "¿Qué nivel de formación digital tienen los empleados de la empresa?", "Nivel básico, nivel intermedio, nivel avanzado/experto", 20.0),
                        explained("cul2", "¿Existe apertura cultural al cambio tecnológico o hay resistencia interna?", "Resistencia alta, aceptación moderada, entusiasmo por la innovación", 20.0),
                        explained("cul3", "¿Tienen algún responsable o equipo que lidere la digitalización?", "Sin responsable, responsable parcial, equipo/responsable dedicado", 20.0),
                        explained("cul4", "¿Se incentiva la mejora continua y la innovación entre los empleados?", "Sin incentivos, incentivos ocasionales, cultura de mejora continua", 20.0),
                        explained("cul5", "¿Los equipos están acostumbrados a trabajar con herramientas digitales colaborativas?", "Herramientas básicas, algunas herramientas colaborativas, ecosistema digital completo", 20.0),
                    ],
                ),
                block(
                    BlockKind::Tecnologia,
                    "4. Tecnología y Herramientas",
                    "Revisamos tu infraestructura tecnológica actual y capacidades de automatización",
                    vec![
                        explained("tec1", "¿Qué nivel de digitalización actual tiene la empresa (uso de ERP, CRM, plataformas de gestión)?", "Herramientas básicas, algunas plataformas específicas, ecosistema digital completo", 20.0),
                        explained("tec2", "¿Qué porcentaje de sus procesos clave está digitalizado hoy?", "Menos del 30%, 30-70%, más del 70%", 20.0),
                        explained("tec3", "¿Han utilizado ya herramientas de automatización (RPA, Zapier, Make, Power Automate)?", "Sin experiencia, pruebas básicas, uso regular de automatizaciones", 20.0),
                        explained("tec4", "¿Cuentan con sistemas en la nube o todo se gestiona en local?", "Solo local, híbrido (local + nube), principalmente en la nube", 20.0),
                        explained("tec5", "¿Se dispone de soporte técnico interno o externo para mantener las herramientas digitales?", "Sin soporte especializado, soporte básico, soporte estratégico IT", 20.0),
                    ],
                ),
                block(
                    BlockKind::Estrategia,
                    "5. Estrategia y Visión",
                    "Analizamos tu planificación estratégica y visión sobre IA y automatización",
                    vec![
                        explained("est1", "¿Tienen una estrategia digital definida en la empresa?", "Sin estrategia, estrategia básica, estrategia digital formal y documentada", 20.0),
                        explained("est2", "¿Se incluye la digitalización y la IA en la planificación estratégica de la dirección?", "No se considera, se menciona ocasionalmente, parte integral de la estrategia", 20.0),
                        explained("est3", "¿Qué esperan conseguir con la IA y las automatizaciones?", "Objetivos vagos, algunos objetivos claros, objetivos específicos y medibles", 20.0),
                        explained("est4", "¿Están dispuestos a invertir recursos económicos y humanos en proyectos de IA?", "Reticentes a invertir, inversión condicionada, compromiso claro de inversión", 20.0),
                        explained("est5", "¿Han hecho pilotos de innovación o proyectos de prueba en los últimos 2 años?", "Sin pilotos, algunas pruebas, varios pilotos exitosos", 20.0),
                    ],
                ),
                block(
                    BlockKind::Seguridad,
                    "6. Seguridad y Cumplimiento",
                    "Evaluamos tus medidas de seguridad y preparación para el cumplimiento normativo en IA",
                    vec![
                        explained("seg1", "¿Qué medidas de seguridad tienen implementadas actualmente?", "Medidas básicas, seguridad intermedia, seguridad robusta y completa", 20.0),
                        explained("seg2", "¿Existen políticas de privacidad y cumplimiento normativo (ej. GDPR)?", "Sin políticas formales, políticas básicas, cumplimiento completo y documentado", 20.0),
                        explained("seg3", "¿Hay procedimientos para gestionar incidencias de ciberseguridad?", "Sin procedimientos, procedimientos básicos, plan de respuesta completo", 20.0),
                        explained("seg4", "¿Se realizan formaciones periódicas en seguridad digital para empleados?", "Sin formación, formación ocasional, formación regular y actualizada", 20.0),
                    ],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_preset_is_consistent() {
        let questionnaire = Questionnaire::compact();
        assert_eq!(questionnaire.blocks.len(), 5);
        assert_eq!(questionnaire.question_count(), 15);
        let warnings = questionnaire.validate().expect("compact preset validates");
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn extended_preset_reports_security_block_drift() {
        let questionnaire = Questionnaire::extended();
        assert_eq!(questionnaire.blocks.len(), 6);
        assert_eq!(questionnaire.question_count(), 29);

        let warnings = questionnaire.validate().expect("extended preset validates");
        assert!(warnings.contains(&SchemaWarning::BlockMaxMismatch {
            block: BlockKind::Seguridad,
            declared: 100.0,
            computed: 80.0,
        }));
        assert!(warnings
            .iter()
            .any(|warning| matches!(warning, SchemaWarning::MaxTotalMismatch { declared, .. } if *declared == 600.0)));
    }

    #[test]
    fn presets_parse_from_names() {
        assert_eq!("compact".parse::<Preset>(), Ok(Preset::Compact));
        assert_eq!(" Extended ".parse::<Preset>(), Ok(Preset::Extended));
        assert!("legacy".parse::<Preset>().is_err());
    }

    #[test]
    fn each_preset_builds_a_profile() {
        for preset in [Preset::Compact, Preset::Extended] {
            let profile = preset.profile().expect("preset profile builds");
            assert_eq!(profile.questionnaire().name, preset.label());
        }
    }
}
