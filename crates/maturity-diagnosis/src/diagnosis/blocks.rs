//! Canned remarks keyed by block and level, plus the size-aware remediation table.

use super::domain::{BlockLevel, SizeGroup};
use super::questionnaire::BlockKind;

pub fn block_insights(block: BlockKind, level: BlockLevel) -> &'static [&'static str] {
    use BlockKind::*;
    use BlockLevel::*;

    match (block, level) {
        (Procesos, Critico) => &[
            "Procesos desorganizados frenan cualquier iniciativa digital",
            "Sin procesos claros, la IA puede amplificar problemas existentes",
        ],
        (Procesos, Basico) => &[
            "Procesos básicos definidos, pero necesitan optimización",
            "Falta medición sistemática de la eficiencia",
        ],
        (Procesos, Intermedio) => &[
            "Buena base de procesos, listos para automatización selectiva",
            "KPIs implementados facilitan la mejora continua",
        ],
        (Procesos, Avanzado) => &[
            "Procesos maduros ideales para IA avanzada",
            "Cultura de optimización continua establecida",
        ],
        (Datos, Critico) => &[
            "Datos fragmentados impiden aprovecha IA efectivamente",
            "Calidad de datos insuficiente para algoritmos confiables",
        ],
        (Datos, Basico) => &[
            "Datos parcialmente organizados pero con gaps importantes",
            "Integración entre sistemas limitada",
        ],
        (Datos, Intermedio) => &[
            "Buena centralización de datos con calidad aceptable",
            "Sistemas integrados permiten análisis cruzados",
        ],
        (Datos, Avanzado) => &[
            "Infraestructura de datos lista para IA avanzada",
            "Calidad de datos excelente para machine learning",
        ],
        (Cultura, Critico) => &[
            "Resistencia al cambio dificultará adopción de IA",
            "Competencias digitales insuficientes en el equipo",
        ],
        (Cultura, Basico) => &[
            "Apertura básica al cambio pero falta liderazgo digital",
            "Algunas competencias digitales pero inconsistentes",
        ],
        (Cultura, Intermedio) => &[
            "Cultura receptiva con liderazgo digital definido",
            "Competencias digitales sólidas en roles clave",
        ],
        (Cultura, Avanzado) => &[
            "Cultura innovadora ideal para adopción de IA",
            "Equipo con competencias digitales avanzadas",
        ],
        (Tecnologia, Critico) => &[
            "Infraestructura tecnológica insuficiente para IA",
            "Dependencia de sistemas legacy problemática",
        ],
        (Tecnologia, Basico) => &[
            "Herramientas básicas pero no integradas",
            "Algunos sistemas modernos mezclados con legacy",
        ],
        (Tecnologia, Intermedio) => &[
            "Buena infraestructura con capacidad de expansión",
            "Sistemas modernos facilitan integración de IA",
        ],
        (Tecnologia, Avanzado) => &[
            "Tecnología de vanguardia lista para IA compleja",
            "Infraestructura escalable y moderna",
        ],
        (Estrategia, Critico) => &[
            "Sin estrategia digital clara ni compromiso directivo",
            "Falta visión sobre el potencial de la IA",
        ],
        (Estrategia, Basico) => &[
            "Estrategia digital básica pero sin foco en IA",
            "Compromiso directivo limitado con la innovación",
        ],
        (Estrategia, Intermedio) => &[
            "Estrategia digital sólida con primeros pasos en IA",
            "Buen compromiso directivo con la transformación",
        ],
        (Estrategia, Avanzado) => &[
            "Estrategia de IA bien definida y respaldada",
            "Liderazgo visionario en transformación digital",
        ],
        (Seguridad, Critico) => &[
            "La seguridad debe fortalecerse antes de manejar datos sensibles con IA",
        ],
        (Seguridad, Basico) => &[
            "La seguridad debe fortalecerse antes de manejar datos sensibles con IA",
        ],
        (Seguridad, Intermedio) => &[
            "Seguridad aceptable, pero la IA requiere medidas adicionales de privacidad",
        ],
        (Seguridad, Avanzado) => &[
            "Excelente postura de seguridad, preparada para cumplimiento normativo en IA",
        ],
    }
}

/// Remediation steps; only the two lowest levels carry any.
pub fn block_recommendations(
    block: BlockKind,
    level: BlockLevel,
    group: SizeGroup,
) -> &'static [&'static str] {
    use BlockKind::*;
    use BlockLevel::*;

    match (block, level, group) {
        (Procesos, Critico, SizeGroup::Small) => &[
            "Documenta tu proceso más crítico (ventas o entrega)",
            "Implementa 1-2 métricas básicas de rendimiento",
        ],
        (Procesos, Critico, SizeGroup::Large) => &[
            "Documenta tus 3-5 procesos más críticos",
            "Implementa KPIs básicos para medir eficiencia",
        ],
        (Procesos, Basico, SizeGroup::Small) => &[
            "Usa herramientas simples como Trello o Notion para mapear procesos",
            "Identifica 1-2 tareas repetitivas para automatizar",
        ],
        (Procesos, Basico, SizeGroup::Large) => &[
            "Digitaliza el mapeo de procesos con herramientas BPM",
            "Identifica tareas repetitivas candidatas a automatización",
        ],
        (Datos, Critico, _) => &[
            "Consolida datos críticos en un sistema central",
            "Limpia y normaliza la información más importante",
        ],
        (Datos, Basico, _) => &[
            "Establece integraciones entre sistemas principales",
            "Implementa políticas básicas de calidad de datos",
        ],
        (Cultura, Critico, _) => &[
            "Designa un responsable de transformación digital",
            "Inicia programa básico de formación digital",
        ],
        (Cultura, Basico, _) => &[
            "Implementa herramientas colaborativas en toda la organización",
            "Crea incentivos para la mejora continua",
        ],
        (Tecnologia, Critico, _) => &[
            "Migra sistemas críticos a la nube",
            "Establece soporte IT estratégico",
        ],
        (Tecnologia, Basico, _) => &[
            "Prueba herramientas de automatización simples",
            "Aumenta el porcentaje de procesos digitalizados",
        ],
        (Estrategia, Critico, _) => &[
            "Define una estrategia digital básica con objetivos claros",
            "Realiza un piloto de automatización pequeño",
        ],
        (Estrategia, Basico, _) => &[
            "Integra IA en la planificación estratégica formal",
            "Establece presupuesto específico para innovación digital",
        ],
        (Seguridad, Critico, _) => &[
            "Implementa medidas básicas: backups, antivirus, firewalls",
            "Forma al equipo en seguridad digital básica",
        ],
        (Seguridad, Basico, _) => &[
            "Desarrolla plan de respuesta a incidentes",
            "Asegura cumplimiento GDPR completo",
        ],
        (_, Intermedio | Avanzado, _) => &[],
    }
}
