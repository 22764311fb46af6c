use super::domain::CompanySize;

/// One-line description of the organization type for the report header.
pub fn organization_context(size: CompanySize) -> &'static str {
    match size {
        CompanySize::Solo => "Emprendedor individual o freelancer",
        CompanySize::Micro => "Microempresa o startup temprana",
        CompanySize::Small => "Pequeña empresa en crecimiento",
        CompanySize::Medium => "Empresa mediana establecida",
        CompanySize::Large => "Empresa mediana-grande con estructura organizacional",
        CompanySize::Enterprise => "Gran empresa con operaciones complejas",
    }
}

/// Leading insight framing the diagnosis for the organization size.
pub fn size_insight(size: CompanySize) -> &'static str {
    match size {
        CompanySize::Solo => "Como emprendedor individual, tu enfoque debe ser maximizar la eficiencia personal y automatizar tareas administrativas.",
        CompanySize::Micro => "En esta fase de microempresa, es crucial establecer procesos escalables y una base tecnológica sólida.",
        CompanySize::Small => "Tu empresa está en el momento ideal para implementar sistemas integrados y formar al equipo en competencias digitales.",
        CompanySize::Medium => "Con esta estructura, puedes abordar iniciativas de IA más ambiciosas y crear un centro de excelencia digital.",
        CompanySize::Large => "Tu organización tiene el tamaño perfecto para liderar la transformación digital en tu sector.",
        CompanySize::Enterprise => "Como gran empresa, tienes la oportunidad de ser pionero en IA avanzada y establecer estándares industriales.",
    }
}

/// First priority action for organizations that are not yet mature.
pub fn automation_starter(size: CompanySize) -> &'static str {
    match size {
        CompanySize::Solo => "Implementar un chatbot básico para tu web o WhatsApp (ej: Tidio, ManyChat) para responder FAQs y captar leads automáticamente",
        CompanySize::Micro => "Automatizar el flujo de nuevos clientes: chatbot de calificación → email automático → programación de citas",
        CompanySize::Small => "Crear 3 automatizaciones clave: chatbot para soporte, email marketing por segmentos, y recordatorios automáticos de servicios",
        CompanySize::Medium => "Implementar un ecosistema de automatización: chatbot multicanal, CRM automático, y flujos de nurturing personalizados",
        CompanySize::Large => "Desarrollar automatizaciones avanzadas: chatbots inteligentes con IA, scoring automático de leads, y workflows complejos",
        CompanySize::Enterprise => "Crear un centro de automatización: bots conversacionales avanzados, personalización automática masiva, y AI-driven customer journeys",
    }
}

/// Budget bands quoted in the investment guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetBand {
    /// Monthly spend on off-the-shelf automation.
    pub immediate: &'static str,
    /// One-off investment for advanced AI capabilities.
    pub advanced: &'static str,
}

pub fn budget_band(size: CompanySize) -> BudgetBand {
    let (immediate, advanced) = match size {
        CompanySize::Solo => ("€50-200", "€500-2000"),
        CompanySize::Micro => ("€200-500", "€2000-10000"),
        CompanySize::Small => ("€500-1500", "€10000-50000"),
        CompanySize::Medium => ("€1000-3000", "€25000-100000"),
        CompanySize::Large => ("€2000-5000", "€50000-250000"),
        CompanySize::Enterprise => ("€5000-15000", "€100000-500000"),
    };
    BudgetBand {
        immediate,
        advanced,
    }
}
