//! The three questionnaire phases.

use super::PhaseDef;

pub(crate) const PHASES: &[PhaseDef] = &[
    PhaseDef {
        id: 1,
        name: "Cimentación de la Protección Legal",
        description: "Validando los fundamentos normativos de su Sistema de Gestión",
        questions: 1..=14,
        points: 100,
        cumulative_points: 100,
        completion_message: "¡Primera línea de defensa validada! Ha identificado brechas críticas en su estructura normativa.",
        call_to_action: "Continuar análisis de controles",
    },
    PhaseDef {
        id: 2,
        name: "Blindaje Operativo y Control de Riesgos",
        description: "Evaluando la efectividad de sus medidas preventivas",
        questions: 15..=27,
        points: 200,
        cumulative_points: 300,
        completion_message: "Controles operativos evaluados. Su mapa de vulnerabilidades toma forma.",
        call_to_action: "Finalizar auditoría de registros",
    },
    PhaseDef {
        id: 3,
        name: "Estrategia de Defensa y Mejora Continua",
        description: "Verificando su capacidad de demostrar cumplimiento",
        questions: 28..=41,
        points: 300,
        cumulative_points: 600,
        completion_message: "Auditoría completada. Su Mapa de Protección de Riesgos está listo.",
        call_to_action: "Descargar Mapa de Protección",
    },
];
