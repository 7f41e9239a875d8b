//! The 41-question SST self-assessment catalog.

use sst_core::Severity;

use super::QuestionDef;

/// Catalog entries in question order.
pub(crate) const QUESTIONS: &[QuestionDef] = &[
    QuestionDef {
        number: 1,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Cuenta su organización con una Política de Seguridad y Salud en el Trabajo formalizada que respalde su cumplimiento ante fiscalizaciones?",
        definition: "La Política de Seguridad y Salud es un documento firmado por la gerencia que establece el compromiso de la empresa con la protección de todos los trabajadores.",
        legal_risk: "Su ausencia es una infracción grave que impide demostrar compromiso preventivo ante SUNAFIL.",
    },
    QuestionDef {
        number: 2,
        severity: Severity::Minor,
        exempt_for_mype: false,
        text: "¿Puede evidenciar que todos sus trabajadores conocen y han recibido la Política de Seguridad y Salud?",
        definition: "La política debe ser comunicada a todos los trabajadores mediante charlas, correos, carteles o firma de recepción.",
        legal_risk: "Sin evidencia de difusión, la empresa no puede demostrar que los trabajadores conocían las reglas de seguridad.",
    },
    QuestionDef {
        number: 3,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿La gerencia participa activamente en la gestión de seguridad y salud con evidencia documentada?",
        definition: "El liderazgo se demuestra cuando la gerencia participa en reuniones de seguridad, asigna recursos y promueve una cultura preventiva.",
        legal_risk: "La falta de evidencia de liderazgo debilita la defensa legal en caso de accidentes.",
    },
    QuestionDef {
        number: 4,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Su empresa cuenta con un Reglamento Interno de Seguridad y Salud en el Trabajo aprobado que la proteja legalmente?",
        definition: "El Reglamento Interno de Seguridad y Salud en el Trabajo establece las normas, prohibiciones y sanciones propias de su empresa.",
        legal_risk: "Su ausencia es una infracción grave sancionable con multas de hasta 10 UIT. Además, invalida cualquier sanción disciplinaria que intente aplicar ante faltas del trabajador.",
    },
    QuestionDef {
        number: 5,
        severity: Severity::Minor,
        exempt_for_mype: false,
        text: "¿Puede acreditar la entrega formal del Reglamento Interno de Seguridad a cada trabajador con cargo firmado?",
        definition: "Cada trabajador debe recibir una copia física o digital del Reglamento y firmar un cargo de recepción.",
        legal_risk: "Sin cargo firmado, el trabajador puede alegar desconocimiento de las normas y la empresa pierde capacidad sancionadora.",
    },
    QuestionDef {
        number: 6,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Su organización tiene constituido el Comité o Supervisor de Seguridad y Salud exigido por ley?",
        definition: "El Comité de Seguridad es el órgano paritario obligatorio para empresas con 20+ trabajadores; las menores requieren un Supervisor de Seguridad.",
        legal_risk: "No constituirlo es una infracción muy grave con multas superiores a 25 UIT y puede derivar en responsabilidad penal del empleador ante accidentes fatales.",
    },
    QuestionDef {
        number: 7,
        severity: Severity::Minor,
        exempt_for_mype: false,
        text: "¿Dispone de la documentación completa del proceso de elección del Comité o designación del Supervisor de Seguridad?",
        definition: "El proceso de elección debe incluir convocatoria, actas de votación y acta de instalación debidamente firmadas.",
        legal_risk: "Sin documentación del proceso electoral, SUNAFIL puede declarar nulo al Comité o Supervisor.",
    },
    QuestionDef {
        number: 8,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Los miembros del Comité o el Supervisor de Seguridad cuentan con la formación acreditada que exige la norma?",
        definition: "Los miembros del Comité o el Supervisor deben recibir capacitación en temas de seguridad para ejercer correctamente sus funciones.",
        legal_risk: "Representantes sin formación no pueden cumplir su rol, exponiendo a la empresa a sanciones por gestión deficiente.",
    },
    QuestionDef {
        number: 9,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿El Comité o Supervisor de Seguridad mantiene sesiones periódicas con actas que demuestren su funcionamiento?",
        definition: "El Comité o Supervisor debe reunirse mínimo una vez al mes y registrar acuerdos en un Libro de Actas legalizado.",
        legal_risk: "Sin actas, no hay evidencia de funcionamiento del órgano de vigilancia, lo cual es infracción grave.",
    },
    QuestionDef {
        number: 10,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Su empresa realizó el diagnóstico inicial del Sistema de Gestión de Seguridad que establece la Ley 29783?",
        definition: "El estudio de línea base es un diagnóstico inicial que evalúa el estado actual del sistema de gestión de seguridad en la empresa.",
        legal_risk: "Su omisión impide demostrar una gestión planificada y sistemática.",
    },
    QuestionDef {
        number: 11,
        severity: Severity::VeryGrave,
        exempt_for_mype: false,
        text: "¿Cuenta con la Matriz de Identificación de Peligros, Evaluación de Riesgos y Controles para cada puesto de trabajo?",
        definition: "La Matriz de Identificación de Peligros, Evaluación de Riesgos y Controles identifica los peligros y establece los controles para cada puesto.",
        legal_risk: "Su inexistencia es infracción muy grave. En caso de accidente, la empresa pierde toda defensa legal al no poder demostrar gestión preventiva.",
    },
    QuestionDef {
        number: 12,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Su Matriz de Peligros y Riesgos está vigente y actualizada según los plazos normativos?",
        definition: "La Matriz de Peligros y Riesgos debe actualizarse anualmente o cuando haya cambios en procesos, equipos, incidentes o nueva legislación.",
        legal_risk: "Una matriz desactualizada equivale a no tenerla, exponiendo a la empresa a multas muy graves.",
    },
    QuestionDef {
        number: 13,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Puede demostrar la participación documentada de los trabajadores en la identificación de peligros y riesgos?",
        definition: "Los trabajadores deben participar activamente en la identificación de peligros de sus propios puestos de trabajo.",
        legal_risk: "Sin evidencia de participación, SUNAFIL puede cuestionar la validez de toda la evaluación de riesgos.",
    },
    QuestionDef {
        number: 14,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Su instalación exhibe el Mapa de Riesgos en un lugar visible como exige la normativa?",
        definition: "El Mapa de Riesgos es un plano del lugar de trabajo donde se señalan visualmente los peligros identificados.",
        legal_risk: "Su inexistencia o no exhibición es infracción grave sancionable.",
    },
    QuestionDef {
        number: 15,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Su Plan Anual de Seguridad y Salud cuenta con presupuesto asignado y aprobado por la dirección?",
        definition: "El Plan Anual de Seguridad incluye objetivos, metas, actividades y un presupuesto asignado para la gestión de seguridad.",
        legal_risk: "Sin presupuesto asignado, no hay compromiso demostrable de la empresa con la prevención.",
    },
    QuestionDef {
        number: 16,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Dispone de un Programa de Capacitaciones planificado que garantice las competencias en seguridad y salud?",
        definition: "El Programa de Capacitaciones debe planificar todas las formaciones en seguridad que recibirán los trabajadores durante el año.",
        legal_risk: "Sin programa, las capacitaciones se consideran improvisadas y no sistemáticas.",
    },
    QuestionDef {
        number: 17,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Puede acreditar el cumplimiento de las 4 capacitaciones mínimas anuales exigidas por ley?",
        definition: "La ley exige mínimo 4 capacitaciones anuales en seguridad, incluyendo temas como primeros auxilios, uso de extintores y evacuación.",
        legal_risk: "No cumplir con las 4 capacitaciones es infracción muy grave con multas de hasta 25 UIT.",
    },
    QuestionDef {
        number: 18,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Todo trabajador nuevo recibe y firma la inducción de seguridad antes de iniciar labores?",
        definition: "Todo trabajador nuevo debe recibir una inducción específica de seguridad antes de iniciar sus labores.",
        legal_risk: "Si un trabajador sin inducción sufre un accidente, la responsabilidad del empleador es agravada.",
    },
    QuestionDef {
        number: 19,
        severity: Severity::Minor,
        exempt_for_mype: false,
        text: "¿Las capacitaciones cuentan con registros que demuestren su ejecución y asistencia?",
        definition: "Las capacitaciones deben registrarse con listas de asistencia, temario desarrollado y evaluaciones si aplica.",
        legal_risk: "Sin registros, las capacitaciones se consideran no realizadas ante una fiscalización.",
    },
    QuestionDef {
        number: 20,
        severity: Severity::VeryGrave,
        exempt_for_mype: false,
        text: "¿Su empresa implementa controles de riesgo siguiendo la jerarquía establecida en la norma?",
        definition: "La jerarquía de controles va desde eliminar el peligro hasta usar equipos de protección: Eliminación → Sustitución → Controles de ingeniería → Controles administrativos → Equipos de Protección.",
        legal_risk: "No aplicar esta jerarquía es infracción muy grave.",
    },
    QuestionDef {
        number: 21,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Garantiza la provisión de Equipos de Protección Personal certificados y adecuados a cada riesgo identificado?",
        definition: "Los Equipos de Protección Personal protegen al trabajador de riesgos residuales que no pudieron eliminarse por otros medios.",
        legal_risk: "No proveerlos es infracción muy grave. En caso de accidente sin protección, el empleador asume responsabilidad civil total y posible imputación penal.",
    },
    QuestionDef {
        number: 22,
        severity: Severity::Minor,
        exempt_for_mype: false,
        text: "¿Cuenta con registros firmados de entrega de Equipos de Protección que acrediten su asignación?",
        definition: "Debe existir un registro firmado por cada trabajador al recibir sus equipos de protección, indicando tipo, cantidad y fecha.",
        legal_risk: "Sin registro, no hay prueba de que la empresa cumplió con su obligación de entrega.",
    },
    QuestionDef {
        number: 23,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Los trabajadores fueron instruidos en el uso, cuidado y limitaciones de sus Equipos de Protección?",
        definition: "Los trabajadores deben ser capacitados en el uso, cuidado y mantenimiento correcto de sus equipos de protección.",
        legal_risk: "Un accidente con equipos mal usados sin capacitación previa responsabiliza al empleador.",
    },
    QuestionDef {
        number: 24,
        severity: Severity::VeryGrave,
        exempt_for_mype: false,
        text: "¿Las actividades de alto riesgo cuentan con Procedimientos Escritos de Trabajo Seguro?",
        definition: "Los Procedimientos Escritos de Trabajo Seguro describen paso a paso cómo realizar tareas de alto riesgo de forma segura.",
        legal_risk: "Su ausencia en actividades de alto riesgo es infracción muy grave. La empresa no puede demostrar que el trabajador conocía el método seguro.",
    },
    QuestionDef {
        number: 25,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Su Plan de Emergencias está formalizado y difundido para responder ante contingencias?",
        definition: "El Plan de Emergencias establece los procedimientos a seguir ante sismos, incendios, derrames u otras emergencias.",
        legal_risk: "Su inexistencia es infracción muy grave. Si ocurre una emergencia sin plan, la responsabilidad del empleador es agravada.",
    },
    QuestionDef {
        number: 26,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Las brigadas de emergencia están constituidas, entrenadas y equipadas?",
        definition: "Las brigadas de emergencia (evacuación, primeros auxilios, contra incendios) deben estar conformadas y entrenadas.",
        legal_risk: "Brigadas sin conformar o sin entrenamiento evidencian negligencia en la preparación ante emergencias.",
    },
    QuestionDef {
        number: 27,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Puede evidenciar la ejecución de simulacros con la frecuencia que exige la norma?",
        definition: "Los simulacros deben realizarse mínimo 2 veces al año para evaluar y mejorar la respuesta ante emergencias.",
        legal_risk: "Sin simulacros, no hay evidencia de preparación del personal ante contingencias.",
    },
    QuestionDef {
        number: 28,
        severity: Severity::VeryGrave,
        exempt_for_mype: false,
        text: "¿Sus trabajadores cuentan con Exámenes Médicos Ocupacionales vigentes según protocolo?",
        definition: "Los Exámenes Médicos Ocupacionales (ingreso, periódico y retiro) evalúan la aptitud del trabajador y detectan enfermedades ocupacionales.",
        legal_risk: "Su omisión es infracción muy grave. Sin ellos, la empresa no puede demostrar que el daño a la salud no fue causado por el trabajo.",
    },
    QuestionDef {
        number: 29,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Realiza monitoreos de agentes físicos, químicos y biológicos en el ambiente laboral?",
        definition: "El monitoreo mide la exposición a agentes físicos (ruido, iluminación), químicos (gases, polvos) y otros en el ambiente laboral.",
        legal_risk: "Sin monitoreos, la empresa no puede demostrar condiciones de trabajo seguras.",
    },
    QuestionDef {
        number: 30,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Gestiona y verifica el cumplimiento de seguridad de sus contratistas y subcontratistas?",
        definition: "Las empresas contratistas también deben cumplir con la normativa de seguridad y la empresa principal debe verificarlo.",
        legal_risk: "El empleador principal es solidariamente responsable por accidentes de personal de contratistas.",
    },
    QuestionDef {
        number: 31,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Efectúa medición y seguimiento documentado de los objetivos de seguridad y salud?",
        definition: "Se debe medir y revisar periódicamente el avance de los objetivos establecidos en el Plan Anual de Seguridad.",
        legal_risk: "Sin seguimiento, el plan es letra muerta y la empresa no demuestra mejora continua.",
    },
    QuestionDef {
        number: 32,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Cuenta con un procedimiento formal para investigar accidentes e implementar acciones correctivas?",
        definition: "Debe existir un procedimiento claro para investigar accidentes e incidentes, identificar causas y prevenir repeticiones.",
        legal_risk: "Sin investigación formal, la empresa no puede demostrar que tomó medidas correctivas.",
    },
    QuestionDef {
        number: 33,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Ha ejecutado la auditoría del Sistema de Gestión de Seguridad con la periodicidad que establece la ley?",
        definition: "La auditoría del Sistema de Gestión es obligatoria cada 2 años para empresas de sectores de alto riesgo.",
        legal_risk: "No realizarla es infracción grave. Además, la empresa pierde oportunidad de demostrar mejora continua.",
    },
    QuestionDef {
        number: 34,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Mantiene actualizado el Registro obligatorio de accidentes e incidentes laborales?",
        definition: "Registro obligatorio de todos los accidentes de trabajo ocurridos, incluyendo investigación y medidas correctivas.",
        legal_risk: "No llevar este registro es infracción muy grave. Sin él, no hay trazabilidad de la gestión de accidentes.",
    },
    QuestionDef {
        number: 35,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Conserva el Registro de vigilancia de la salud de sus trabajadores?",
        definition: "Registro de los exámenes médicos realizados a los trabajadores con sus resultados y recomendaciones.",
        legal_risk: "Su ausencia impide demostrar vigilancia de la salud de los trabajadores.",
    },
    QuestionDef {
        number: 36,
        severity: Severity::Serious,
        exempt_for_mype: true,
        text: "¿Documenta los resultados de monitoreos ocupacionales en el registro correspondiente?",
        definition: "Registro de los monitoreos ocupacionales realizados (ruido, iluminación, agentes químicos, etc.).",
        legal_risk: "Sin este registro, no hay evidencia de las condiciones ambientales de trabajo.",
    },
    QuestionDef {
        number: 37,
        severity: Severity::Serious,
        exempt_for_mype: true,
        text: "¿Las inspecciones internas de seguridad están registradas y con acciones de seguimiento?",
        definition: "Registro de las inspecciones internas de seguridad realizadas en las instalaciones.",
        legal_risk: "Inspecciones sin registrar se consideran no realizadas ante fiscalización.",
    },
    QuestionDef {
        number: 38,
        severity: Severity::Minor,
        exempt_for_mype: true,
        text: "¿Calcula y registra los indicadores estadísticos de accidentabilidad?",
        definition: "Registro estadístico de accidentes, incidentes y enfermedades ocupacionales (índices de frecuencia, severidad, etc.).",
        legal_risk: "Los indicadores permiten demostrar gestión basada en datos y tendencias de mejora.",
    },
    QuestionDef {
        number: 39,
        severity: Severity::Minor,
        exempt_for_mype: true,
        text: "¿Controla y registra el mantenimiento de equipos de emergencia (extintores, botiquines)?",
        definition: "Registro y control de extintores, botiquines, equipos de emergencia y su mantenimiento.",
        legal_risk: "Equipos de emergencia sin registro de mantenimiento pueden fallar cuando más se necesitan.",
    },
    QuestionDef {
        number: 40,
        severity: Severity::Serious,
        exempt_for_mype: false,
        text: "¿Administra un registro centralizado de todas las capacitaciones e inducciones impartidas?",
        definition: "Registro de todas las inducciones y capacitaciones impartidas a los trabajadores.",
        legal_risk: "Es la evidencia principal del cumplimiento del deber de capacitar.",
    },
    QuestionDef {
        number: 41,
        severity: Severity::Serious,
        exempt_for_mype: true,
        text: "¿Conserva evidencia documental de las auditorías realizadas al Sistema de Gestión?",
        definition: "Registro de las auditorías internas y externas realizadas al sistema de gestión de seguridad.",
        legal_risk: "Documenta el proceso de mejora continua y cierre de brechas identificadas.",
    },
];
