//! Static intent catalog.
//!
//! The catalog is built once at startup (either the compiled-in set or a
//! catalog file) and shared read-only with the engine. Its intents are always
//! checked before anything fetched from the backend.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{ThemisError, ThemisResult};
use crate::intent::{Intent, MISSING_RESPONSE_PLACEHOLDER};

/// Greeting shown by chat surfaces when a new session starts.
pub const WELCOME_MESSAGE: &str =
    "¡Hola! Soy Themis, tu asistente de inteligencia artificial. ¿En qué puedo ayudarte hoy?";

/// Immutable, ordered list of static intents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentCatalog {
    intents: Vec<Intent>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    intents: Vec<Intent>,
}

impl IntentCatalog {
    /// Build a catalog from intents. Ids are stripped: static intents are
    /// never reported as used.
    pub fn new(intents: Vec<Intent>) -> Self {
        let intents = intents
            .into_iter()
            .map(|mut intent| {
                intent.id = None;
                intent.ensure_responses(MISSING_RESPONSE_PLACEHOLDER)
            })
            .collect();
        Self { intents }
    }

    /// A catalog with no intents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog from a file (TOML, JSON, or YAML).
    ///
    /// The file holds a top-level `intents` list; keywords are normalized on load.
    pub fn from_file(path: impl AsRef<Path>) -> ThemisResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str());

        let file: CatalogFile = match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| ThemisError::Configuration(e.to_string()))?
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| ThemisError::Configuration(e.to_string()))?,
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| ThemisError::Configuration(e.to_string()))?,
            _ => {
                return Err(ThemisError::Configuration(
                    "Unsupported catalog file format. Use .toml, .json, or .yaml".to_string(),
                ))
            }
        };

        let catalog = Self::new(file.intents.into_iter().map(Intent::normalized).collect());
        info!(path = %path.display(), intents = catalog.len(), "Loaded intent catalog");
        Ok(catalog)
    }

    /// Intents in match order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Look up an intent by tag.
    pub fn get(&self, tag: &str) -> Option<&Intent> {
        self.intents.iter().find(|intent| intent.tag == tag)
    }

    /// Number of intents.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Whether the catalog has no intents.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// The compiled-in catalog of conversational intents.
    pub fn builtin() -> Self {
        Self::new(vec![
            Intent::new(
                "Saludo",
                [
                    "hola",
                    "saludos",
                    "que tal",
                    "buenos dias",
                    "buenas tardes",
                    "buenas noches",
                    "hey",
                ],
                [
                    "¡Hola! Soy Themis, tu asistente virtual. ¿En qué puedo ayudarte con tus trámites hoy?",
                ],
            ),
            Intent::new(
                "Despedida",
                ["adios", "chao", "hasta luego", "nos vemos", "bye", "finalizar"],
                [
                    "¡Hasta luego! Quedo a tu disposición si necesitas algo más. ¡Que tengas un excelente día!",
                ],
            ),
            Intent::new(
                "Agradecimiento",
                [
                    "gracias",
                    "muchas gracias",
                    "agradecido",
                    "gracias por la ayuda",
                    "perfecto gracias",
                ],
                ["¡De nada! Es un placer ayudarte. ¿Hay algo más en lo que pueda asistirle?"],
            ),
            Intent::new(
                "Estado",
                ["como estas", "como te va", "todo bien", "que tal todo"],
                [
                    "¡Todo muy bien por aquí! Trabajando para darte la mejor información. ¿Y tú, en qué necesitas ayuda?",
                ],
            ),
            Intent::new(
                "Identidad",
                ["quien eres", "que eres", "tu nombre", "presentate"],
                [
                    "Soy Themis, el asistente inteligente de esta institución. Mi objetivo es facilitarte información sobre trámites y servicios.",
                ],
            ),
            Intent::new(
                "Horario_Bot",
                ["estas disponible", "estas ahi", "hasta que hora atiendes", "estas activo"],
                [
                    "¡Sí! Estoy disponible las 24 horas del día para resolver tus dudas. ¿En qué puedo apoyarte en este momento?",
                ],
            ),
            Intent::new(
                "Confirmacion",
                ["entiendo", "comprendo", "ok", "vale", "entendido", "listo"],
                [
                    "Excelente. Me alegra que la información te sea útil. ¿Hay algún otro trámite o duda que quieras consultar?",
                ],
            ),
            Intent::new(
                "Ayuda_General",
                ["ayuda", "necesito ayuda", "auxilio", "ayudame", "no se que hacer"],
                [
                    "Estoy aquí para guiarte. Puedes preguntarme sobre inscripciones, requisitos, trámites legales o documentos institucionales. ¿Por dónde te gustaría empezar?",
                ],
            ),
            Intent::new(
                "Elogio",
                [
                    "eres genial",
                    "buen bot",
                    "buen trabajo",
                    "me gusta como atiendes",
                    "inteligente",
                ],
                [
                    "¡Muchas gracias por tus palabras! Mi objetivo es brindarte la mejor atención posible. ¿En qué más puedo servirte?",
                ],
            ),
            Intent::new(
                "Filtro_Respeto",
                ["tonto", "idiota", "estupido", "insulto", "groseria"],
                [
                    "Mantengamos un lenguaje respetuoso para poder brindarte la mejor asistencia posible. ¿Tienes alguna duda institucional en la que pueda ayudarte?",
                ],
            ),
            Intent::new(
                "Buenos_Deseos",
                [
                    "que tengas buen dia",
                    "feliz dia",
                    "feliz tarde",
                    "feliz noche",
                    "igualmente",
                    "suerte",
                ],
                [
                    "¡Muchas gracias! Igualmente para ti. Estaré aquí si surge cualquier otra duda institucional.",
                ],
            ),
            Intent::new(
                "Capacidades",
                [
                    "que puedes hacer",
                    "en que me ayudas",
                    "cuales son tus funciones",
                    "que opciones hay",
                ],
                [
                    "Puedo facilitarte información sobre requisitos, guiarte en trámites de inscripción, explicarte servicios institucionales y entregarte documentos descargables. ¿Qué necesitas consultar?",
                ],
            ),
            Intent::new(
                "Disculpas",
                ["perdon", "disculpa", "me equivoque", "lo siento", "error mio"],
                ["¡No te preocupes! No hay ningún problema. ¿En qué podemos retomar tu consulta?"],
            ),
            Intent::new(
                "Humano_o_Bot",
                ["eres una persona", "eres humano", "eres real", "hablo con alguien"],
                [
                    "Soy Themis, un asistente de inteligencia artificial diseñado para atenderte de forma inmediata. Si necesitas atención humana presencial, puedo indicarte los horarios de oficina.",
                ],
            ),
            Intent::new(
                "Prueba",
                ["test", "probando", "hola hola", "123", "prueba"],
                [
                    "¡Prueba superada! El sistema funciona correctamente. ¿En qué puedo ayudarte con tus gestiones hoy?",
                ],
            ),
            Intent::new(
                "Atencion_Humana",
                [
                    "hablar con alguien",
                    "secretario",
                    "secretaria",
                    "persona real",
                    "atencion humana",
                    "oficina",
                    "hablar con un humano",
                    "autoridad",
                    "decanato",
                ],
                [
                    "Para una atención personalizada o trámites que requieran la intervención de un funcionario, debe dirigirse presencialmente a las oficinas de la Facultad de Derecho. Allí, el personal de secretaría podrá asistirle formalmente en su gestión. ¿Desea que le ayude con alguna otra información general?",
                ],
            ),
        ])
    }
}
