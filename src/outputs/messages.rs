use phf::phf_map;

/// Message bundle for one language: key -> printf-style template.
pub type Bundle = phf::Map<&'static str, &'static str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Welcome,
    Help,
    Goodbye,
    Fallback,
    Error,
    Hello,
    Reflector,
    ConvertPrefix,
    Convert,
    UnsupportedConversion,
    InvalidQuantity,
}

impl MessageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::Welcome => "WELCOME_MESSAGE",
            MessageKey::Help => "HELP_MESSAGE",
            MessageKey::Goodbye => "GOODBYE_MESSAGE",
            MessageKey::Fallback => "FALLBACK_MESSAGE",
            MessageKey::Error => "ERROR_MESSAGE",
            MessageKey::Hello => "HELLO_MESSAGE",
            MessageKey::Reflector => "REFLECTOR_MESSAGE",
            MessageKey::ConvertPrefix => "CONVERT_PREFIX",
            MessageKey::Convert => "CONVERT_MESSAGE",
            MessageKey::UnsupportedConversion => "UNSUPPORTED_CONVERSION",
            MessageKey::InvalidQuantity => "INVALID_QUANTITY",
        }
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Used when even the error message cannot be looked up.
pub const BASELINE_APOLOGY: &str = "Sorry, there was a problem. Please try again.";

pub static EN: Bundle = phf_map! {
    "WELCOME_MESSAGE" => "Welcome to converter. What would you like to convert?",
    "HELP_MESSAGE" => "You can convert any measurement you have, for example from inches to yards or vice versa. Try it",
    "GOODBYE_MESSAGE" => "Goodbye!",
    "FALLBACK_MESSAGE" => "Sorry, I don't know about that. Please try again.",
    "ERROR_MESSAGE" => "Sorry, there was a problem. Please try again.",
    "HELLO_MESSAGE" => "Hello World!",
    "REFLECTOR_MESSAGE" => "You just triggered %s.",
    "CONVERT_PREFIX" => "Esaú say that",
    "CONVERT_MESSAGE" => "%.2f %s is %.2f %s.",
    "UNSUPPORTED_CONVERSION" => "Sorry, I can't convert from %s to %s.",
    "INVALID_QUANTITY" => "Sorry, I couldn't understand the quantity %s.",
};

pub static ES: Bundle = phf_map! {
    "WELCOME_MESSAGE" => "Bienvenido al convertidor de Esaú. ¿Qué te gustaría convertir?",
    "HELP_MESSAGE" => "puedes convertir alguna medida que tengas de por ejemplo de centimetros a metros o viceversa. Intentalo",
    "GOODBYE_MESSAGE" => "¡Adiós!",
    "FALLBACK_MESSAGE" => "Lo siento, no sé sobre eso. Por favor intenta de nuevo.",
    "ERROR_MESSAGE" => "Lo siento, tuve problemas para hacer lo que pediste. Por favor intenta nuevamente.",
    "HELLO_MESSAGE" => "¡Hola Mundo!",
    "REFLECTOR_MESSAGE" => "Acabas de activar %s.",
    "CONVERT_PREFIX" => "Esaú dice que",
    "CONVERT_MESSAGE" => "%.2f %s son %.2f %s.",
    "UNSUPPORTED_CONVERSION" => "Lo siento, no puedo convertir de %s a %s.",
    "INVALID_QUANTITY" => "Lo siento, no entendí la cantidad %s.",
};
