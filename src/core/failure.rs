// =============================================================================
// FAILURE — La capacité "error-like" exigée des valeurs d'erreur
// =============================================================================
//
// Un Err ne peut pas contenir n'importe quoi : sa charge doit être une
// VRAIE erreur Rust, c'est-à-dire un type qui implémente std::error::Error.
//
// Ainsi, à tout moment, on peut sortir du monde Result<T, E> de ce crate
// et revenir au canal d'échec natif de Rust (std::result::Result + `?`)
// sans aucune conversion.
//
// ANALOGIE : Failure est un "laissez-passer". Toute erreur qui l'a peut
// franchir la frontière entre les deux mondes.
//
// =============================================================================

use thiserror::Error;

/// Capacité minimale d'une valeur d'erreur : être descriptible.
///
/// Implémentée automatiquement pour toute erreur Rust (`ParseIntError`,
/// `std::io::Error`, types dérivés avec `thiserror`...).
pub trait Failure: std::error::Error {
    /// Message lisible décrivant l'échec.
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<E: std::error::Error + ?Sized> Failure for E {}

/// Une erreur "toute prête", réduite à son message.
///
/// Pratique quand on n'a pas (encore) de type d'erreur métier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct Fault {
    pub message: String,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Fault { message: message.into() }
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_describe() {
        let f = Fault::new("disque plein");
        assert_eq!(f.describe(), "disque plein");
        assert_eq!(f.to_string(), "disque plein");
    }

    #[test]
    fn test_native_errors_are_failures() {
        fn describe_any<E: Failure>(e: &E) -> String {
            e.describe()
        }

        let parse = "abc".parse::<i32>().unwrap_err();
        assert_eq!(describe_any(&parse), parse.to_string());

        let boxed: Box<dyn std::error::Error> = Box::new(Fault::new("boxed"));
        assert_eq!(boxed.describe(), "boxed");
    }
}
