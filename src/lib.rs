// =============================================================================
// RESULTAT — Un conteneur Result immuable et ses combinateurs
// =============================================================================
//
// Resultat remplace le flot de contrôle par exceptions par des VALEURS :
// un calcul rend Ok(valeur) ou Err(erreur), et l'on compose ensuite ces
// valeurs avec des combinateurs (map, and_then, conjunct, disjunct...).
//
// Architecture :
//   core/    → le conteneur pur et son algèbre (aucune I/O)
//   main.rs  → démonstration en ligne de commande
//
// Concepts fondamentaux :
//   Result<T, E> = une union étiquetée à deux variantes, Ok(T) | Err(E)
//   Failure      = la contrainte sur E : être une vraie erreur Rust
//   map/and_then = foncteur et bind sur le canal succès
//   conjunct     = ET sur le tag, disjunct = OU sur le tag
//
// =============================================================================

pub mod core;

pub use crate::core::failure::{Failure, Fault};
pub use crate::core::fold;
pub use crate::core::result::{err, ok, Result};
