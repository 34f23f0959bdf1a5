// =============================================================================
// CORE — Le conteneur Result et son algèbre
// =============================================================================
//
// Tout est pur ici : pas d'I/O, pas d'état partagé, pas de journalisation.
// Les seuls effets possibles sont ceux des closures fournies par l'appelant.
//
// Architecture :
//   failure  → la capacité "error-like" exigée de E (+ Fault, une erreur prête)
//   result   → Result<T, E> : construction, inspection, combinateurs
//   fold     → replis sur des séquences (conjunct_all, disjunct_all, sequence)
//
// =============================================================================

pub mod failure;
pub mod result;
pub mod fold;
