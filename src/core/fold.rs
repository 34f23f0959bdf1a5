// =============================================================================
// FOLD — Réduire une séquence de Results en un seul
// =============================================================================
//
// Les combinateurs binaires (conjunct, disjunct, and_then) deviennent des
// opérations sur des LISTES dès qu'on les replie :
//
//   conjunct_all  [Ok(32), Ok(101), Err(e), Ok(-2)]  →  Err(e)
//                 (le premier échec, ou le dernier succès si tout réussit)
//
//   disjunct_all  [Err(x), Ok(32), Ok(101)]          →  Ok(32)
//                 (le premier succès, ou le dernier échec si tout échoue)
//
//   sequence      [Ok(32), Ok(101), Ok(-2)]          →  Ok([32, 101, -2])
//                 (toutes les valeurs dans l'ordre, ou le premier échec)
//
// MATHÉMATIQUEMENT : conjunct et disjunct sont associatifs, le repli ne
// dépend donc pas du parenthésage. Ils n'ont pas d'élément neutre
// "naturel", d'où le Option<...> en retour pour une séquence vide.
//
// =============================================================================

use super::failure::Failure;
use super::result::Result;

/// Replie `conjunct` : le premier `Err`, sinon le dernier `Ok`.
/// `None` si la séquence est vide.
pub fn conjunct_all<T, E, I>(results: I) -> Option<Result<T, E>>
where
    E: Failure,
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().reduce(|acc, next| acc.conjunct(next))
}

/// Replie `disjunct` : le premier `Ok`, sinon le dernier `Err`.
/// `None` si la séquence est vide.
pub fn disjunct_all<T, E, I>(results: I) -> Option<Result<T, E>>
where
    E: Failure,
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().reduce(|acc, next| acc.disjunct(next))
}

/// Accumule les valeurs de tous les `Ok`, ou rend le premier `Err`.
///
/// Repli de `and_then` + `map` : tant que l'accumulateur est `Ok`, on lui
/// ajoute la valeur suivante ; une fois `Err`, il le reste.
pub fn sequence<T, E, I>(results: I) -> Result<Vec<T>, E>
where
    E: Failure,
    I: IntoIterator<Item = Result<T, E>>,
{
    results
        .into_iter()
        .fold(Result::Ok(Vec::new()), |acc, next| {
            acc.and_then(|mut values| {
                next.map(|value| {
                    values.push(value);
                    values
                })
            })
        })
}

/// `iter.collect::<Result<V, E>>()` : s'arrête au premier `Err`.
impl<T, E, V> FromIterator<Result<T, E>> for Result<V, E>
where
    E: Failure,
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        let mut failure = None;
        let values: V = iter
            .into_iter()
            .map_while(|result| match result {
                Result::Ok(value) => Some(value),
                Result::Err(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Result::Err(error),
            None => Result::Ok(values),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::result::{err, ok};
    use std::cell::Cell;
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    #[error("value error: {0}")]
    struct ValueError(String);

    fn failing_list() -> Vec<Result<i64, ValueError>> {
        vec![
            ok(32),
            ok(101),
            err(ValueError("Invalid value".into())),
            ok(-2),
        ]
    }

    fn passing_list() -> Vec<Result<i64, ValueError>> {
        vec![ok(32), ok(101), ok(-2)]
    }

    #[test]
    fn test_conjunct_all_first_err() {
        let r = conjunct_all(failing_list()).unwrap();
        assert_eq!(r.err(), Some(ValueError("Invalid value".into())));
    }

    #[test]
    fn test_conjunct_all_last_ok() {
        let r = conjunct_all(passing_list()).unwrap();
        assert_eq!(r.ok(), Some(-2));
    }

    #[test]
    fn test_conjunct_all_keeps_earliest_of_several_errors() {
        let list: Vec<Result<i64, ValueError>> = vec![
            ok(1),
            err(ValueError("first".into())),
            err(ValueError("second".into())),
        ];
        assert_eq!(conjunct_all(list).unwrap().err(), Some(ValueError("first".into())));
    }

    #[test]
    fn test_disjunct_all_first_ok() {
        let mut list = failing_list();
        list.insert(0, err(ValueError("leading".into())));
        let r = disjunct_all(list).unwrap();
        assert_eq!(r.ok(), Some(32));
    }

    #[test]
    fn test_disjunct_all_last_err() {
        let list: Vec<Result<i64, ValueError>> = vec![
            err(ValueError("a".into())),
            err(ValueError("b".into())),
        ];
        assert_eq!(disjunct_all(list).unwrap().err(), Some(ValueError("b".into())));
    }

    #[test]
    fn test_empty_folds() {
        let empty: Vec<Result<i64, ValueError>> = Vec::new();
        assert!(conjunct_all(empty.clone()).is_none());
        assert!(disjunct_all(empty.clone()).is_none());
        assert_eq!(sequence(empty), ok(Vec::new()));
    }

    #[test]
    fn test_sequence_all_ok() {
        assert_eq!(sequence(passing_list()), ok(vec![32, 101, -2]));
    }

    #[test]
    fn test_sequence_first_err() {
        let r = sequence(failing_list());
        assert_eq!(r.err(), Some(ValueError("Invalid value".into())));
    }

    #[test]
    fn test_collect() {
        let all: Result<Vec<i64>, ValueError> = passing_list().into_iter().collect();
        assert_eq!(all, ok(vec![32, 101, -2]));

        let failed: Result<Vec<i64>, ValueError> = failing_list().into_iter().collect();
        assert_eq!(failed.err(), Some(ValueError("Invalid value".into())));
    }

    #[test]
    fn test_collect_stops_at_first_err() {
        let pulled = Cell::new(0);
        let collected: Result<Vec<i64>, ValueError> = failing_list()
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1))
            .collect();
        assert!(collected.is_err());
        assert_eq!(pulled.get(), 3);
    }
}
