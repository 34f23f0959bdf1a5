// =============================================================================
// RESULT — Le conteneur à deux variantes : Ok(valeur) ou Err(erreur)
// =============================================================================
//
// Un Result<T, E> représente l'issue d'un calcul qui peut réussir (Ok) ou
// échouer (Err). Au lieu de "lancer" une erreur, on la RETOURNE comme une
// valeur ordinaire, et on enchaîne les calculs avec des combinateurs.
//
// Le tag (Ok / Err) est fixé à la construction et ne change jamais.
// Aucune méthode ne modifie le conteneur : chaque combinateur consomme
// `self` et produit un NOUVEAU Result (ou une valeur extraite).
//
// MATHÉMATIQUEMENT : Result<_, E> est une monade.
//   - map       = le foncteur        (T → U) ⟹ (Result<T,E> → Result<U,E>)
//   - and_then  = le bind (>>=)      sur le canal succès
//   - or_else   = le bind dual       sur le canal erreur
//   - conjunct  = ET logique sur le tag, biaisé vers l'opérande droite
//   - disjunct  = OU logique sur le tag, premier succès gagnant
//
// ANALOGIE : un aiguillage ferroviaire à deux voies. Tant qu'on est sur la
// voie Ok, chaque combinateur transforme la charge ; dès qu'on bascule sur
// la voie Err, la charge traverse tout le reste sans être touchée.
//
// =============================================================================

use std::fmt;

use super::failure::{Failure, Fault};

/// L'issue d'un calcul : un succès `Ok(T)` ou un échec `Err(E)`.
///
/// `E` doit être une erreur Rust ([`Failure`]) : un `Err` peut donc
/// toujours repasser dans le canal natif via [`Result::into_std`].
#[must_use = "ce Result peut contenir une erreur qu'il faut traiter"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<T, E: Failure> {
    /// Succès. La valeur peut elle-même être "vide" (`()`, `None`...) :
    /// cela n'a rien à voir avec le tag.
    Ok(T),
    /// Échec.
    Err(E),
}

/// Construit un succès.
pub fn ok<T, E: Failure>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Construit un échec.
pub fn err<T, E: Failure>(error: E) -> Result<T, E> {
    Result::Err(error)
}

impl<T, E: Failure> Result<T, E> {
    // -------------------------------------------------------------------------
    // Inspection du tag (autoritaire)
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // -------------------------------------------------------------------------
    // Extraction optionnelle (indicative seulement)
    // -------------------------------------------------------------------------

    /// La valeur si `Ok`, `None` si `Err`.
    ///
    /// ATTENTION : un `None` ne prouve PAS que le Result est un `Err`.
    /// `ok::<Option<i32>, _>(None).ok()` vaut `Some(None)`, mais avec
    /// `.ok().flatten()` on perd l'information. Pour décider du tag,
    /// utiliser [`is_ok`](Self::is_ok) / [`is_err`](Self::is_err) ou un `match`.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// L'erreur si `Err`, `None` si `Ok`. Mêmes réserves que [`ok`](Self::ok).
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Vue empruntée, tag conservé, dans le Result natif de Rust.
    #[inline]
    pub const fn as_ref(&self) -> std::result::Result<&T, &E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    // -------------------------------------------------------------------------
    // Foncteur : transformer un canal, laisser l'autre intact
    // -------------------------------------------------------------------------

    /// `Ok(v)` ⟹ `Ok(f(v))` ; `Err(e)` traverse sans appel à `f`.
    ///
    /// `f` n'est pas protégé : s'il panique, la panique remonte telle quelle
    /// (elle n'est jamais convertie en `Err`).
    #[inline]
    #[must_use = "map produit un nouveau Result"]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Dual de [`map`](Self::map) sur le canal erreur.
    #[inline]
    #[must_use = "map_err produit un nouveau Result"]
    pub fn map_err<O, F>(self, f: F) -> Result<T, O>
    where
        O: Failure,
        F: FnOnce(E) -> O,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(f(error)),
        }
    }

    // -------------------------------------------------------------------------
    // Bind : enchaîner des calculs faillibles
    // -------------------------------------------------------------------------

    /// Bind monadique : `Ok(v)` ⟹ `f(v)` (pas ré-emballé) ;
    /// `Err(e)` traverse sans appel à `f`.
    #[inline]
    #[must_use = "and_then produit un nouveau Result"]
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Bind du canal erreur : rattrapage ou chaîne de repli.
    /// Un `Ok` traverse sans appel à `f`.
    #[inline]
    #[must_use = "or_else produit un nouveau Result"]
    pub fn or_else<O, F>(self, f: F) -> Result<T, O>
    where
        O: Failure,
        F: FnOnce(E) -> Result<T, O>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    // -------------------------------------------------------------------------
    // Biais : ET / OU sur le tag
    // -------------------------------------------------------------------------

    /// ET logique : `other` si `self` est `Ok`, sinon l'erreur de `self`.
    ///
    /// | self     | other    | résultat |
    /// |----------|----------|----------|
    /// | Ok(a)    | Ok(b)    | Ok(b)    |
    /// | Ok(a)    | Err(y)   | Err(y)   |
    /// | Err(x)   | _        | Err(x)   |
    #[doc(alias = "and")]
    #[inline]
    #[must_use = "conjunct produit un nouveau Result"]
    pub fn conjunct<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Result::Err(error),
        }
    }

    /// OU logique : `self` si `Ok`, sinon `other`.
    ///
    /// | self     | other    | résultat |
    /// |----------|----------|----------|
    /// | Ok(a)    | _        | Ok(a)    |
    /// | Err(x)   | Ok(b)    | Ok(b)    |
    /// | Err(x)   | Err(y)   | Err(y)   |
    #[doc(alias = "or")]
    #[inline]
    #[must_use = "disjunct produit un nouveau Result"]
    pub fn disjunct(self, other: Result<T, E>) -> Result<T, E> {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(_) => other,
        }
    }

    // -------------------------------------------------------------------------
    // Extraction vérifiée par le tag
    // -------------------------------------------------------------------------

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Replie le canal succès : `f(v)` si `Ok`, `default` sinon.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// La valeur d'un `Ok`. Panique sur un `Err`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => tag_mismatch("unwrap appelé sur un Err", &error.describe()),
        }
    }

    /// Comme [`unwrap`](Self::unwrap), avec un message choisi par l'appelant.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => tag_mismatch(message, &error.describe()),
        }
    }

    /// L'erreur d'un `Err`. Panique sur un `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => {
                tag_mismatch("unwrap_err appelé sur un Ok", &format!("{:?}", value))
            }
            Self::Err(error) => error,
        }
    }

    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => tag_mismatch(message, &format!("{:?}", value)),
            Self::Err(error) => error,
        }
    }

    // -------------------------------------------------------------------------
    // Passerelle vers le canal d'échec natif
    // -------------------------------------------------------------------------

    /// Retour au `std::result::Result`, pour propager l'erreur avec `?`.
    ///
    /// ```
    /// use resultat::{err, Fault};
    ///
    /// fn run() -> Result<i32, Box<dyn std::error::Error>> {
    ///     let r: resultat::Result<i32, Fault> = err(Fault::new("boom"));
    ///     let v = r.into_std()?;
    ///     Ok(v)
    /// }
    ///
    /// assert_eq!(run().unwrap_err().to_string(), "boom");
    /// ```
    #[inline]
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// `Some(v)` ⟹ `Ok(v)` ; `None` ⟹ `Err(error)`.
    #[inline]
    pub fn from_option(opt: Option<T>, error: E) -> Self {
        match opt {
            Some(value) => Self::Ok(value),
            None => Self::Err(error),
        }
    }
}

impl<T> Result<T, Fault> {
    /// Raccourci de [`from_option`](Self::from_option) avec un simple message.
    pub fn require(opt: Option<T>, message: &str) -> Self {
        Self::from_option(opt, Fault::new(message))
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn tag_mismatch(message: &str, payload: &str) -> ! {
    panic!("{}: {}", message, payload)
}

impl<T, E: Failure> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(native: std::result::Result<T, E>) -> Self {
        match native {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E: Failure> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

impl<T: fmt::Display, E: Failure> fmt::Display for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Result::Ok(value) => write!(f, "Ok({})", value),
            Result::Err(error) => write!(f, "Err({})", error),
        }
    }
}
