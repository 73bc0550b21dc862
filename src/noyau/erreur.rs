// src/noyau/erreur.rs

use thiserror::Error;

/// Seule erreur du domaine : le texte saisi n’est pas un réel fini
/// (vide, pas un nombre, ou `inf`/`NaN`/dépassement).
///
/// Récupérée entièrement par l’écran : notification, résultat précédent conservé.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("entrée invalide: {texte:?}")]
pub struct EntreeInvalide {
    pub texte: String,
}

impl EntreeInvalide {
    pub fn new(texte: impl Into<String>) -> Self {
        Self {
            texte: texte.into(),
        }
    }
}
