//! Noyau — évaluation (pipeline complet)
//!
//! texte -> lecture (f64 fini) -> radians -> triplet du mode
//!
//! Pur : aucun état retenu entre deux appels.

use super::angle::Unite;
use super::erreur::EntreeInvalide;
use super::lecture::lire_angle;
use super::trig::{Mode, Resultats};

/// θ déjà lu -> triplet du mode. Ne peut pas échouer (le non-fini passe tel quel).
pub fn evaluer_angle(theta: f64, unite: Unite, mode: Mode) -> Resultats {
    Resultats::calculer(mode, unite.en_radians(theta))
}

/// API publique : évalue le texte saisi et retourne:
/// - θ lu (pour l’écho dans la notification)
/// - le triplet de résultats
pub fn evaluer_texte(
    texte: &str,
    unite: Unite,
    mode: Mode,
) -> Result<(f64, Resultats), EntreeInvalide> {
    let theta = lire_angle(texte)?;
    Ok((theta, evaluer_angle(theta, unite, mode)))
}
