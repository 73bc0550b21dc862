//! Noyau trigonométrique (flottant, sans état)
//!
//! Organisation interne :
//! - erreur.rs   : EntreeInvalide (seule erreur du domaine)
//! - lecture.rs  : texte brut -> f64 fini
//! - angle.rs    : unités (degrés/radians) + angles rapides
//! - trig.rs     : fonctions sin/cos/tan/sec/cot + modes
//! - format.rs   : affichage 6 décimales / "0" / "undefined"
//! - eval.rs     : pipeline complet

pub mod angle;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod lecture;
pub mod trig;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use angle::{AngleRapide, Unite};
pub use eval::{evaluer_angle, evaluer_texte};
pub use format::format_resultat;
pub use trig::{FonctionTrig, Mode, Resultats};
