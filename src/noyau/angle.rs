// src/noyau/angle.rs
//
// Unités d’angle + angles rapides (raccourcis de saisie)
// -----------------------------------------------------
// Degrés ou radians, rien d’autre.

use std::f64::consts::PI;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unite {
    #[default]
    Degres,
    Radians,
}

impl Unite {
    /// θ dans cette unité -> θ en radians.
    pub fn en_radians(self, theta: f64) -> f64 {
        match self {
            Unite::Degres => theta * PI / 180.0,
            Unite::Radians => theta,
        }
    }

    /// Nom complet ("degrees" / "radians"), pour le libellé de saisie.
    pub fn nom(self) -> &'static str {
        match self {
            Unite::Degres => "degrees",
            Unite::Radians => "radians",
        }
    }

    /// Suffixe collé à la valeur : "45°", "1.5 rad".
    pub fn suffixe(self) -> &'static str {
        match self {
            Unite::Degres => "°",
            Unite::Radians => " rad",
        }
    }

    /// Exemple de saisie affiché dans le champ vide.
    pub fn exemple(self) -> &'static str {
        match self {
            Unite::Degres => "e.g., 45",
            Unite::Radians => "e.g., 1.5708",
        }
    }

    /// Angles rapides dans cette unité (même ordre pour les deux unités).
    pub fn angles_rapides(self) -> impl Iterator<Item = AngleRapide> {
        ANGLES_RAPIDES_DEGRES.iter().map(move |&deg| AngleRapide {
            valeur: match self {
                Unite::Degres => deg,
                Unite::Radians => deg_en_fraction_pi(deg),
            },
            unite: self,
        })
    }
}

impl fmt::Display for Unite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

/// Angles usuels (degrés) : 0, 30, 45, 60, 90, 120, 135, 150, 180, 270, 360.
pub static ANGLES_RAPIDES_DEGRES: [f64; 11] = [
    0.0, 30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 180.0, 270.0, 360.0,
];

/// Équivalent radian écrit en fraction de π (π/6, 3π/4, …) plutôt que deg·π/180,
/// pour retomber exactement sur les valeurs usuelles.
fn deg_en_fraction_pi(deg: f64) -> f64 {
    match deg as u32 {
        0 => 0.0,
        30 => PI / 6.0,
        45 => PI / 4.0,
        60 => PI / 3.0,
        90 => PI / 2.0,
        120 => 2.0 * PI / 3.0,
        135 => 3.0 * PI / 4.0,
        150 => 5.0 * PI / 6.0,
        180 => PI,
        270 => 3.0 * PI / 2.0,
        360 => 2.0 * PI,
        _ => deg * PI / 180.0,
    }
}

/// Un raccourci de saisie : valeur dans son unité.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleRapide {
    pub valeur: f64,
    pub unite: Unite,
}

impl AngleRapide {
    /// Libellé du bouton : "30°" en degrés, 3 décimales en radians ("0" pour zéro).
    pub fn libelle(&self) -> String {
        match self.unite {
            Unite::Degres => format!("{}°", self.valeur),
            Unite::Radians if self.valeur == 0.0 => "0".to_string(),
            Unite::Radians => format!("{:.3}", self.valeur),
        }
    }

    /// Texte déposé dans le champ (forme décimale la plus courte, relisible à l’identique).
    pub fn texte_saisie(&self) -> String {
        format!("{}", self.valeur)
    }
}
