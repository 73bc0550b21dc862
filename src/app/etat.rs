//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état des deux calculatrices (entrée, unité, résultats) et la page
//! courante, et offrir les actions des boutons sans logique d’affichage.
//!
//! Contrats :
//! - Un résultat vient toujours d’un seul instantané (texte + unité).
//! - Aucune action ne recalcule d’elle-même : seul `evaluer()` calcule.
//! - Entrée invalide : notification, résultat précédent conservé.
//! - Les deux écrans ne partagent rien.

use crate::noyau::format::format_angle;
use crate::noyau::{evaluer_texte, AngleRapide, Mode, Resultats, Unite};

use super::notif::{Notification, Toasts};

/// Boutons d’angles rapides affichés (sur les 11 connus).
pub const NB_ANGLES_RAPIDES_AFFICHES: usize = 8;

/// Une calculatrice (primaire ou co-fonctions).
#[derive(Clone, Debug)]
pub struct EcranCalc {
    pub mode: Mode,

    // --- entrée utilisateur ---
    entree: String,
    unite: Unite,

    // --- sortie ---
    resultats: Option<Resultats>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl EcranCalc {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            entree: String::new(),
            unite: Unite::default(),
            resultats: None,
            focus_entree: true,
        }
    }

    pub fn entree(&self) -> &str {
        &self.entree
    }

    pub fn unite(&self) -> Unite {
        self.unite
    }

    pub fn resultats(&self) -> Option<&Resultats> {
        self.resultats.as_ref()
    }

    /* ------------------------ Actions ------------------------ */

    /// Remplace le texte saisi (pas de recalcul).
    pub fn set_entree(&mut self, texte: impl Into<String>) {
        self.entree = texte.into();
    }

    /// Change d’unité (pas de recalcul, pas de conversion du texte).
    pub fn set_unite(&mut self, unite: Unite) {
        if self.unite != unite {
            log::debug!("{:?}: unité -> {unite}", self.mode);
        }
        self.unite = unite;
        self.focus_entree = true;
    }

    /// Calculate : lit le texte, calcule, et renvoie la notification à afficher.
    pub fn evaluer(&mut self) -> Notification {
        self.focus_entree = true;

        match evaluer_texte(&self.entree, self.unite, self.mode) {
            Ok((theta, resultats)) => {
                self.resultats = Some(resultats);

                let angle = format!("{}{}", format_angle(theta), self.unite.suffixe());
                log::info!("{:?}: θ = {angle} -> {resultats:?}", self.mode);

                Notification::succes(
                    "Calculation Complete",
                    format!("{} θ = {angle}", self.mode.phrase_succes()),
                )
            }
            Err(e) => {
                log::warn!("{:?}: {e}", self.mode);
                Notification::destructive(
                    "Invalid Input",
                    "Please enter a valid number for theta.",
                )
            }
        }
    }

    /// Angle rapide : écrase le texte saisi (pas d’évaluation).
    pub fn choisir_angle_rapide(&mut self, angle: AngleRapide) {
        self.entree = angle.texte_saisie();
        self.focus_entree = true;
    }

    /// Angles proposés en boutons, dans l’unité courante.
    pub fn angles_rapides_affiches(&self) -> impl Iterator<Item = AngleRapide> {
        self.unite.angles_rapides().take(NB_ANGLES_RAPIDES_AFFICHES)
    }

    /// Clear All : entrée vide + plus de résultat (l’unité reste).
    pub fn clear(&mut self) {
        log::debug!("{:?}: clear", self.mode);
        self.entree.clear();
        self.resultats = None;
        self.focus_entree = true;
    }
}

/* ------------------------ Navigation ------------------------ */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Primaire,
    CoFonctions,
}

impl Page {
    /// Route -> page ("/", "#/cofunctions", …). Inconnue => page primaire.
    pub fn depuis_route(route: &str) -> Self {
        let r = route.trim().trim_start_matches('#');
        let r = r.trim_matches('/');
        match r {
            "cofunctions" => Page::CoFonctions,
            _ => Page::Primaire,
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Page::Primaire => "/",
            Page::CoFonctions => "/cofunctions",
        }
    }
}

/* ------------------------ Application ------------------------ */

#[derive(Clone, Debug)]
pub struct AppTrig {
    pub primaire: EcranCalc,
    pub cofonctions: EcranCalc,
    pub page: Page,
    pub toasts: Toasts,
}

impl Default for AppTrig {
    fn default() -> Self {
        Self {
            primaire: EcranCalc::new(Mode::Primaire),
            cofonctions: EcranCalc::new(Mode::CoFonction),
            page: Page::default(),
            toasts: Toasts::default(),
        }
    }
}

impl AppTrig {
    pub fn avec_page(page: Page) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn ecran_courant(&mut self) -> &mut EcranCalc {
        match self.page {
            Page::Primaire => &mut self.primaire,
            Page::CoFonctions => &mut self.cofonctions,
        }
    }

    pub fn naviguer(&mut self, page: Page) {
        if self.page != page {
            log::debug!("navigation {} -> {}", self.page.route(), page.route());
        }
        self.page = page;
        self.ecran_courant().focus_entree = true;
    }

    pub fn notifier(&mut self, notification: Notification, maintenant: f64) {
        self.toasts.pousser(notification, maintenant);
    }
}
