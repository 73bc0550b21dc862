//! src/app/notif.rs
//!
//! Notifications transitoires (toasts), sans vue.
//!
//! Un écran ne fait qu’émettre une `Notification` (événement) ; l’app la pousse ici
//! avec l’heure egui courante, et la vue l’affiche tant qu’elle n’a pas expiré.

/// Durée d’affichage d’un toast (secondes).
pub const DUREE_TOAST: f64 = 4.0;

/// Toasts visibles en même temps : le plus récent remplace les autres.
pub const TOASTS_MAX: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variante {
    Succes,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub titre: String,
    pub description: String,
    pub variante: Variante,
}

impl Notification {
    pub fn succes(titre: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            titre: titre.into(),
            description: description.into(),
            variante: Variante::Succes,
        }
    }

    pub fn destructive(titre: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            titre: titre.into(),
            description: description.into(),
            variante: Variante::Destructive,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub notification: Notification,
    pub expire_a: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    actifs: Vec<Toast>,
}

impl Toasts {
    /// Ajoute un toast ; au-delà de TOASTS_MAX, les plus anciens sortent.
    pub fn pousser(&mut self, notification: Notification, maintenant: f64) {
        self.actifs.push(Toast {
            notification,
            expire_a: maintenant + DUREE_TOAST,
        });
        if self.actifs.len() > TOASTS_MAX {
            let trop = self.actifs.len() - TOASTS_MAX;
            self.actifs.drain(..trop);
        }
    }

    /// Retire les toasts expirés.
    pub fn purger(&mut self, maintenant: f64) {
        self.actifs.retain(|t| t.expire_a > maintenant);
    }

    /// Retire un toast (bouton ×).
    pub fn fermer(&mut self, index: usize) {
        if index < self.actifs.len() {
            self.actifs.remove(index);
        }
    }

    pub fn actifs(&self) -> &[Toast] {
        &self.actifs
    }

    /// Prochaine expiration, pour planifier un repaint.
    pub fn prochaine_expiration(&self) -> Option<f64> {
        self.actifs.iter().map(|t| t.expire_a).reduce(f64::min)
    }
}
