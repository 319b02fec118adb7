//! Static content shown around verification results.

use crate::domain::entities::{NextStep, TourismOption};

/// Service providing the fixed guidance and promotional lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentService;

impl ContentService {
    pub fn new() -> Self {
        Self
    }

    /// Steps suggested to the user after a failed verification.
    pub fn next_steps(&self) -> Vec<NextStep> {
        vec![
            NextStep {
                icon: "fa-link",
                text: "Verifica que el enlace sea correcto",
                link: None,
            },
            NextStep {
                icon: "fa-redo",
                text: "Intenta registrarte nuevamente si el token ha expirado",
                link: Some("/register"),
            },
            NextStep {
                icon: "fa-headset",
                text: "Contacta con soporte si el problema persiste",
                link: Some("/contact"),
            },
        ]
    }

    /// Destinations promoted on the verification page.
    pub fn tourism_options(&self) -> Vec<TourismOption> {
        vec![
            TourismOption {
                title: "Cartagena",
                description: "Descubre los mejores hospedajes, restaurantes y precios justos en \
                              la Ciudad Heroica.",
                icon: "fa-building",
                color: "#f59e0b",
            },
            TourismOption {
                title: "Coveñas",
                description: "Explora las hermosas playas de Sucre con recomendaciones \
                              confiables y precios transparentes.",
                icon: "fa-umbrella-beach",
                color: "#06b6d4",
            },
        ]
    }
}
