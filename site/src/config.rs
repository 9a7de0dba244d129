//! Site configuration: branding, imagery, services, and contact details.
//!
//! DESIGN
//! ======
//! `SiteConfig` is built once at startup and passed explicitly into the
//! rendering entry point. The server may overlay a YAML file on top of the
//! defaults; every field has a default so partial files are valid. The page
//! treats all values as already validated and never loads or checks them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default acknowledgment duration after a valid submission.
pub const DEFAULT_ACKNOWLEDGMENT_MS: u64 = 5000;

/// One entry in the services grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub title: String,
    pub description: String,
}

impl ServiceEntry {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Hero section copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroCopy {
    pub headline: String,
    pub tagline: String,
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            headline: "Soluciones integrales en seguridad y comunicaciones".to_owned(),
            tagline: "Instalación y mantenimiento: puntos de venta, cercos eléctricos, \
                      cámaras, control de acceso, alarmas, redes y equipos de inspección."
                .to_owned(),
        }
    }
}

/// Display-only contact details shown beside the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub hours: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            phone: "+52 833 383 1105".to_owned(),
            email: "correo@gmail.com".to_owned(),
            hours: String::new(),
        }
    }
}

/// What happens to pending acknowledgment resets when the contact form is torn down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Resets run to completion even after teardown; nothing is cancelled.
    #[default]
    Detach,
    /// Pending resets are cancelled when the form is torn down.
    CancelOnDrop,
}

/// Immutable site configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub company_name: String,
    /// Show the company name beside the logo image. Ignored without a logo.
    pub show_name_next_to_logo: bool,
    /// Logo image path. `None` renders the text brand mark instead.
    pub logo: Option<String>,
    /// Page background image. `None` falls back to a gradient.
    pub hero_background: Option<String>,
    /// Gallery image paths, rendered in order.
    pub gallery: Vec<String>,
    /// Address the contact form's `mailto:` link is sent to.
    pub receiver: String,
    pub services: Vec<ServiceEntry>,
    pub hero: HeroCopy,
    pub contact: ContactInfo,
    pub copyright_year: u16,
    pub acknowledgment_ms: u64,
    pub reset_policy: ResetPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_name: "Intelitech".to_owned(),
            show_name_next_to_logo: true,
            logo: Some("/images/Logo.png".to_owned()),
            hero_background: Some("/images/Bg2.jpg".to_owned()),
            gallery: [
                "/images/Foto1.jpg",
                "/images/Foto2.jpg",
                "/images/Foto3.png",
                "/images/Foto4.jpeg",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            receiver: "correo@ejemplo.com".to_owned(),
            services: default_services(),
            hero: HeroCopy::default(),
            contact: ContactInfo::default(),
            copyright_year: 2021,
            acknowledgment_ms: DEFAULT_ACKNOWLEDGMENT_MS,
            reset_policy: ResetPolicy::Detach,
        }
    }
}

impl SiteConfig {
    /// How long the "message sent" indicator stays visible.
    #[must_use]
    pub fn acknowledgment_duration(&self) -> Duration {
        Duration::from_millis(self.acknowledgment_ms)
    }

    /// Whether the company name is rendered next to the logo image.
    #[must_use]
    pub fn name_beside_logo(&self) -> bool {
        self.logo.is_some() && self.show_name_next_to_logo
    }

    /// Gallery paths paired with their alt text (`Proyecto 1`, `Proyecto 2`, ...).
    pub fn gallery_items(&self) -> impl Iterator<Item = (&str, String)> {
        self.gallery
            .iter()
            .enumerate()
            .map(|(i, src)| (src.as_str(), format!("Proyecto {}", i + 1)))
    }
}

fn default_services() -> Vec<ServiceEntry> {
    vec![
        ServiceEntry::new(
            "Instalación de Puntos de Venta (POS)",
            "Implementación, configuración y soporte.",
        ),
        ServiceEntry::new(
            "Cercos Eléctricos",
            "Diseño e instalación con sistemas de detección y alarma.",
        ),
        ServiceEntry::new(
            "Cámaras de Seguridad",
            "CCTV, IP y sistemas de grabación NVR/DVR.",
        ),
        ServiceEntry::new(
            "Control de Acceso",
            "Lectores, controladores y soluciones biométricas.",
        ),
        ServiceEntry::new("Alarmas", "Sistemas de intrusión y monitoreo."),
        ServiceEntry::new(
            "Redes",
            "Cableado estructurado, switches y Wi-Fi empresarial.",
        ),
        ServiceEntry::new(
            "Estudios Site Survey",
            "Análisis en sitio para cobertura y diseño óptimo.",
        ),
        ServiceEntry::new(
            "Equipos de Inspección de Rayos X",
            "Suministro e instalación de equipos de inspección.",
        ),
    ]
}
