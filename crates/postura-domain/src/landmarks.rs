//! Anatomical landmark vocabulary
//!
//! Labels are the exact strings the marking UI writes into point
//! files. Lookups are byte-exact: accents, case, and spacing must all
//! agree with these constants.

use postura_types::PhotoType;

pub const TOP_OF_HEAD: &str = "Topo da cabeça";
pub const CHIN: &str = "Queixo";
pub const LEFT_EAR: &str = "Orelha esquerda";
pub const RIGHT_EAR: &str = "Orelha direita";
pub const LEFT_SHOULDER: &str = "Ombro esquerdo";
pub const RIGHT_SHOULDER: &str = "Ombro direito";
pub const C7: &str = "C7 (base do pescoço)";
pub const PELVIS_CENTER: &str = "Centro da pelve";
pub const LEFT_ILIAC_CREST: &str = "Crista ilíaca esquerda";
pub const RIGHT_ILIAC_CREST: &str = "Crista ilíaca direita";
pub const LEFT_HIP: &str = "Quadril esquerdo";
pub const RIGHT_HIP: &str = "Quadril direito";
pub const LEFT_KNEE: &str = "Joelho esquerdo";
pub const RIGHT_KNEE: &str = "Joelho direito";
pub const LEFT_ANKLE: &str = "Tornozelo esquerdo";
pub const RIGHT_ANKLE: &str = "Tornozelo direito";

/// Landmarks offered for a front-view photo, head to toe
pub const FRONT_LANDMARKS: [&str; 16] = [
    TOP_OF_HEAD,
    CHIN,
    LEFT_EAR,
    RIGHT_EAR,
    LEFT_SHOULDER,
    RIGHT_SHOULDER,
    C7,
    PELVIS_CENTER,
    LEFT_ILIAC_CREST,
    RIGHT_ILIAC_CREST,
    LEFT_HIP,
    RIGHT_HIP,
    LEFT_KNEE,
    RIGHT_KNEE,
    LEFT_ANKLE,
    RIGHT_ANKLE,
];

/// Back view hides the chin and ears
pub const BACK_LANDMARKS: [&str; 13] = [
    TOP_OF_HEAD,
    LEFT_SHOULDER,
    RIGHT_SHOULDER,
    C7,
    PELVIS_CENTER,
    LEFT_ILIAC_CREST,
    RIGHT_ILIAC_CREST,
    LEFT_HIP,
    RIGHT_HIP,
    LEFT_KNEE,
    RIGHT_KNEE,
    LEFT_ANKLE,
    RIGHT_ANKLE,
];

/// Side views expose a single side of the body
pub const SIDE_LEFT_LANDMARKS: [&str; 8] = [
    TOP_OF_HEAD,
    LEFT_EAR,
    C7,
    LEFT_SHOULDER,
    PELVIS_CENTER,
    LEFT_HIP,
    LEFT_KNEE,
    LEFT_ANKLE,
];

pub const SIDE_RIGHT_LANDMARKS: [&str; 8] = [
    TOP_OF_HEAD,
    RIGHT_EAR,
    C7,
    RIGHT_SHOULDER,
    PELVIS_CENTER,
    RIGHT_HIP,
    RIGHT_KNEE,
    RIGHT_ANKLE,
];

/// Vocabulary the marking UI offers for a given view
pub fn landmarks_for_view(photo: PhotoType) -> &'static [&'static str] {
    match photo {
        PhotoType::Front => &FRONT_LANDMARKS,
        PhotoType::Back => &BACK_LANDMARKS,
        PhotoType::SideLeft => &SIDE_LEFT_LANDMARKS,
        PhotoType::SideRight => &SIDE_RIGHT_LANDMARKS,
    }
}

/// Whether a label belongs to the vocabulary of this view
pub fn is_known_landmark(label: &str, photo: PhotoType) -> bool {
    landmarks_for_view(photo).contains(&label)
}
