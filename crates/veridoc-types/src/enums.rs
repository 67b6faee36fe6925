//! Enumeration types for the recognition pipeline.

use serde::{Deserialize, Serialize};

/// The class of document submitted for recognition.
///
/// The store persists document types as fixed string tags; the codec in
/// `veridoc-store` owns that string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// An international passport.
    Passport,
    /// A national identity card.
    IdCard,
    /// A driver license.
    DriverLicense,
    /// A utility bill or similar proof-of-address document.
    ProofOfAddress,
}

impl DocumentType {
    /// All document types, in declaration order.
    ///
    /// Used by the seeder to cycle sample data through every variant.
    pub const ALL: [Self; 4] = [
        Self::Passport,
        Self::IdCard,
        Self::DriverLicense,
        Self::ProofOfAddress,
    ];
}
