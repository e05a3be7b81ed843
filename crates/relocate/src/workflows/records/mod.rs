//! User-submitted relocation records: location searches, moving-service
//! requests, and profiles.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{
    BudgetRange, LocationSearch, LocationSearchSubmission, MovingService, MovingServiceStatus,
    MovingServiceSubmission, MovingServiceType, ProfileSubmission, RelocationStatus,
    RemotePreference, UserProfile,
};
pub use router::records_router;
pub use service::{RecordsError, RelocationRecords};
