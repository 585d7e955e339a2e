pub mod accounts;
pub mod backup;
pub mod confirm;
pub mod consolidate;
pub mod dedup;
pub mod drain;
pub mod seed;
pub mod snapshot;

/// The eight collections the app reads after consolidation.
pub const CANONICAL_COLLECTIONS: [&str; 8] = [
    "employees",
    "users",
    "departments",
    "time_entries",
    "leave_requests",
    "payroll_records",
    "announcements",
    "settings",
];
