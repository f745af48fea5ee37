//! Diesel schema for field-operations persistence.

diesel::table! {
    /// Field workers with golden-point balances.
    workers (worker_id) {
        /// Worker identifier.
        #[max_length = 64]
        worker_id -> Varchar,
        /// Field role.
        #[max_length = 50]
        role -> Varchar,
        /// Coarse area label.
        #[max_length = 255]
        area -> Varchar,
        /// Golden-point balance; written only by the ledger.
        golden_points -> Int8,
        /// Assignment-pool eligibility flag.
        is_active -> Bool,
        /// Registration timestamp.
        registered_at -> Timestamptz,
    }
}

diesel::table! {
    /// Registered residents with green-point balances.
    residents (resident_id) {
        /// Resident identifier.
        #[max_length = 64]
        resident_id -> Varchar,
        /// Canonical home identifier, unique per resident.
        #[max_length = 64]
        home_id -> Varchar,
        /// Coarse area label.
        #[max_length = 255]
        area -> Varchar,
        /// Green-point balance; written only by the ledger.
        green_points -> Int8,
        /// Registration timestamp.
        registered_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records with the monotonic assigned/completed state.
    tasks (task_id) {
        /// Task identifier.
        #[max_length = 64]
        task_id -> Varchar,
        /// Owning worker.
        #[max_length = 64]
        worker_id -> Varchar,
        /// Task kind.
        #[max_length = 50]
        kind -> Varchar,
        /// Short title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional longer description.
        description -> Nullable<Text>,
        /// Optional linked home identifier.
        #[max_length = 64]
        home_id -> Nullable<Varchar>,
        /// Optional free-text location label.
        #[max_length = 255]
        location -> Nullable<Varchar>,
        /// Dispatch priority.
        #[max_length = 50]
        priority -> Varchar,
        /// Lifecycle state.
        #[max_length = 50]
        state -> Varchar,
        /// Point award granted at completion.
        award -> Int8,
        /// Assignment timestamp.
        assigned_at -> Timestamptz,
        /// Completion timestamp, absent until completed.
        completed_at -> Nullable<Timestamptz>,
        /// Completion proof payload (notes, photo reference).
        proof -> Nullable<Jsonb>,
    }
}

diesel::table! {
    /// Append-only proof-of-presence scans.
    verification_scans (scan_id) {
        /// Scan identifier.
        #[max_length = 64]
        scan_id -> Varchar,
        /// Scanning worker.
        #[max_length = 64]
        worker_id -> Varchar,
        /// Scanned canonical home identifier.
        #[max_length = 64]
        home_id -> Varchar,
        /// Scan timestamp.
        scanned_at -> Timestamptz,
    }
}

diesel::table! {
    /// Same-day collection marks written at scan intake.
    daily_collections (home_id, worker_id, collected_on) {
        /// Collected home.
        #[max_length = 64]
        home_id -> Varchar,
        /// Collecting worker.
        #[max_length = 64]
        worker_id -> Varchar,
        /// Collection date.
        collected_on -> Date,
    }
}

diesel::table! {
    /// Append-only incentive activity trail for both account kinds.
    activities (activity_id) {
        /// Activity identifier.
        #[max_length = 64]
        activity_id -> Varchar,
        /// Account population discriminant.
        #[max_length = 50]
        account_kind -> Varchar,
        /// Account identifier within its population.
        #[max_length = 64]
        account_id -> Varchar,
        /// Event category.
        #[max_length = 50]
        category -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Positive point delta.
        points -> Int8,
        /// Event timestamp.
        recorded_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(workers, residents, tasks, verification_scans, daily_collections, activities);
