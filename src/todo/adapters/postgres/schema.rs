//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records keyed by a store-assigned sequential identifier.
    todos (id) {
        /// Store-assigned identifier (`BIGSERIAL`).
        id -> Int8,
        /// Required title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Optional free-text status.
        #[max_length = 50]
        status -> Nullable<Varchar>,
        /// Required priority; filtered by exact match.
        #[max_length = 50]
        priority -> Varchar,
        /// Optional due date (no time-of-day).
        due_date -> Nullable<Date>,
        /// Optional caller-supplied creation timestamp.
        created_at -> Nullable<Timestamptz>,
        /// Last-update timestamp, set by the lifecycle service.
        updated_at -> Nullable<Timestamptz>,
    }
}
