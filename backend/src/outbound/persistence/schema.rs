//! Diesel table definition for the SQLite schema.
//!
//! Must match the embedded migrations exactly; Diesel uses it for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Todo rows, one per task, scoped by owner token.
    todos (id) {
        /// Auto-increment primary key, the external handle for a todo.
        id -> Integer,
        /// Opaque owner token the row is scoped to.
        owner -> Text,
        /// Task text.
        task -> Text,
        /// Completion flag.
        done -> Bool,
    }
}
