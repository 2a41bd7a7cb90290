//! Storage tests against real SQLite databases.
