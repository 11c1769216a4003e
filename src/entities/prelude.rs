pub use super::search_records::Entity as SearchRecords;
