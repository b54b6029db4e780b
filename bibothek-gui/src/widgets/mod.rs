pub mod book_table;
pub mod filter_sidebar;
