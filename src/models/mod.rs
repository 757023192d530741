pub mod dir_entry;
