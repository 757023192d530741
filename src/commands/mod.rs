pub mod listing_commands;
