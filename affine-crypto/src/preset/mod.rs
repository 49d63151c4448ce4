pub mod encoding_table;
