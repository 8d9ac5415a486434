pub mod key_value_store;
pub mod local_record_store;
