pub mod remote_collection;
