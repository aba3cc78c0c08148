pub mod record_crud;
