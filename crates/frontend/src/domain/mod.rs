pub mod a001_product;
pub mod a002_selection;
pub mod a003_routine_chat;
