pub mod bt;
