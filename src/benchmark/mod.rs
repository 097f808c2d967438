pub mod benchmark;
