pub mod sathi;
