pub mod pregnancy;
