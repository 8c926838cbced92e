pub mod ensure;
