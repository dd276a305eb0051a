pub mod id_generator;
pub mod money;
pub mod payment;
