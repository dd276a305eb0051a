pub mod uuid_payment_id_generator;
