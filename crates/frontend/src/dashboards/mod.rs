pub mod d400_admin;
pub mod d401_client;
pub mod d402_customer;
pub mod d403_driver;
