pub mod client_ip;
pub mod tracking_path;
