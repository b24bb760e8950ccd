pub mod arp;
pub mod enrich;
pub mod hostname;
pub mod probe;
pub mod report;
pub mod sweep;
pub mod system;
pub mod vendors;
