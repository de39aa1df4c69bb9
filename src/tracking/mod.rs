pub mod crm;
pub mod gtm;
