pub mod saml;

pub use saml::{Saml2ConfigBuilder, Saml2Configuration};
