use crate::config::ConfigService;

/// SAML2 binding URIs understood by the protocol client.
pub mod bindings {
    pub const SAML2_POST_BINDING_URI: &str = "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-POST";
    pub const SAML2_POST_SIMPLE_SIGN_BINDING_URI: &str =
        "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-POST-SimpleSign";
    pub const SAML2_REDIRECT_BINDING_URI: &str =
        "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-Redirect";
}

// Basic configuration
const CONFIG_SAML2_KEYSTORE_PATH: &str = "auth.saml2.keystore.path";
const CONFIG_SAML2_KEYSTORE_PASSWORD: &str = "auth.saml2.keystore.password";
const CONFIG_SAML2_PRIVATE_KEY_PASSWORD: &str = "auth.saml2.private.key.password";
const CONFIG_SAML2_IDENTITY_PROVIDER_METADATA_PATH: &str =
    "auth.saml2.identity.provider.metadata.path";

// Additional configuration
const CONFIG_SAML2_MAXIMUM_AUTHENTICATION_LIFETIME: &str =
    "auth.saml2.maximum.authentication.lifetime";
const CONFIG_SAML2_SERVICE_PROVIDER_ENTITY_ID: &str = "auth.saml2.service.provider.entity.id";
const CONFIG_SAML2_SERVICE_PROVIDER_METADATA_PATH: &str =
    "auth.saml2.service.provider.metadata.path";

// Advanced configuration
const CONFIG_SAML2_FORCE_AUTH: &str = "auth.saml2.force.auth";
const CONFIG_SAML2_PASSIVE: &str = "auth.saml2.passive";
const CONFIG_SAML2_AUTHN_REQUEST_BINDING_TYPE: &str = "auth.saml2.authn.request.binding.type";
const CONFIG_SAML2_USE_NAME_QUALIFIER: &str = "auth.saml2.use.name.qualifier";
const CONFIG_SAML2_ATTRIBUTE_CONSUMING_SERVICE_INDEX: &str =
    "auth.saml2.attribute.consuming.service.index";
const CONFIG_SAML2_ASSERTION_CONSUMER_SERVICE_INDEX: &str =
    "auth.saml2.assertion.consumer.service.index";
const CONFIG_SAML2_BLACKLISTED_SIGNATURE_SIGNING_ALGORITHMS: &str =
    "auth.saml2.blacklisted.signature.signing.algorithms";
const CONFIG_SAML2_SIGNATURE_ALGORITHMS: &str = "auth.saml2.signature.algorithms";
const CONFIG_SAML2_SIGNATURE_REFERENCE_DIGEST_METHODS: &str =
    "auth.saml2.signature.reference.digest.methods";
const CONFIG_SAML2_SIGNATURE_CANONICALIZATION_ALGORITHM: &str =
    "auth.saml2.signature.canonicalization.algorithm";
const CONFIG_SAML2_WANTS_ASSERTIONS_SIGNED: &str = "auth.saml2.wants.assertions.signed";
const CONFIG_SAML2_AUTHN_REQUEST_SIGNED: &str = "auth.saml2.authn.request.signed";

/// Configuration handed to the external SAML2 protocol client.
///
/// Optional fields stay `None` (and lists stay empty) when the corresponding
/// setting is absent or disabled, so the client keeps its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Saml2Configuration {
    pub keystore_path: String,
    pub keystore_password: String,
    pub private_key_password: String,
    pub identity_provider_metadata_path: String,
    pub maximum_authentication_lifetime: Option<i64>,
    pub service_provider_entity_id: Option<String>,
    pub service_provider_metadata_path: Option<String>,
    pub force_auth: bool,
    pub passive: bool,
    pub authn_request_binding_type: Option<String>,
    pub use_name_qualifier: bool,
    pub attribute_consuming_service_index: Option<i64>,
    pub assertion_consumer_service_index: Option<i64>,
    pub blacklisted_signature_signing_algorithms: Vec<String>,
    pub signature_algorithms: Vec<String>,
    pub signature_reference_digest_methods: Vec<String>,
    pub signature_canonicalization_algorithm: Option<String>,
    pub wants_assertions_signed: bool,
    pub authn_request_signed: bool,
}

/// Maps flat `auth.saml2.*` settings onto a [`Saml2Configuration`].
///
/// Pure data mapping: each setting is read once, with a typed default, and
/// applied to exactly one field.
pub struct Saml2ConfigBuilder {
    settings: ConfigService,
}

impl Saml2ConfigBuilder {
    pub fn new(settings: ConfigService) -> Self {
        Self { settings }
    }

    /// The module is considered enabled once a keystore path is configured.
    pub fn is_enabled(&self) -> bool {
        self.settings.get(CONFIG_SAML2_KEYSTORE_PATH).is_some()
    }

    pub fn build(&self) -> Saml2Configuration {
        let settings = &self.settings;

        let maximum_authentication_lifetime =
            settings.get_int(CONFIG_SAML2_MAXIMUM_AUTHENTICATION_LIFETIME, -1);
        let attribute_consuming_service_index =
            settings.get_int(CONFIG_SAML2_ATTRIBUTE_CONSUMING_SERVICE_INDEX, -1);
        let assertion_consumer_service_index =
            settings.get_int(CONFIG_SAML2_ASSERTION_CONSUMER_SERVICE_INDEX, -1);

        Saml2Configuration {
            keystore_path: settings.get_or(CONFIG_SAML2_KEYSTORE_PATH, ""),
            keystore_password: settings.get_or(CONFIG_SAML2_KEYSTORE_PASSWORD, ""),
            private_key_password: settings.get_or(CONFIG_SAML2_PRIVATE_KEY_PASSWORD, ""),
            identity_provider_metadata_path: settings
                .get_or(CONFIG_SAML2_IDENTITY_PROVIDER_METADATA_PATH, ""),
            maximum_authentication_lifetime: (maximum_authentication_lifetime >= 0)
                .then_some(maximum_authentication_lifetime),
            service_provider_entity_id: settings.get(CONFIG_SAML2_SERVICE_PROVIDER_ENTITY_ID),
            service_provider_metadata_path: settings
                .get(CONFIG_SAML2_SERVICE_PROVIDER_METADATA_PATH),
            force_auth: settings.get_bool(CONFIG_SAML2_FORCE_AUTH, false),
            passive: settings.get_bool(CONFIG_SAML2_PASSIVE, false),
            authn_request_binding_type: settings
                .get(CONFIG_SAML2_AUTHN_REQUEST_BINDING_TYPE)
                .map(|name| binding_uri(&name).to_string()),
            use_name_qualifier: settings.get_bool(CONFIG_SAML2_USE_NAME_QUALIFIER, false),
            attribute_consuming_service_index: (attribute_consuming_service_index >= 0)
                .then_some(attribute_consuming_service_index),
            assertion_consumer_service_index: (assertion_consumer_service_index >= 0)
                .then_some(assertion_consumer_service_index),
            blacklisted_signature_signing_algorithms: settings
                .get_list(CONFIG_SAML2_BLACKLISTED_SIGNATURE_SIGNING_ALGORITHMS),
            signature_algorithms: settings.get_list(CONFIG_SAML2_SIGNATURE_ALGORITHMS),
            signature_reference_digest_methods: settings
                .get_list(CONFIG_SAML2_SIGNATURE_REFERENCE_DIGEST_METHODS),
            signature_canonicalization_algorithm: settings
                .get(CONFIG_SAML2_SIGNATURE_CANONICALIZATION_ALGORITHM),
            wants_assertions_signed: settings.get_bool(CONFIG_SAML2_WANTS_ASSERTIONS_SIGNED, false),
            authn_request_signed: settings.get_bool(CONFIG_SAML2_AUTHN_REQUEST_SIGNED, false),
        }
    }
}

/// Resolve a symbolic binding name to its SAML2 URI, keeping unrecognized
/// values as-is.
fn binding_uri(name: &str) -> &str {
    match name {
        "SAML2_POST_BINDING_URI" => bindings::SAML2_POST_BINDING_URI,
        "SAML2_POST_SIMPLE_SIGN_BINDING_URI" => bindings::SAML2_POST_SIMPLE_SIGN_BINDING_URI,
        "SAML2_REDIRECT_BINDING_URI" => bindings::SAML2_REDIRECT_BINDING_URI,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_only_when_keystore_path_is_set() {
        let settings = ConfigService::default();
        let builder = Saml2ConfigBuilder::new(settings.clone());
        assert!(!builder.is_enabled());

        settings.set(CONFIG_SAML2_KEYSTORE_PATH, "/etc/app/saml.jks");
        assert!(builder.is_enabled());
    }

    #[test]
    fn empty_settings_keep_client_defaults() {
        let config = Saml2ConfigBuilder::new(ConfigService::default()).build();
        assert_eq!(config, Saml2Configuration::default());
    }

    #[test]
    fn symbolic_binding_names_resolve_to_uris() {
        let settings = ConfigService::default();
        settings.set(
            CONFIG_SAML2_AUTHN_REQUEST_BINDING_TYPE,
            "SAML2_REDIRECT_BINDING_URI",
        );
        let config = Saml2ConfigBuilder::new(settings).build();
        assert_eq!(
            config.authn_request_binding_type.as_deref(),
            Some(bindings::SAML2_REDIRECT_BINDING_URI)
        );
    }

    #[test]
    fn unrecognized_binding_names_pass_through() {
        let settings = ConfigService::default();
        settings.set(
            CONFIG_SAML2_AUTHN_REQUEST_BINDING_TYPE,
            "urn:example:custom-binding",
        );
        let config = Saml2ConfigBuilder::new(settings).build();
        assert_eq!(
            config.authn_request_binding_type.as_deref(),
            Some("urn:example:custom-binding")
        );
    }

    #[test]
    fn negative_indices_stay_disabled() {
        let settings = ConfigService::default();
        settings.set(CONFIG_SAML2_ATTRIBUTE_CONSUMING_SERVICE_INDEX, "-1");
        settings.set(CONFIG_SAML2_ASSERTION_CONSUMER_SERVICE_INDEX, "2");
        let config = Saml2ConfigBuilder::new(settings).build();
        assert_eq!(config.attribute_consuming_service_index, None);
        assert_eq!(config.assertion_consumer_service_index, Some(2));
    }

    #[test]
    fn populates_all_mapped_fields() {
        let settings = ConfigService::default();
        settings.set(CONFIG_SAML2_KEYSTORE_PATH, "/etc/app/saml.jks");
        settings.set(CONFIG_SAML2_KEYSTORE_PASSWORD, "store-secret");
        settings.set(CONFIG_SAML2_PRIVATE_KEY_PASSWORD, "key-secret");
        settings.set(
            CONFIG_SAML2_IDENTITY_PROVIDER_METADATA_PATH,
            "https://idp.example.com/metadata.xml",
        );
        settings.set(CONFIG_SAML2_MAXIMUM_AUTHENTICATION_LIFETIME, "3600");
        settings.set(CONFIG_SAML2_SERVICE_PROVIDER_ENTITY_ID, "urn:example:sp");
        settings.set(CONFIG_SAML2_FORCE_AUTH, "true");
        settings.set(
            CONFIG_SAML2_SIGNATURE_ALGORITHMS,
            "rsa-sha256, rsa-sha512",
        );
        settings.set(CONFIG_SAML2_WANTS_ASSERTIONS_SIGNED, "true");

        let config = Saml2ConfigBuilder::new(settings).build();
        assert_eq!(config.keystore_path, "/etc/app/saml.jks");
        assert_eq!(config.keystore_password, "store-secret");
        assert_eq!(config.private_key_password, "key-secret");
        assert_eq!(
            config.identity_provider_metadata_path,
            "https://idp.example.com/metadata.xml"
        );
        assert_eq!(config.maximum_authentication_lifetime, Some(3600));
        assert_eq!(
            config.service_provider_entity_id.as_deref(),
            Some("urn:example:sp")
        );
        assert_eq!(config.service_provider_metadata_path, None);
        assert!(config.force_auth);
        assert!(!config.passive);
        assert_eq!(config.signature_algorithms, vec!["rsa-sha256", "rsa-sha512"]);
        assert!(config.blacklisted_signature_signing_algorithms.is_empty());
        assert!(config.wants_assertions_signed);
        assert!(!config.authn_request_signed);
    }
}
