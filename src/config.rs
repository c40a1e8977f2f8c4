// Process configuration: where the plugin lives, how to reach it, and the plugin's own
// parameters taken from PLUGIN_CONFIG_<NAME> environment variables.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, error};

use crate::error::HarnessError;
use crate::model::{ConfigurationParameterValue, PluginDefinition, PluginParameterDataType};

pub const PLUGIN_URL: &str = "PLUGIN_URL";
pub const PLUGIN_TRANSPORT: &str = "PLUGIN_TRANSPORT";
pub const USE_TLS: &str = "USE_TLS";
pub const SSL_CERT_FILE: &str = "SSL_CERT_FILE";
pub const SHARED_SECRET: &str = "SHARED_SECRET";
pub const REST_BASIC_AUTH_USERNAME: &str = "REST_BASIC_AUTH_USERNAME";
pub const REST_BASIC_AUTH_PASSWORD: &str = "REST_BASIC_AUTH_PASSWORD";

pub const PLUGIN_CONFIG_PREFIX: &str = "PLUGIN_CONFIG_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportKind {
    #[default]
    Grpc,
    Rest,
}

impl FromStr for TransportKind {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GRPC" => Ok(TransportKind::Grpc),
            "REST" => Ok(TransportKind::Rest),
            other => Err(HarnessError::ConfigError(format!(
                "Unknown transport {}, expected GRPC or REST",
                other
            ))),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Grpc => write!(f, "GRPC"),
            TransportKind::Rest => write!(f, "REST"),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: Option<String>,
}

// Keep the password out of the logs
impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

// Plugin access configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEndpoint {
    // host:port
    pub address: String,
    pub transport: TransportKind,
    pub tls: bool,
    // PEM contents of an extra trust anchor (self-signed or otherwise untrusted chains)
    pub trust_certificate: Option<String>,
    pub shared_secret: Option<String>,
    pub basic_auth: Option<BasicAuth>,
}

impl PluginEndpoint {
    pub fn new(address: impl Into<String>, transport: TransportKind) -> Self {
        Self {
            address: address.into(),
            transport,
            tls: false,
            trust_certificate: None,
            shared_secret: None,
            basic_auth: None,
        }
    }

    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let address = present(PLUGIN_URL)
            .ok_or_else(|| HarnessError::ConfigError(format!("{} environment variable missing", PLUGIN_URL)))?;
        let transport = match present(PLUGIN_TRANSPORT) {
            Some(value) => value.parse()?,
            None => TransportKind::default(),
        };
        let tls = optional_boolean(present(USE_TLS), false);
        let trust_certificate = match present(SSL_CERT_FILE) {
            Some(path) => Some(std::fs::read_to_string(&path).map_err(|e| {
                HarnessError::ConfigError(format!("No such file or can't read: {} ({})", path, e))
            })?),
            None => None,
        };
        let basic_auth = present(REST_BASIC_AUTH_USERNAME).map(|username| BasicAuth {
            username,
            password: present(REST_BASIC_AUTH_PASSWORD),
        });

        Ok(Self {
            address,
            transport,
            tls,
            trust_certificate,
            shared_secret: present(SHARED_SECRET),
            basic_auth,
        })
    }

    pub fn base_url(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{}://{}", scheme, self.address)
    }
}

// Anything other than true/false (any case) falls back to the default
fn optional_boolean(value: Option<String>, default: bool) -> bool {
    match value {
        Some(value) if value.eq_ignore_ascii_case("true") => true,
        Some(value) if value.eq_ignore_ascii_case("false") => false,
        _ => default,
    }
}

fn check_parses(
    data_type: PluginParameterDataType,
    name: &str,
    value: &str,
) -> Result<(), HarnessError> {
    let parses = match data_type {
        PluginParameterDataType::String => true,
        PluginParameterDataType::Boolean => {
            value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
        }
        PluginParameterDataType::Double => value.parse::<f64>().is_ok(),
        PluginParameterDataType::Long => value.parse::<i64>().is_ok(),
        PluginParameterDataType::Unassigned | PluginParameterDataType::Unrecognized => {
            error!(parameter = name, ?data_type, "Unsupported/unknown/unset plugin configuration type");
            return Err(HarnessError::ConfigError(format!(
                "Unsupported configuration type {:?} for {}",
                data_type, name
            )));
        }
    };
    if parses {
        Ok(())
    } else {
        error!(parameter = name, value, "Unparseable value");
        Err(HarnessError::UnparseableParameter {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

// Matches every declared parameter against PLUGIN_CONFIG_<NAME>. Optional parameters
// without a value are left out.
pub fn resolve_parameters<F>(
    definition: &PluginDefinition,
    lookup: F,
) -> Result<Vec<ConfigurationParameterValue>, HarnessError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut values = Vec::with_capacity(definition.parameters.len());
    for parameter in &definition.parameters {
        let key = format!("{}{}", PLUGIN_CONFIG_PREFIX, parameter.name);
        match lookup(&key).filter(|value| !value.is_empty()) {
            Some(value) => {
                check_parses(parameter.data_type, &key, &value)?;
                values.push(ConfigurationParameterValue {
                    name: parameter.name.clone(),
                    value,
                });
            }
            None if parameter.required => {
                error!(parameter = %key, "Required plugin parameter is missing");
                return Err(HarnessError::MissingParameter(key));
            }
            None => debug!(parameter = %key, "Optional plugin parameter not set"),
        }
    }
    Ok(values)
}
