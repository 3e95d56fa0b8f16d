use schemars::JsonSchema;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of the connection behind one association.
///
/// Serialized with the status strings the operator writes on its resources:
/// an empty string means the association was never reconciled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EstablishmentState {
    #[default]
    Unknown,
    Pending,
    Established,
    Failed,
}

impl EstablishmentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstablishmentState::Unknown => "",
            EstablishmentState::Pending => "Pending",
            EstablishmentState::Established => "Established",
            EstablishmentState::Failed => "Failed",
        }
    }

    pub fn is_established(&self) -> bool {
        matches!(self, EstablishmentState::Established)
    }
}

// Written by hand so the schema lists the wire strings, not the variant names.
impl JsonSchema for EstablishmentState {
    fn schema_name() -> String {
        "EstablishmentState".to_string()
    }

    fn json_schema(_gen: &mut schemars::r#gen::SchemaGenerator) -> Schema {
        let states = [
            EstablishmentState::Unknown,
            EstablishmentState::Pending,
            EstablishmentState::Established,
            EstablishmentState::Failed,
        ];
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            enum_values: Some(states.iter().map(|s| s.as_str().into()).collect()),
            ..Default::default()
        }
        .into()
    }
}

impl From<&str> for EstablishmentState {
    fn from(s: &str) -> Self {
        match s {
            "Pending" => EstablishmentState::Pending,
            "Established" => EstablishmentState::Established,
            "Failed" => EstablishmentState::Failed,
            _ => EstablishmentState::Unknown,
        }
    }
}

impl From<String> for EstablishmentState {
    fn from(s: String) -> Self {
        EstablishmentState::from(s.as_str())
    }
}

impl From<EstablishmentState> for String {
    fn from(state: EstablishmentState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for EstablishmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstablishmentState::Unknown => write!(f, "Unknown"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssociationKind {
    Elasticsearch,
    Kibana,
    FleetServer,
}

impl AssociationKind {
    /// Association type string, used as the key in observed status.
    pub fn association_type(&self) -> &'static str {
        match self {
            AssociationKind::Elasticsearch => "elasticsearch",
            AssociationKind::Kibana => "kibana",
            AssociationKind::FleetServer => "fleet-server",
        }
    }
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.association_type())
    }
}

/// Reference to the resource on the other side of an association.
#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default, PartialEq)]
pub struct AssociationRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl fmt::Display for AssociationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}/{}", ns, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Connection settings resolved for an association. Informational only, the
/// health of a workload never depends on it.
#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssociationConf {
    #[serde(default)]
    pub auth_secret_name: String,
    #[serde(default)]
    pub auth_secret_key: String,
    #[serde(default)]
    pub ca_cert_provided: bool,
    #[serde(default)]
    pub ca_secret_name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl AssociationConf {
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Payload shared by every association variant.
#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default, PartialEq)]
pub struct AssociationLink {
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<AssociationRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf: Option<AssociationConf>,
    #[serde(default)]
    pub status: EstablishmentState,
}

impl AssociationLink {
    pub fn with_status(status: EstablishmentState) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }
}

/// Capability every association exposes to the health evaluators.
pub trait Associated {
    fn kind(&self) -> AssociationKind;
    fn establishment_state(&self) -> EstablishmentState;
}

/// A declared dependency of the workload on an external service.
#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Association {
    Elasticsearch(AssociationLink),
    Kibana(AssociationLink),
    FleetServer(AssociationLink),
}

impl Association {
    pub fn new(kind: AssociationKind, link: AssociationLink) -> Self {
        match kind {
            AssociationKind::Elasticsearch => Association::Elasticsearch(link),
            AssociationKind::Kibana => Association::Kibana(link),
            AssociationKind::FleetServer => Association::FleetServer(link),
        }
    }

    pub fn link(&self) -> &AssociationLink {
        match self {
            Association::Elasticsearch(l)
            | Association::Kibana(l)
            | Association::FleetServer(l) => l,
        }
    }

    pub fn conf(&self) -> Option<&AssociationConf> {
        self.link().conf.as_ref()
    }
}

impl Associated for Association {
    fn kind(&self) -> AssociationKind {
        match self {
            Association::Elasticsearch(_) => AssociationKind::Elasticsearch,
            Association::Kibana(_) => AssociationKind::Kibana,
            Association::FleetServer(_) => AssociationKind::FleetServer,
        }
    }

    fn establishment_state(&self) -> EstablishmentState {
        self.link().status
    }
}
