//! Resource kind enumeration.

use std::fmt;

use resource_types::Indexable;

use crate::{AutonomousDatabase, Cluster, Compartment, Image, Instance, Policy, Subnet, Vcn};

/// The resource kinds with an adapter in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Image,
    Instance,
    Cluster,
    Policy,
    Subnet,
    Vcn,
    AutonomousDatabase,
    Compartment,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Image,
        ResourceKind::Instance,
        ResourceKind::Cluster,
        ResourceKind::Policy,
        ResourceKind::Subnet,
        ResourceKind::Vcn,
        ResourceKind::AutonomousDatabase,
        ResourceKind::Compartment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::Instance => "instance",
            ResourceKind::Cluster => "cluster",
            ResourceKind::Policy => "policy",
            ResourceKind::Subnet => "subnet",
            ResourceKind::Vcn => "vcn",
            ResourceKind::AutonomousDatabase => "autonomous_database",
            ResourceKind::Compartment => "compartment",
        }
    }

    /// Parse from string, returning None for unknown kinds.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    /// Searchable fields declared by this kind's adapter.
    pub fn searchable_fields(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Image => Image::searchable_fields(),
            ResourceKind::Instance => Instance::searchable_fields(),
            ResourceKind::Cluster => Cluster::searchable_fields(),
            ResourceKind::Policy => Policy::searchable_fields(),
            ResourceKind::Subnet => Subnet::searchable_fields(),
            ResourceKind::Vcn => Vcn::searchable_fields(),
            ResourceKind::AutonomousDatabase => AutonomousDatabase::searchable_fields(),
            ResourceKind::Compartment => Compartment::searchable_fields(),
        }
    }

    /// Boosted fields declared by this kind's adapter.
    pub fn boosted_fields(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Image => Image::boosted_fields(),
            ResourceKind::Instance => Instance::boosted_fields(),
            ResourceKind::Cluster => Cluster::boosted_fields(),
            ResourceKind::Policy => Policy::boosted_fields(),
            ResourceKind::Subnet => Subnet::boosted_fields(),
            ResourceKind::Vcn => Vcn::boosted_fields(),
            ResourceKind::AutonomousDatabase => AutonomousDatabase::boosted_fields(),
            ResourceKind::Compartment => Compartment::boosted_fields(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown resource kind: {}", s))
    }
}
