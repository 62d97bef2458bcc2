//! Closed enumerations shared across stage schemas.
//!
//! Each enum serializes to the exact wire value the model is asked to emit;
//! anything else fails deserialization and therefore schema validation.

use serde::{Deserialize, Serialize};

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
        $(default $default:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Wire values for JSON schema `enum` lists
            pub fn wire_values() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        $(
            impl Default for $name {
                fn default() -> Self {
                    Self::$default
                }
            }
        )?
    };
}

closed_enum! {
    /// Architectural role of a component
    ComponentCategory {
        Agent => "Agent",
        Database => "Database",
        Service => "Service",
        Interface => "Interface",
        Orchestrator => "Orchestrator",
        Cache => "Cache",
        Queue => "Queue",
        Gateway => "Gateway",
    }
}

closed_enum! {
    /// How much the system depends on a component
    Criticality {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
    default Medium
}

closed_enum! {
    /// Likelihood of a failure point materializing
    Probability {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
    default Medium
}

closed_enum! {
    /// Impact of a failure point
    Severity {
        Minor => "minor",
        Critical => "critical",
        Catastrophic => "catastrophic",
    }
    default Critical
}

closed_enum! {
    /// Risk that a technology becomes unsupported
    DeprecationRisk {
        None => "none",
        Low => "low",
        Medium => "medium",
        High => "high",
    }
    default None
}
