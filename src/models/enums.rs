use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(HealthStatus {
    Normal => "Normal",
    Warning => "Warning",
    Critical => "Critical",
});

str_enum!(AlertLevel {
    Warning => "Warning",
    Critical => "Critical",
});

impl HealthStatus {
    /// Ordinal severity: Normal < Warning < Critical.
    pub fn severity(self) -> u8 {
        match self {
            HealthStatus::Normal => 0,
            HealthStatus::Warning => 1,
            HealthStatus::Critical => 2,
        }
    }

    /// Alert level for this status. `None` for Normal.
    pub fn alert_level(self) -> Option<AlertLevel> {
        match self {
            HealthStatus::Normal => None,
            HealthStatus::Warning => Some(AlertLevel::Warning),
            HealthStatus::Critical => Some(AlertLevel::Critical),
        }
    }
}

impl From<AlertLevel> for HealthStatus {
    fn from(level: AlertLevel) -> Self {
        match level {
            AlertLevel::Warning => HealthStatus::Warning,
            AlertLevel::Critical => HealthStatus::Critical,
        }
    }
}
